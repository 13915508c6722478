use crate::{ScoringRule, TraitCategory, TraitValue};

/// Input rejected before any score is computed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidInputError {
    #[display("unknown biome: {value:?}")]
    UnknownBiome { value: String },
    #[display("unknown trait category: {value:?}")]
    UnknownTraitCategory { value: String },
    #[display("unknown trait value: {value:?}")]
    UnknownTraitValue { value: String },
    #[display("missing trait: {category}")]
    MissingTrait { category: TraitCategory },
    #[display("invalid value for trait {category}: {value}")]
    MismatchedTrait {
        category: TraitCategory,
        value: TraitValue,
    },
    #[display("no biome selected")]
    MissingBiome,
    #[display("generation {generation} is outside 1..={max}")]
    GenerationOutOfRange { generation: u8, max: u8 },
}

/// A generation result that violates one of its invariants.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MalformedResultError {
    #[display("adaptation score {score} is outside 0..=100")]
    ScoreOutOfRange { score: u8 },
    #[display("generation {generation} is outside 1..={max}")]
    GenerationOutOfRange { generation: u8, max: u8 },
    #[display("expected {expected} trait scores, found {actual}")]
    TraitScoreCount { expected: usize, actual: usize },
    #[display("trait score for {category} is inconsistent with its compatibility")]
    TraitScoreMismatch { category: TraitCategory },
    #[display("survival flag {survived} does not match score {score}")]
    SurvivalMismatch { score: u8, survived: bool },
    #[display("mutation record presence does not match the mutation flag ({expected})")]
    MutationMismatch { expected: bool },
    #[display("expected generation {expected} next, found {actual}")]
    OutOfOrder { expected: usize, actual: u8 },
    #[display("expected {expected} generations, found {actual}")]
    IncompleteRun { expected: usize, actual: usize },
    #[display("generation {generation} was not scored with the {rule} rule")]
    RuleMismatch { generation: u8, rule: ScoringRule },
    #[display("generation {generation} rates {category} for a different biome")]
    BiomeMismatch {
        generation: u8,
        category: TraitCategory,
    },
}

/// Error returned by the fitness evaluator and the generation loop.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum EvaluationError {
    #[display("invalid input: {_0}")]
    InvalidInput(InvalidInputError),
    #[display("malformed result: {_0}")]
    MalformedResult(MalformedResultError),
}

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("mutation chance {value} is outside [0, 1]")]
    MutationChanceOutOfRange { value: f64 },
}
