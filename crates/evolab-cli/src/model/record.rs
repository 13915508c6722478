use chrono::{DateTime, Utc};
use evolab_engine::{
    Biome, Compatibility, GENERATION_COUNT, GenerationResult, MalformedResultError, ScoringRule,
    SimulationSeed, TraitSelection,
};
use serde::{Deserialize, Serialize};

/// A finished run, as saved by `evolab run --output`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimulationRecord {
    pub traits: TraitSelection,
    pub biome: Biome,
    pub seed: SimulationSeed,
    pub rule: ScoringRule,
    pub simulated_at: DateTime<Utc>,
    pub results: Vec<GenerationResult>,
}

impl SimulationRecord {
    /// Re-checks every result against the record it is stored in.
    ///
    /// A record holds all five generations in order (1, 2, ...), each result
    /// is valid on its own, carries a pressure adjustment exactly when the
    /// record's rule is [`ScoringRule::Pressure`], and rates its traits for
    /// the record's biome. Records are plain JSON and may have been edited
    /// since they were saved.
    pub fn check(&self) -> Result<(), MalformedResultError> {
        let expected_len = usize::from(GENERATION_COUNT);
        if self.results.len() != expected_len {
            return Err(MalformedResultError::IncompleteRun {
                expected: expected_len,
                actual: self.results.len(),
            });
        }
        for (expected, result) in (1..).zip(&self.results) {
            if result.generation() != expected {
                return Err(MalformedResultError::OutOfOrder {
                    expected: usize::from(expected),
                    actual: result.generation(),
                });
            }
            result.check()?;
            if result.pressure().is_some() != (self.rule == ScoringRule::Pressure) {
                return Err(MalformedResultError::RuleMismatch {
                    generation: expected,
                    rule: self.rule,
                });
            }
            for (category, score) in result.trait_scores() {
                if score.compatibility != Compatibility::lookup(*category, self.biome, score.value) {
                    return Err(MalformedResultError::BiomeMismatch {
                        generation: expected,
                        category: *category,
                    });
                }
            }
        }
        Ok(())
    }
}
