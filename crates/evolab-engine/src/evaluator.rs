//! The fitness evaluator.
//!
//! [`evaluate`] maps a trait selection, a biome, a generation index and a
//! "mutation occurs" flag to a [`GenerationResult`]. It has no state of its
//! own; randomness comes from the caller's random source.
//!
//! # Scoring
//!
//! ```text
//! trait_score[c]  = score(compatibility(c, biome, value[c]))   Excellent 100, Good 75,
//!                                                              Poor 40, Unknown 25
//! mean            = round_half_up(Σ trait_score / 7)
//!
//! Mean rule:      adaptation = mean
//! Pressure rule:  adaptation = clamp(mean + event_modifier - min(5 × generation, 20), 0, 100)
//!
//! survived        = adaptation ≥ 30
//! ```
//!
//! The mean rule is the default. The pressure rule draws one
//! [`EnvironmentalEvent`] per generation and makes later generations harder.
//!
//! # Mutation
//!
//! When a mutation occurs, one category is chosen uniformly, and its value is
//! replaced by a different value of the same category, chosen uniformly. The
//! change is applied to a working copy before scoring, so it affects the
//! generation in which it occurs. The caller's selection is left untouched.
//!
//! # Random draws
//!
//! Draws happen in a fixed order so that seeded sources reproduce results:
//! mutation category, mutation value, then the environmental event.

use std::collections::BTreeMap;

use rand::{Rng, seq::IndexedRandom as _};
use serde::{Deserialize, Serialize};

use crate::{
    Biome, Compatibility, EvaluationError, GenerationResult, InvalidInputError,
    MalformedResultError, MutationRecord, Organism, PressureAdjustment, TraitCategory,
    TraitScore, TraitSelection,
};

/// Minimum adaptation score for a generation to survive.
pub const SURVIVAL_THRESHOLD: u8 = 30;

/// Number of generations in a run.
pub const GENERATION_COUNT: u8 = 5;

const DIFFICULTY_PER_GENERATION: u8 = 5;
const MAX_DIFFICULTY_PENALTY: u8 = 20;

/// Formula used to turn per-trait scores into the adaptation score.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
#[serde(rename_all = "lowercase")]
pub enum ScoringRule {
    /// Rounded mean of the per-trait scores.
    #[default]
    #[display("mean")]
    Mean,
    /// Mean adjusted by a random environmental event and a generation difficulty penalty.
    #[display("pressure")]
    Pressure,
}

/// Random event drawn once per generation by [`ScoringRule::Pressure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentalEvent {
    Catastrophe,
    HarshSeason,
    StableSeason,
    MildSeason,
    Abundance,
}

impl EnvironmentalEvent {
    pub const ALL: [Self; 5] = [
        Self::Catastrophe,
        Self::HarshSeason,
        Self::StableSeason,
        Self::MildSeason,
        Self::Abundance,
    ];

    #[must_use]
    pub const fn modifier(self) -> i8 {
        match self {
            Self::Catastrophe => -20,
            Self::HarshSeason => -10,
            Self::StableSeason => 0,
            Self::MildSeason => 10,
            Self::Abundance => 20,
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Catastrophe => "A catastrophe struck",
            Self::HarshSeason => "A harsh season thinned the population",
            Self::StableSeason => "The season was uneventful",
            Self::MildSeason => "A mild season helped the population",
            Self::Abundance => "Resources were abundant",
        }
    }
}

/// Evaluates one generation.
///
/// # Arguments
///
/// * `traits` - The selected traits; must have a value of its own category for every category
/// * `biome` - Environment to score against
/// * `generation` - Generation index in `1..=GENERATION_COUNT`
/// * `mutation_occurs` - Whether a random mutation is applied before scoring
/// * `rule` - Scoring formula
/// * `rng` - Random source for mutation and event selection
///
/// # Errors
///
/// Returns [`EvaluationError::InvalidInput`] if the traits are incomplete or
/// inconsistent, or the generation is out of range. No score is computed in
/// that case. [`EvaluationError::MalformedResult`] signals an internal
/// invariant violation in the produced result.
pub fn evaluate<R>(
    traits: &TraitSelection,
    biome: Biome,
    generation: u8,
    mutation_occurs: bool,
    rule: ScoringRule,
    rng: &mut R,
) -> Result<GenerationResult, EvaluationError>
where
    R: Rng + ?Sized,
{
    let mut organism = traits.validate()?;
    if !(1..=GENERATION_COUNT).contains(&generation) {
        return Err(InvalidInputError::GenerationOutOfRange {
            generation,
            max: GENERATION_COUNT,
        }
        .into());
    }

    let mutation = mutation_occurs.then(|| mutate(&mut organism, rng));
    if let Some(m) = &mutation {
        log::debug!(
            "generation {generation}: {} mutated {} -> {}",
            m.category,
            m.old_value,
            m.new_value
        );
    }

    let trait_scores = score_traits(&organism, biome);
    let mean = mean_score(&trait_scores);
    let (adaptation_score, pressure) = match rule {
        ScoringRule::Mean => (mean, None),
        ScoringRule::Pressure => {
            let event =
                EnvironmentalEvent::ALL[rng.random_range(0..EnvironmentalEvent::ALL.len())];
            let adjustment = PressureAdjustment {
                event,
                modifier: event.modifier(),
                difficulty_penalty: difficulty_penalty(generation),
            };
            (apply_pressure(mean, &adjustment), Some(adjustment))
        }
    };
    log::debug!("generation {generation} in {biome}: mean {mean}, adaptation {adaptation_score}");

    let notes = compose_notes(
        biome,
        &trait_scores,
        mutation.as_ref(),
        pressure.as_ref(),
        adaptation_score,
    );
    let result = GenerationResult::new(
        generation,
        adaptation_score,
        trait_scores,
        mutation,
        pressure,
        notes,
    );

    result.check()?;
    if result.mutation().is_some() != mutation_occurs {
        return Err(MalformedResultError::MutationMismatch {
            expected: mutation_occurs,
        }
        .into());
    }
    Ok(result)
}

/// Scores every trait of a complete organism against `biome`.
#[must_use]
pub fn score_traits(organism: &Organism, biome: Biome) -> BTreeMap<TraitCategory, TraitScore> {
    organism
        .iter()
        .map(|(category, value)| {
            let compatibility = Compatibility::lookup(category, biome, value);
            (category, TraitScore::new(value, compatibility))
        })
        .collect()
}

/// Mean of the trait scores, rounded half up. Zero for an empty map.
#[expect(clippy::cast_possible_truncation)]
#[must_use]
pub fn mean_score(trait_scores: &BTreeMap<TraitCategory, TraitScore>) -> u8 {
    let count = trait_scores.len() as u32;
    if count == 0 {
        return 0;
    }
    let sum: u32 = trait_scores.values().map(|s| u32::from(s.score)).sum();
    let mean = (2 * sum + count) / (2 * count);
    u8::try_from(mean.min(100)).unwrap_or(100)
}

#[must_use]
pub fn difficulty_penalty(generation: u8) -> u8 {
    generation
        .saturating_mul(DIFFICULTY_PER_GENERATION)
        .min(MAX_DIFFICULTY_PENALTY)
}

fn apply_pressure(mean: u8, adjustment: &PressureAdjustment) -> u8 {
    let adjusted = i32::from(mean) + i32::from(adjustment.modifier)
        - i32::from(adjustment.difficulty_penalty);
    u8::try_from(adjusted.clamp(0, 100)).unwrap_or(0)
}

fn mutate<R>(organism: &mut Organism, rng: &mut R) -> MutationRecord
where
    R: Rng + ?Sized,
{
    let category = TraitCategory::ALL[rng.random_range(0..TraitCategory::LEN)];
    let old_value = organism.get(category);
    let alternatives = category
        .values()
        .iter()
        .copied()
        .filter(|v| *v != old_value)
        .collect::<Vec<_>>();
    let new_value = alternatives.choose(rng).copied().unwrap_or(old_value);
    organism.replace(new_value);
    MutationRecord {
        category,
        old_value,
        new_value,
    }
}

fn compose_notes(
    biome: Biome,
    trait_scores: &BTreeMap<TraitCategory, TraitScore>,
    mutation: Option<&MutationRecord>,
    pressure: Option<&PressureAdjustment>,
    adaptation_score: u8,
) -> Vec<String> {
    let mut notes = vec![];
    for (category, score) in trait_scores {
        match score.compatibility {
            Compatibility::Excellent => notes.push(format!(
                "{} {category} is excellent for the {biome}.",
                score.value.capitalized()
            )),
            Compatibility::Poor => notes.push(format!(
                "{} {category} struggles in the {biome}.",
                score.value.capitalized()
            )),
            Compatibility::Good | Compatibility::Unknown => {}
        }
    }
    if let Some(p) = pressure {
        notes.push(format!(
            "{} ({:+}); generation difficulty -{}.",
            p.event.description(),
            p.modifier,
            p.difficulty_penalty
        ));
    }
    if let Some(m) = mutation {
        notes.push(format!(
            "Mutation: {} changed from {} to {}.",
            m.category, m.old_value, m.new_value
        ));
    }
    if adaptation_score >= SURVIVAL_THRESHOLD {
        notes.push("The population survived this generation.".to_owned());
    } else {
        notes.push("The population did not survive this generation.".to_owned());
    }
    notes
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;
    use crate::TraitValue;

    fn tundra_traits() -> TraitSelection {
        [
            (TraitCategory::Covering, TraitValue::Fur),
            (TraitCategory::Metabolism, TraitValue::Warm),
            (TraitCategory::Locomotion, TraitValue::Walking),
            (TraitCategory::Reproduction, TraitValue::Sexual),
            (TraitCategory::Limbs, TraitValue::Legs),
            (TraitCategory::Senses, TraitValue::Sight),
            (TraitCategory::Behavior, TraitValue::Social),
        ]
        .into_iter()
        .collect()
    }

    /// Every complete selection, as the cartesian product of all category values.
    fn all_selections() -> Vec<TraitSelection> {
        let mut selections = vec![TraitSelection::new()];
        for category in TraitCategory::ALL {
            selections = selections
                .into_iter()
                .flat_map(|s| {
                    category.values().iter().map(move |v| {
                        let mut s = s.clone();
                        s.set(category, *v);
                        s
                    })
                })
                .collect();
        }
        selections
    }

    fn uniform(level: Compatibility) -> BTreeMap<TraitCategory, TraitScore> {
        TraitCategory::ALL
            .into_iter()
            .map(|c| (c, TraitScore::new(c.values()[0], level)))
            .collect()
    }

    #[test]
    fn test_tundra_scenario() {
        let mut rng = Pcg32::seed_from_u64(1);
        let result = evaluate(
            &tundra_traits(),
            Biome::Tundra,
            1,
            false,
            ScoringRule::Mean,
            &mut rng,
        )
        .unwrap();

        let levels = TraitCategory::ALL.map(|c| result.trait_score(c).unwrap().compatibility);
        assert_eq!(
            levels,
            [
                Compatibility::Excellent,
                Compatibility::Excellent,
                Compatibility::Excellent,
                Compatibility::Unknown,
                Compatibility::Unknown,
                Compatibility::Good,
                Compatibility::Excellent,
            ]
        );
        // (4 × 100 + 2 × 25 + 75) / 7 = 75
        assert_eq!(result.adaptation_score(), 75);
        assert!(result.survived());
        assert_eq!(result.generation(), 1);
        assert!(result.mutation().is_none());
        assert!(result.pressure().is_none());
        assert_eq!(
            result.notes().last().map(String::as_str),
            Some("The population survived this generation.")
        );
    }

    #[test]
    fn test_mean_rounds_half_up() {
        assert_eq!(mean_score(&uniform(Compatibility::Good)), 75);
        let mut scores = uniform(Compatibility::Excellent);
        // 6 × 100 + 25 = 625, 625 / 7 = 89.28...
        scores.insert(
            TraitCategory::Limbs,
            TraitScore::new(TraitValue::Legs, Compatibility::Unknown),
        );
        assert_eq!(mean_score(&scores), 89);
        // 5 × 100 + 2 × 75 = 650, 650 / 7 = 92.86
        let mut scores = uniform(Compatibility::Excellent);
        for c in [TraitCategory::Limbs, TraitCategory::Senses] {
            scores.insert(c, TraitScore::new(c.values()[0], Compatibility::Good));
        }
        assert_eq!(mean_score(&scores), 93);
        assert_eq!(mean_score(&BTreeMap::new()), 0);
    }

    #[test]
    fn test_difficulty_penalty_is_capped() {
        assert_eq!(difficulty_penalty(1), 5);
        assert_eq!(difficulty_penalty(3), 15);
        assert_eq!(difficulty_penalty(4), 20);
        assert_eq!(difficulty_penalty(5), 20);
    }

    #[test]
    fn test_apply_pressure_clamps() {
        let adjustment = |event: EnvironmentalEvent, difficulty_penalty| PressureAdjustment {
            event,
            modifier: event.modifier(),
            difficulty_penalty,
        };
        assert_eq!(
            apply_pressure(100, &adjustment(EnvironmentalEvent::Abundance, 5)),
            100
        );
        assert_eq!(
            apply_pressure(25, &adjustment(EnvironmentalEvent::Catastrophe, 20)),
            0
        );
        assert_eq!(
            apply_pressure(75, &adjustment(EnvironmentalEvent::HarshSeason, 10)),
            55
        );
    }

    #[test]
    fn test_score_in_range_for_all_selections() {
        let mut rng = Pcg32::seed_from_u64(7);
        for traits in all_selections() {
            for biome in Biome::ALL {
                for rule in [ScoringRule::Mean, ScoringRule::Pressure] {
                    let result = evaluate(&traits, biome, 5, false, rule, &mut rng).unwrap();
                    assert!(result.adaptation_score() <= 100);
                    assert_eq!(result.trait_scores().len(), TraitCategory::LEN);
                    assert_eq!(
                        result.survived(),
                        result.adaptation_score() >= SURVIVAL_THRESHOLD
                    );
                }
            }
        }
    }

    #[test]
    fn test_mutation_presence_follows_flag() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..50 {
            let result = evaluate(
                &tundra_traits(),
                Biome::Desert,
                2,
                false,
                ScoringRule::Mean,
                &mut rng,
            )
            .unwrap();
            assert!(result.mutation().is_none());

            let result = evaluate(
                &tundra_traits(),
                Biome::Desert,
                2,
                true,
                ScoringRule::Mean,
                &mut rng,
            )
            .unwrap();
            let mutation = result.mutation().unwrap();
            assert_ne!(mutation.old_value, mutation.new_value);
            assert_eq!(mutation.new_value.category(), mutation.category);
            assert_eq!(
                Some(mutation.old_value),
                tundra_traits().get(mutation.category)
            );
        }
    }

    #[test]
    fn test_mutation_affects_current_generation_score() {
        let mut rng = Pcg32::seed_from_u64(3);
        let traits = tundra_traits();
        for _ in 0..50 {
            let result =
                evaluate(&traits, Biome::Ocean, 1, true, ScoringRule::Mean, &mut rng).unwrap();
            let mutation = result.mutation().unwrap();
            let scored = result.trait_score(mutation.category).unwrap();
            assert_eq!(scored.value, mutation.new_value);

            let mut mutated = traits.clone();
            mutated.set(mutation.category, mutation.new_value);
            let organism = mutated.validate().unwrap();
            let expected = mean_score(&score_traits(&organism, Biome::Ocean));
            assert_eq!(result.adaptation_score(), expected);
        }
        // The caller's selection is unchanged.
        assert_eq!(traits, tundra_traits());
    }

    #[test]
    fn test_seeded_sources_reproduce_results() {
        let run = |seed| {
            let mut rng = Pcg32::seed_from_u64(seed);
            (1..=GENERATION_COUNT)
                .map(|g| {
                    evaluate(
                        &tundra_traits(),
                        Biome::Rainforest,
                        g,
                        true,
                        ScoringRule::Pressure,
                        &mut rng,
                    )
                    .unwrap()
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(run(11), run(11));
    }

    #[test]
    fn test_pressure_rule_records_adjustment() {
        let mut rng = Pcg32::seed_from_u64(5);
        let result = evaluate(
            &tundra_traits(),
            Biome::Tundra,
            4,
            false,
            ScoringRule::Pressure,
            &mut rng,
        )
        .unwrap();
        let pressure = result.pressure().unwrap();
        assert_eq!(pressure.difficulty_penalty, 20);
        assert_eq!(pressure.modifier, pressure.event.modifier());
        let expected = (75 + i32::from(pressure.modifier) - 20).clamp(0, 100);
        assert_eq!(i32::from(result.adaptation_score()), expected);
    }

    #[test]
    fn test_missing_category_is_invalid_input() {
        let mut traits = tundra_traits();
        traits.remove(TraitCategory::Locomotion);
        let err = evaluate(
            &traits,
            Biome::Tundra,
            1,
            false,
            ScoringRule::Mean,
            &mut rand::rng(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            EvaluationError::InvalidInput(InvalidInputError::MissingTrait {
                category: TraitCategory::Locomotion
            })
        );
    }

    #[test]
    fn test_unknown_biome_is_invalid_input() {
        let err: EvaluationError = "swamp".parse::<Biome>().unwrap_err().into();
        assert!(matches!(
            err,
            EvaluationError::InvalidInput(InvalidInputError::UnknownBiome { .. })
        ));
    }

    #[test]
    fn test_generation_out_of_range() {
        for generation in [0, GENERATION_COUNT + 1] {
            let err = evaluate(
                &tundra_traits(),
                Biome::Tundra,
                generation,
                false,
                ScoringRule::Mean,
                &mut rand::rng(),
            )
            .unwrap_err();
            assert!(matches!(
                err,
                EvaluationError::InvalidInput(InvalidInputError::GenerationOutOfRange { .. })
            ));
        }
    }

    #[test]
    fn test_notes_mention_poor_traits_and_mutation() {
        let mut traits = tundra_traits();
        traits.set(TraitCategory::Covering, TraitValue::Scales);
        let result = evaluate(
            &traits,
            Biome::Tundra,
            1,
            true,
            ScoringRule::Mean,
            &mut Pcg32::seed_from_u64(9),
        )
        .unwrap();
        let mutation = result.mutation().unwrap();
        let notes = result.notes();
        assert!(
            notes
                .iter()
                .any(|n| n.starts_with("Mutation: ") && n.contains(mutation.category.as_str()))
        );
        if mutation.category != TraitCategory::Covering {
            assert!(notes.contains(&"Scales covering struggles in the tundra.".to_owned()));
        }
    }

    #[test]
    fn test_scoring_rule_parse() {
        assert_eq!("mean".parse::<ScoringRule>().unwrap(), ScoringRule::Mean);
        assert_eq!(
            "pressure".parse::<ScoringRule>().unwrap(),
            ScoringRule::Pressure
        );
        assert_eq!(ScoringRule::Pressure.to_string(), "pressure");
    }
}
