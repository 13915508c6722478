//! Per-generation results.
//!
//! A [`GenerationResult`] is produced once per simulated generation by
//! [`crate::evaluator::evaluate`] and never modified afterwards. Results loaded
//! from elsewhere (e.g. a saved record) can be re-checked with
//! [`GenerationResult::check`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    Compatibility, EnvironmentalEvent, GENERATION_COUNT, MalformedResultError, SURVIVAL_THRESHOLD,
    TraitCategory, TraitValue,
};

/// Score of a single trait against the biome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitScore {
    pub value: TraitValue,
    pub compatibility: Compatibility,
    pub score: u8,
}

impl TraitScore {
    #[must_use]
    pub fn new(value: TraitValue, compatibility: Compatibility) -> Self {
        Self {
            value,
            compatibility,
            score: compatibility.score(),
        }
    }
}

/// A random single-category trait change applied before scoring a generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationRecord {
    pub category: TraitCategory,
    pub old_value: TraitValue,
    pub new_value: TraitValue,
}

/// Adjustment applied on top of the mean score by the pressure scoring rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PressureAdjustment {
    pub event: EnvironmentalEvent,
    pub modifier: i8,
    pub difficulty_penalty: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    generation: u8,
    adaptation_score: u8,
    survived: bool,
    trait_scores: BTreeMap<TraitCategory, TraitScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mutation: Option<MutationRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pressure: Option<PressureAdjustment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    notes: Vec<String>,
}

impl GenerationResult {
    /// Assembles a result. The survival flag is derived from `adaptation_score`.
    pub(crate) fn new(
        generation: u8,
        adaptation_score: u8,
        trait_scores: BTreeMap<TraitCategory, TraitScore>,
        mutation: Option<MutationRecord>,
        pressure: Option<PressureAdjustment>,
        notes: Vec<String>,
    ) -> Self {
        Self {
            generation,
            adaptation_score,
            survived: adaptation_score >= SURVIVAL_THRESHOLD,
            trait_scores,
            mutation,
            pressure,
            notes,
        }
    }

    /// Generation index, starting at 1.
    #[must_use]
    pub fn generation(&self) -> u8 {
        self.generation
    }

    /// Aggregate fitness in `0..=100`.
    #[must_use]
    pub fn adaptation_score(&self) -> u8 {
        self.adaptation_score
    }

    #[must_use]
    pub fn survived(&self) -> bool {
        self.survived
    }

    #[must_use]
    pub fn trait_scores(&self) -> &BTreeMap<TraitCategory, TraitScore> {
        &self.trait_scores
    }

    #[must_use]
    pub fn trait_score(&self, category: TraitCategory) -> Option<&TraitScore> {
        self.trait_scores.get(&category)
    }

    #[must_use]
    pub fn mutation(&self) -> Option<&MutationRecord> {
        self.mutation.as_ref()
    }

    #[must_use]
    pub fn pressure(&self) -> Option<&PressureAdjustment> {
        self.pressure.as_ref()
    }

    #[must_use]
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Checks the invariants every result must satisfy.
    pub fn check(&self) -> Result<(), MalformedResultError> {
        if self.adaptation_score > 100 {
            return Err(MalformedResultError::ScoreOutOfRange {
                score: self.adaptation_score,
            });
        }
        if !(1..=GENERATION_COUNT).contains(&self.generation) {
            return Err(MalformedResultError::GenerationOutOfRange {
                generation: self.generation,
                max: GENERATION_COUNT,
            });
        }
        if self.trait_scores.len() != TraitCategory::LEN {
            return Err(MalformedResultError::TraitScoreCount {
                expected: TraitCategory::LEN,
                actual: self.trait_scores.len(),
            });
        }
        for (category, score) in &self.trait_scores {
            if score.value.category() != *category || score.score != score.compatibility.score() {
                return Err(MalformedResultError::TraitScoreMismatch {
                    category: *category,
                });
            }
        }
        if self.survived != (self.adaptation_score >= SURVIVAL_THRESHOLD) {
            return Err(MalformedResultError::SurvivalMismatch {
                score: self.adaptation_score,
                survived: self.survived,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(level: Compatibility) -> BTreeMap<TraitCategory, TraitScore> {
        TraitCategory::ALL
            .into_iter()
            .map(|c| (c, TraitScore::new(c.values()[0], level)))
            .collect()
    }

    #[test]
    fn test_survival_boundary() {
        let result = GenerationResult::new(1, 30, scores(Compatibility::Poor), None, None, vec![]);
        assert!(result.survived());
        let result = GenerationResult::new(1, 29, scores(Compatibility::Poor), None, None, vec![]);
        assert!(!result.survived());
    }

    #[test]
    fn test_check_accepts_well_formed() {
        let result = GenerationResult::new(5, 100, scores(Compatibility::Excellent), None, None, vec![]);
        assert_eq!(result.check(), Ok(()));
    }

    #[test]
    fn test_check_rejects_out_of_range() {
        let result = GenerationResult::new(1, 101, scores(Compatibility::Good), None, None, vec![]);
        assert_eq!(
            result.check(),
            Err(MalformedResultError::ScoreOutOfRange { score: 101 })
        );

        let result = GenerationResult::new(0, 50, scores(Compatibility::Good), None, None, vec![]);
        assert!(matches!(
            result.check(),
            Err(MalformedResultError::GenerationOutOfRange { generation: 0, .. })
        ));
    }

    #[test]
    fn test_check_rejects_missing_trait_score() {
        let mut trait_scores = scores(Compatibility::Good);
        trait_scores.remove(&TraitCategory::Senses);
        let result = GenerationResult::new(2, 75, trait_scores, None, None, vec![]);
        assert_eq!(
            result.check(),
            Err(MalformedResultError::TraitScoreCount {
                expected: 7,
                actual: 6
            })
        );
    }

    #[test]
    fn test_check_rejects_tampered_json() {
        let result = GenerationResult::new(3, 75, scores(Compatibility::Good), None, None, vec![]);
        let mut json = serde_json::to_value(&result).unwrap();
        json["survived"] = serde_json::Value::Bool(false);
        let tampered: GenerationResult = serde_json::from_value(json).unwrap();
        assert_eq!(
            tampered.check(),
            Err(MalformedResultError::SurvivalMismatch {
                score: 75,
                survived: false
            })
        );

        let mut json = serde_json::to_value(&result).unwrap();
        json["trait_scores"]["covering"]["score"] = serde_json::Value::from(99);
        let tampered: GenerationResult = serde_json::from_value(json).unwrap();
        assert_eq!(
            tampered.check(),
            Err(MalformedResultError::TraitScoreMismatch {
                category: TraitCategory::Covering
            })
        );
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let result = GenerationResult::new(1, 75, scores(Compatibility::Good), None, None, vec![]);
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("mutation").is_none());
        assert!(json.get("pressure").is_none());
        assert!(json.get("notes").is_none());
    }
}
