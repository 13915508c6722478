use evolab_engine::{Biome, Compatibility, TraitCategory, TraitSelection, TraitValue};
use serde::Serialize;

/// Coarse band of a trait score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display, derive_more::IsVariant)]
pub enum ScoreBand {
    Strong,
    Fair,
    Weak,
}

impl ScoreBand {
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            75.. => Self::Strong,
            50..75 => Self::Fair,
            _ => Self::Weak,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraitAnalysis {
    pub category: TraitCategory,
    pub value: TraitValue,
    pub compatibility: Compatibility,
    pub score: u8,
    pub band: ScoreBand,
}

/// Rates every selected trait against `biome`, in category order.
///
/// Categories without a selected value are skipped.
#[must_use]
pub fn analyze(traits: &TraitSelection, biome: Biome) -> Vec<TraitAnalysis> {
    TraitCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let value = traits.get(category)?;
            let compatibility = Compatibility::lookup(category, biome, value);
            Some(TraitAnalysis {
                category,
                value,
                compatibility,
                score: compatibility.score(),
                band: ScoreBand::from_score(compatibility.score()),
            })
        })
        .collect()
}
