//! A short paragraph describing how the organism fared.
//!
//! The tone is picked from the final score:
//!
//! | Final score | Tone        |
//! |-------------|-------------|
//! | 80..=100    | Thrived     |
//! | 60..80      | Adapted     |
//! | 40..60      | Struggled   |
//! | 0..40       | Overwhelmed |

use evolab_engine::{Biome, GenerationResult, TraitCategory, TraitSelection};

pub const NO_DATA_MESSAGE: &str = "No simulation data available. Please run a simulation first.";
pub const INCOMPLETE_MESSAGE: &str =
    "Unable to generate feedback. Please ensure all traits and biome are selected.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Tone {
    Thrived,
    Adapted,
    Struggled,
    Overwhelmed,
}

impl Tone {
    #[must_use]
    pub fn from_score(final_score: u8) -> Self {
        match final_score {
            80.. => Self::Thrived,
            60..80 => Self::Adapted,
            40..60 => Self::Struggled,
            _ => Self::Overwhelmed,
        }
    }
}

#[must_use]
pub fn narrative(traits: &TraitSelection, biome: Option<Biome>, history: &[GenerationResult]) -> String {
    let Some(last) = history.last() else {
        return NO_DATA_MESSAGE.to_owned();
    };
    let (Some(biome), Some(covering), Some(locomotion), Some(metabolism)) = (
        biome,
        traits.get(TraitCategory::Covering),
        traits.get(TraitCategory::Locomotion),
        traits.get(TraitCategory::Metabolism),
    ) else {
        return INCOMPLETE_MESSAGE.to_owned();
    };

    let place = format!("{} {}", biome.display_name(), biome.icon());
    let generations = history.len();
    let mutations = history.iter().filter(|r| r.mutation().is_some()).count();

    match Tone::from_score(last.adaptation_score()) {
        Tone::Thrived => format!(
            "Incredible! Your {covering}-covered organism thrived in the {place}! \
             With {locomotion} for movement and a {metabolism} metabolism, it survived \
             {generations} generations with {mutations} mutations. \
             A true evolutionary success story!"
        ),
        Tone::Adapted => format!(
            "Not bad! Your {covering}-covered creature adapted well to the {place}. \
             Its {locomotion} and {metabolism} metabolism helped it survive {generations} \
             generations, though it faced some challenges with {mutations} mutations."
        ),
        Tone::Struggled => format!(
            "Your {covering}-covered organism struggled in the {place}. \
             Despite its {locomotion} and {metabolism} metabolism, it only survived \
             {generations} generations with {mutations} mutations. \
             Maybe try different traits next time?"
        ),
        Tone::Overwhelmed => format!(
            "The {place} proved too challenging for your {covering}-covered organism. \
             Its {locomotion} and {metabolism} metabolism weren't enough to overcome the \
             harsh conditions, surviving only {generations} generations with {mutations} mutations."
        ),
    }
}
