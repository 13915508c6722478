//! Qualitative trait/biome ratings.
//!
//! The table is authored data keyed by (category, biome, value). Entries that
//! are not listed rate as [`Compatibility::Unknown`], the lowest level, so a
//! gap in the table never fails an evaluation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Biome, TraitCategory, TraitValue};

use Compatibility::{Excellent, Good, Poor};
use TraitValue as V;

/// How well a trait value suits a biome.
///
/// Variants are ordered from worst to best, so `Ord` ranks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Compatibility {
    Unknown,
    Poor,
    Good,
    Excellent,
}

impl Compatibility {
    #[must_use]
    pub const fn score(self) -> u8 {
        match self {
            Self::Excellent => 100,
            Self::Good => 75,
            Self::Poor => 40,
            Self::Unknown => 25,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Poor => "Poor",
            Self::Unknown => "Unknown",
        }
    }

    /// Rates `value` as the trait for `category` in `biome`.
    ///
    /// A value that does not belong to `category` has no entry and rates as
    /// [`Compatibility::Unknown`].
    #[must_use]
    pub fn lookup(category: TraitCategory, biome: Biome, value: TraitValue) -> Self {
        if value.category() != category {
            return Self::Unknown;
        }
        table(biome)
            .iter()
            .find(|(v, _)| *v == value)
            .map_or(Self::Unknown, |(_, c)| *c)
    }
}

impl fmt::Display for Compatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Reproduction and limbs are left unrated in the tundra.
const TUNDRA: &[(TraitValue, Compatibility)] = &[
    (V::Fur, Excellent),
    (V::Feathers, Good),
    (V::Scales, Poor),
    (V::Skin, Poor),
    (V::Warm, Excellent),
    (V::Cold, Poor),
    (V::Walking, Excellent),
    (V::Swimming, Poor),
    (V::Flying, Poor),
    (V::Sight, Good),
    (V::Smell, Excellent),
    (V::Echolocation, Poor),
    (V::Social, Excellent),
    (V::Solitary, Poor),
    (V::Nocturnal, Good),
];

const RAINFOREST: &[(TraitValue, Compatibility)] = &[
    (V::Feathers, Excellent),
    (V::Scales, Good),
    (V::Skin, Good),
    (V::Fur, Poor),
    (V::Warm, Good),
    (V::Cold, Good),
    (V::Flying, Excellent),
    (V::Walking, Good),
    (V::Swimming, Poor),
    (V::Sexual, Good),
    (V::Asexual, Good),
    (V::Wings, Excellent),
    (V::Legs, Good),
    (V::Fins, Poor),
    (V::NoLimbs, Poor),
    (V::Echolocation, Excellent),
    (V::Sight, Good),
    (V::Smell, Good),
    (V::Nocturnal, Excellent),
    (V::Social, Good),
    (V::Solitary, Good),
];

const DESERT: &[(TraitValue, Compatibility)] = &[
    (V::Scales, Excellent),
    (V::Feathers, Good),
    (V::Fur, Poor),
    (V::Skin, Poor),
    (V::Cold, Excellent),
    (V::Warm, Poor),
    (V::Walking, Good),
    (V::Flying, Good),
    (V::Swimming, Poor),
    (V::Asexual, Good),
    (V::Sexual, Poor),
    (V::Legs, Excellent),
    (V::NoLimbs, Good),
    (V::Wings, Good),
    (V::Fins, Poor),
    (V::Smell, Excellent),
    (V::Sight, Good),
    (V::Nocturnal, Excellent),
    (V::Solitary, Good),
    (V::Social, Poor),
];

const OCEAN: &[(TraitValue, Compatibility)] = &[
    (V::Skin, Excellent),
    (V::Scales, Excellent),
    (V::Fur, Poor),
    (V::Feathers, Poor),
    (V::Cold, Good),
    (V::Warm, Good),
    (V::Swimming, Excellent),
    (V::Walking, Poor),
    (V::Flying, Poor),
    (V::Sexual, Good),
    (V::Asexual, Good),
    (V::Fins, Excellent),
    (V::NoLimbs, Good),
    (V::Legs, Poor),
    (V::Wings, Poor),
    (V::Echolocation, Excellent),
    (V::Smell, Good),
    (V::Sight, Poor),
    (V::Social, Excellent),
    (V::Solitary, Good),
    (V::Nocturnal, Good),
];

const fn table(biome: Biome) -> &'static [(TraitValue, Compatibility)] {
    match biome {
        Biome::Tundra => TUNDRA,
        Biome::Rainforest => RAINFOREST,
        Biome::Desert => DESERT,
        Biome::Ocean => OCEAN,
    }
}
