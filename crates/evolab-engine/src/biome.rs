use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::InvalidInputError;

/// The environment an organism is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Biome {
    Tundra,
    Rainforest,
    Desert,
    Ocean,
}

impl Biome {
    pub const ALL: [Self; 4] = [Self::Tundra, Self::Rainforest, Self::Desert, Self::Ocean];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tundra => "tundra",
            Self::Rainforest => "rainforest",
            Self::Desert => "desert",
            Self::Ocean => "ocean",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Tundra => "Tundra",
            Self::Rainforest => "Rainforest",
            Self::Desert => "Desert",
            Self::Ocean => "Ocean",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Tundra => "❄️",
            Self::Rainforest => "🌴",
            Self::Desert => "🌵",
            Self::Ocean => "🌊",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Tundra => "A cold, treeless biome with permafrost and low biodiversity.",
            Self::Rainforest => "A hot, humid biome with dense vegetation and high biodiversity.",
            Self::Desert => "A dry biome with extreme temperatures and sparse vegetation.",
            Self::Ocean => "A vast aquatic biome with diverse marine life and varying depths.",
        }
    }
}

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Biome {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|biome| biome.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| InvalidInputError::UnknownBiome {
                value: s.to_owned(),
            })
    }
}
