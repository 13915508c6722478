//! Trait categories, trait values and the user's trait selection.
//!
//! A [`TraitSelection`] is what the user edits: it may be incomplete, or hold a
//! value of the wrong category, until it is validated into an [`Organism`],
//! which always has exactly one value of the right category per trait.

use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::InvalidInputError;

/// One of the seven organism attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraitCategory {
    Covering,
    Metabolism,
    Locomotion,
    Reproduction,
    Limbs,
    Senses,
    Behavior,
}

impl TraitCategory {
    pub const LEN: usize = 7;

    pub const ALL: [Self; Self::LEN] = [
        Self::Covering,
        Self::Metabolism,
        Self::Locomotion,
        Self::Reproduction,
        Self::Limbs,
        Self::Senses,
        Self::Behavior,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Covering => "covering",
            Self::Metabolism => "metabolism",
            Self::Locomotion => "locomotion",
            Self::Reproduction => "reproduction",
            Self::Limbs => "limbs",
            Self::Senses => "senses",
            Self::Behavior => "behavior",
        }
    }

    /// Human-readable name used in reports.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Covering => "Body Covering",
            Self::Metabolism => "Metabolism",
            Self::Locomotion => "Movement",
            Self::Reproduction => "Reproduction",
            Self::Limbs => "Limbs",
            Self::Senses => "Senses",
            Self::Behavior => "Behavior",
        }
    }

    /// Allowed values for this category, in display order.
    #[must_use]
    pub const fn values(self) -> &'static [TraitValue] {
        use TraitValue as V;
        match self {
            Self::Covering => &[V::Fur, V::Scales, V::Feathers, V::Skin],
            Self::Metabolism => &[V::Warm, V::Cold],
            Self::Locomotion => &[V::Walking, V::Swimming, V::Flying],
            Self::Reproduction => &[V::Sexual, V::Asexual],
            Self::Limbs => &[V::NoLimbs, V::Legs, V::Fins, V::Wings],
            Self::Senses => &[V::Sight, V::Smell, V::Echolocation],
            Self::Behavior => &[V::Social, V::Solitary, V::Nocturnal],
        }
    }
}

impl fmt::Display for TraitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TraitCategory {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| InvalidInputError::UnknownTraitCategory {
                value: s.to_owned(),
            })
    }
}

/// Every selectable trait value.
///
/// Each value belongs to exactly one [`TraitCategory`]; see [`TraitValue::category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraitValue {
    Fur,
    Scales,
    Feathers,
    Skin,
    Warm,
    Cold,
    Walking,
    Swimming,
    Flying,
    Sexual,
    Asexual,
    #[serde(rename = "none")]
    NoLimbs,
    Legs,
    Fins,
    Wings,
    Sight,
    Smell,
    Echolocation,
    Social,
    Solitary,
    Nocturnal,
}

impl TraitValue {
    pub const ALL: [Self; 21] = [
        Self::Fur,
        Self::Scales,
        Self::Feathers,
        Self::Skin,
        Self::Warm,
        Self::Cold,
        Self::Walking,
        Self::Swimming,
        Self::Flying,
        Self::Sexual,
        Self::Asexual,
        Self::NoLimbs,
        Self::Legs,
        Self::Fins,
        Self::Wings,
        Self::Sight,
        Self::Smell,
        Self::Echolocation,
        Self::Social,
        Self::Solitary,
        Self::Nocturnal,
    ];

    #[must_use]
    pub const fn category(self) -> TraitCategory {
        match self {
            Self::Fur | Self::Scales | Self::Feathers | Self::Skin => TraitCategory::Covering,
            Self::Warm | Self::Cold => TraitCategory::Metabolism,
            Self::Walking | Self::Swimming | Self::Flying => TraitCategory::Locomotion,
            Self::Sexual | Self::Asexual => TraitCategory::Reproduction,
            Self::NoLimbs | Self::Legs | Self::Fins | Self::Wings => TraitCategory::Limbs,
            Self::Sight | Self::Smell | Self::Echolocation => TraitCategory::Senses,
            Self::Social | Self::Solitary | Self::Nocturnal => TraitCategory::Behavior,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fur => "fur",
            Self::Scales => "scales",
            Self::Feathers => "feathers",
            Self::Skin => "skin",
            Self::Warm => "warm",
            Self::Cold => "cold",
            Self::Walking => "walking",
            Self::Swimming => "swimming",
            Self::Flying => "flying",
            Self::Sexual => "sexual",
            Self::Asexual => "asexual",
            Self::NoLimbs => "none",
            Self::Legs => "legs",
            Self::Fins => "fins",
            Self::Wings => "wings",
            Self::Sight => "sight",
            Self::Smell => "smell",
            Self::Echolocation => "echolocation",
            Self::Social => "social",
            Self::Solitary => "solitary",
            Self::Nocturnal => "nocturnal",
        }
    }

    /// The value name with its first letter upper-cased ("Fur", "Echolocation").
    #[must_use]
    pub fn capitalized(self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl fmt::Display for TraitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TraitValue {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|value| value.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| InvalidInputError::UnknownTraitValue {
                value: s.to_owned(),
            })
    }
}

/// The user's in-progress choice of one value per trait category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitSelection {
    values: BTreeMap<TraitCategory, TraitValue>,
}

impl TraitSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for a category, replacing any previous choice.
    ///
    /// The value is not checked against the category here; see [`Self::validate`].
    pub fn set(&mut self, category: TraitCategory, value: TraitValue) {
        self.values.insert(category, value);
    }

    pub fn remove(&mut self, category: TraitCategory) -> Option<TraitValue> {
        self.values.remove(&category)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    #[must_use]
    pub fn get(&self, category: TraitCategory) -> Option<TraitValue> {
        self.values.get(&category).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TraitCategory, TraitValue)> + '_ {
        self.values.iter().map(|(c, v)| (*c, *v))
    }

    /// Checks that every category has a value from its own set.
    ///
    /// Categories are checked in [`TraitCategory::ALL`] order and the first
    /// problem found is reported.
    pub fn validate(&self) -> Result<Organism, InvalidInputError> {
        let mut values = [TraitValue::Fur; TraitCategory::LEN];
        for category in TraitCategory::ALL {
            let value = self
                .get(category)
                .ok_or(InvalidInputError::MissingTrait { category })?;
            if value.category() != category {
                return Err(InvalidInputError::MismatchedTrait { category, value });
            }
            values[category.index()] = value;
        }
        Ok(Organism { values })
    }
}

impl FromIterator<(TraitCategory, TraitValue)> for TraitSelection {
    fn from_iter<T: IntoIterator<Item = (TraitCategory, TraitValue)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl From<Organism> for TraitSelection {
    fn from(organism: Organism) -> Self {
        organism.iter().collect()
    }
}

/// A complete, validated set of traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Organism {
    values: [TraitValue; TraitCategory::LEN],
}

impl Organism {
    #[must_use]
    pub fn get(&self, category: TraitCategory) -> TraitValue {
        self.values[category.index()]
    }

    /// Replaces the value of `value`'s own category and returns the previous value.
    pub fn replace(&mut self, value: TraitValue) -> TraitValue {
        std::mem::replace(&mut self.values[value.category().index()], value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TraitCategory, TraitValue)> + '_ {
        TraitCategory::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_selection() -> TraitSelection {
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

    #[test]
    fn test_every_value_belongs_to_its_category_list() {
        for value in TraitValue::ALL {
            assert!(value.category().values().contains(&value), "{value}");
        }
        let listed: usize = TraitCategory::ALL.iter().map(|c| c.values().len()).sum();
        assert_eq!(listed, TraitValue::ALL.len());
    }

    #[test]
    fn test_every_category_has_alternatives() {
        for category in TraitCategory::ALL {
            assert!(category.values().len() >= 2, "{category}");
        }
    }

    #[test]
    fn test_category_index_matches_order() {
        for (i, category) in TraitCategory::ALL.into_iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("covering".parse(), Ok(TraitCategory::Covering));
        assert_eq!("Senses".parse(), Ok(TraitCategory::Senses));
        assert_eq!("none".parse(), Ok(TraitValue::NoLimbs));
        assert_eq!("Echolocation".parse(), Ok(TraitValue::Echolocation));
        assert_eq!(
            "horns".parse::<TraitValue>(),
            Err(InvalidInputError::UnknownTraitValue {
                value: "horns".to_owned()
            })
        );
        assert_eq!(
            "size".parse::<TraitCategory>(),
            Err(InvalidInputError::UnknownTraitCategory {
                value: "size".to_owned()
            })
        );
    }

    #[test]
    fn test_capitalized() {
        assert_eq!(TraitValue::Fur.capitalized(), "Fur");
        assert_eq!(TraitValue::NoLimbs.capitalized(), "None");
    }

    #[test]
    fn test_validate_complete_selection() {
        let organism = full_selection().validate().unwrap();
        assert_eq!(organism.get(TraitCategory::Covering), TraitValue::Fur);
        assert_eq!(organism.get(TraitCategory::Behavior), TraitValue::Social);
        assert_eq!(organism.iter().count(), TraitCategory::LEN);
    }

    #[test]
    fn test_validate_missing_category() {
        let mut selection = full_selection();
        selection.remove(TraitCategory::Locomotion);
        assert_eq!(
            selection.validate(),
            Err(InvalidInputError::MissingTrait {
                category: TraitCategory::Locomotion
            })
        );
    }

    #[test]
    fn test_validate_value_from_other_category() {
        let mut selection = full_selection();
        selection.set(TraitCategory::Covering, TraitValue::Warm);
        assert_eq!(
            selection.validate(),
            Err(InvalidInputError::MismatchedTrait {
                category: TraitCategory::Covering,
                value: TraitValue::Warm,
            })
        );
    }

    #[test]
    fn test_replace_keeps_other_categories() {
        let mut organism = full_selection().validate().unwrap();
        let old = organism.replace(TraitValue::Scales);
        assert_eq!(old, TraitValue::Fur);
        assert_eq!(organism.get(TraitCategory::Covering), TraitValue::Scales);
        assert_eq!(organism.get(TraitCategory::Metabolism), TraitValue::Warm);
    }

    #[test]
    fn test_selection_serializes_as_map() {
        let json = serde_json::to_value(full_selection()).unwrap();
        assert_eq!(json["covering"], "fur");
        assert_eq!(json["limbs"], "legs");

        let mut selection = full_selection();
        selection.set(TraitCategory::Limbs, TraitValue::NoLimbs);
        let json = serde_json::to_string(&selection).unwrap();
        let back: TraitSelection = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get(TraitCategory::Limbs), Some(TraitValue::NoLimbs));
    }
}
