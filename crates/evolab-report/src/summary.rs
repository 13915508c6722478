use evolab_engine::{Biome, Compatibility, GenerationResult, TraitCategory, TraitSelection};
use serde::Serialize;

/// Headline figures of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvolutionSummary {
    pub total_generations: usize,
    pub generations_survived: usize,
    pub total_mutations: usize,
    /// Score of the last generation, 0 for an empty history.
    pub final_score: u8,
    pub min_score: Option<u8>,
    pub max_score: Option<u8>,
    /// Mean of the generation scores, rounded half up.
    pub mean_score: Option<u8>,
    /// Selected trait rated best in the biome.
    pub strongest_trait: Option<TraitCategory>,
    /// Selected trait rated worst in the biome.
    pub weakest_trait: Option<TraitCategory>,
}

impl EvolutionSummary {
    /// Summarizes `history`.
    ///
    /// Strongest and weakest traits are rated from the selected (unmutated)
    /// traits; when several categories tie, the later one in
    /// [`TraitCategory::ALL`] order wins. Both are `None` without a biome or
    /// without any selected trait.
    #[must_use]
    pub fn new(traits: &TraitSelection, biome: Option<Biome>, history: &[GenerationResult]) -> Self {
        let scores = || history.iter().map(GenerationResult::adaptation_score);
        let mean_score = (!history.is_empty()).then(|| {
            let sum = scores().map(u32::from).sum::<u32>();
            let n = u32::try_from(history.len()).unwrap_or(u32::MAX);
            u8::try_from((2 * sum + n) / (2 * n)).unwrap_or(u8::MAX)
        });

        let rated = || {
            biome.into_iter().flat_map(move |biome| {
                traits.iter().map(move |(category, value)| {
                    (Compatibility::lookup(category, biome, value), category)
                })
            })
        };
        // `max_by_key`/`min_by_key` keep the last of equal keys and the first
        // respectively, so the weakest trait compares on reversed order.
        let strongest_trait = rated().max_by_key(|(c, _)| *c).map(|(_, category)| category);
        let weakest_trait = rated()
            .max_by_key(|(c, _)| std::cmp::Reverse(*c))
            .map(|(_, category)| category);

        Self {
            total_generations: history.len(),
            generations_survived: history.iter().filter(|r| r.survived()).count(),
            total_mutations: history.iter().filter(|r| r.mutation().is_some()).count(),
            final_score: history.last().map_or(0, GenerationResult::adaptation_score),
            min_score: scores().min(),
            max_score: scores().max(),
            mean_score,
            strongest_trait,
            weakest_trait,
        }
    }
}

#[cfg(test)]
mod tests {
    use evolab_engine::TraitValue;

    use super::*;
    use crate::test_util;

    #[test]
    fn test_empty_history() {
        let summary = EvolutionSummary::new(&TraitSelection::new(), None, &[]);
        assert_eq!(summary.total_generations, 0);
        assert_eq!(summary.final_score, 0);
        assert_eq!(summary.mean_score, None);
        assert_eq!(summary.min_score, None);
        assert_eq!(summary.strongest_trait, None);
        assert_eq!(summary.weakest_trait, None);
    }

    #[test]
    fn test_tundra_run() {
        let traits = test_util::tundra_traits();
        let history = test_util::history(&traits, Biome::Tundra, &[false; 5]);
        let summary = EvolutionSummary::new(&traits, Some(Biome::Tundra), &history);
        assert_eq!(summary.total_generations, 5);
        assert_eq!(summary.generations_survived, 5);
        assert_eq!(summary.total_mutations, 0);
        assert_eq!(summary.final_score, 75);
        assert_eq!(summary.min_score, Some(75));
        assert_eq!(summary.max_score, Some(75));
        assert_eq!(summary.mean_score, Some(75));
        // Covering, metabolism, locomotion and behavior are all excellent.
        assert_eq!(summary.strongest_trait, Some(TraitCategory::Behavior));
        // Reproduction and limbs are both unrated.
        assert_eq!(summary.weakest_trait, Some(TraitCategory::Limbs));
    }

    #[test]
    fn test_mutations_are_counted() {
        let traits = test_util::tundra_traits();
        let history = test_util::history(&traits, Biome::Tundra, &[true, false, true]);
        let summary = EvolutionSummary::new(&traits, Some(Biome::Tundra), &history);
        assert_eq!(summary.total_mutations, 2);
        assert_eq!(summary.final_score, history[2].adaptation_score());
        assert!(summary.min_score <= summary.mean_score);
        assert!(summary.mean_score <= summary.max_score);
    }

    #[test]
    fn test_partial_selection() {
        let mut traits = TraitSelection::new();
        traits.set(TraitCategory::Covering, TraitValue::Fur);
        let summary = EvolutionSummary::new(&traits, Some(Biome::Desert), &[]);
        assert_eq!(summary.strongest_trait, Some(TraitCategory::Covering));
        assert_eq!(summary.weakest_trait, Some(TraitCategory::Covering));
    }
}
