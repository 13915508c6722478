use arrayvec::ArrayVec;

use crate::{
    Biome, GENERATION_COUNT, GenerationResult, MalformedResultError, TraitCategory,
    TraitSelection, TraitValue,
};

const HISTORY_CAPACITY: usize = GENERATION_COUNT as usize;

/// Application state owned by the top-level controller.
///
/// Traits and biome are edited before a run and only read during it. The
/// result history is appended by [`crate::Simulation`] one generation at a
/// time and cleared on restart.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    traits: TraitSelection,
    biome: Option<Biome>,
    history: ArrayVec<GenerationResult, HISTORY_CAPACITY>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_organism(traits: TraitSelection, biome: Biome) -> Self {
        Self {
            traits,
            biome: Some(biome),
            history: ArrayVec::new(),
        }
    }

    #[must_use]
    pub fn traits(&self) -> &TraitSelection {
        &self.traits
    }

    #[must_use]
    pub fn biome(&self) -> Option<Biome> {
        self.biome
    }

    /// Results of the current run, in generation order.
    #[must_use]
    pub fn history(&self) -> &[GenerationResult] {
        &self.history
    }

    pub fn set_trait(&mut self, category: TraitCategory, value: TraitValue) {
        self.traits.set(category, value);
    }

    pub fn set_biome(&mut self, biome: Biome) {
        self.biome = Some(biome);
    }

    pub fn reset_traits(&mut self) {
        self.traits.clear();
    }

    /// Forgets the biome and the result history.
    pub fn reset_simulation(&mut self) {
        self.biome = None;
        self.history.clear();
    }

    pub(crate) fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Appends the next generation's result.
    ///
    /// Results must arrive in order: the first has generation 1, the next 2, and so on.
    pub(crate) fn push_result(
        &mut self,
        result: GenerationResult,
    ) -> Result<(), MalformedResultError> {
        let expected = self.history.len() + 1;
        let out_of_order = MalformedResultError::OutOfOrder {
            expected,
            actual: result.generation(),
        };
        if usize::from(result.generation()) != expected {
            return Err(out_of_order);
        }
        self.history.try_push(result).map_err(|_| out_of_order)
    }
}
