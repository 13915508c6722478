use std::fmt::{self, Write as _};

use evolab_engine::{GenerationResult, MutationRecord};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MutationEntry {
    pub generation: u8,
    pub mutation: MutationRecord,
}

/// Mutations of a run, in generation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MutationLog {
    entries: Vec<MutationEntry>,
}

impl MutationLog {
    pub const EMPTY_MESSAGE: &str = "No mutations occurred during this simulation.";

    #[must_use]
    pub fn new(history: &[GenerationResult]) -> Self {
        let entries = history
            .iter()
            .filter_map(|result| {
                result.mutation().map(|mutation| MutationEntry {
                    generation: result.generation(),
                    mutation: *mutation,
                })
            })
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[MutationEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for MutationLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return f.write_str(Self::EMPTY_MESSAGE);
        }
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            let MutationRecord {
                category,
                old_value,
                new_value,
            } = entry.mutation;
            write!(
                f,
                "Generation {}: {} changed from {old_value} to {new_value}",
                entry.generation,
                category.display_name()
            )?;
        }
        Ok(())
    }
}
