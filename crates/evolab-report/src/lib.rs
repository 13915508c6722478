//! Read-only views over a finished (or running) simulation.
//!
//! Every view takes the result history as a slice and derives presentation
//! values from it without modifying it:
//!
//! - [`summary`] - Totals, final score and strongest/weakest traits
//! - [`chart`] - Per-generation score points with an adaptation status
//! - [`mutation_log`] - The generations in which a mutation occurred
//! - [`narrative`] - A natural-language paragraph about the run
//! - [`trait_analysis`] - Per-trait compatibility with the chosen biome
//!
//! # Example
//!
//! ```
//! use evolab_engine::{AppState, Simulation, SimulationConfig};
//! use evolab_report::{chart, summary::EvolutionSummary};
//! # use evolab_engine::{Biome, TraitCategory};
//!
//! let mut app = AppState::new();
//! # for category in TraitCategory::ALL {
//! #     app.set_trait(category, category.values()[0]);
//! # }
//! # app.set_biome(Biome::Ocean);
//! let mut sim = Simulation::new(SimulationConfig::default()).unwrap();
//! sim.start(&mut app);
//! while sim.state().is_running() {
//!     sim.tick(&mut app);
//! }
//!
//! let points = chart::chart_points(app.history()).unwrap();
//! assert_eq!(points.len(), 5);
//! let summary = EvolutionSummary::new(app.traits(), app.biome(), app.history());
//! assert_eq!(summary.total_generations, 5);
//! ```

pub mod chart;
pub mod mutation_log;
pub mod narrative;
pub mod summary;
pub mod trait_analysis;
