//! Scoring engine for the evolab evolution simulator.
//!
//! An organism is described by one value per [`TraitCategory`] and is evaluated
//! against a [`Biome`]. Each generation the [`evaluator`] looks up how well every
//! trait suits the biome, averages the per-trait scores into an adaptation score
//! and decides whether the population survived.
//!
//! # Architecture
//!
//! ```text
//! Simulation (five-generation state machine, caller-driven timer)
//!     ↓ reads traits/biome from, appends results to
//! AppState (traits, biome, result history)
//!     ↓ per generation
//! evaluate (validation → optional mutation → compatibility lookup → score)
//!     ↓ uses
//! Compatibility table (authored data)
//! ```
//!
//! - [`organism`] - Trait categories, trait values and selections
//! - [`biome`] - The four environments
//! - [`compatibility`] - Qualitative trait/biome ratings and their numeric scores
//! - [`evaluator`] - The fitness evaluator and scoring rules
//! - [`generation`] - Immutable per-generation results
//! - [`app_state`] - Controller-owned application state
//! - [`simulation`] - The generation loop
//! - [`seed`] - Seeds for reproducible random sources
//!
//! # Example
//!
//! ```
//! use evolab_engine::{
//!     Biome, ScoringRule, TraitCategory, TraitSelection, TraitValue, evaluator,
//! };
//!
//! let mut traits = TraitSelection::new();
//! traits.set(TraitCategory::Covering, TraitValue::Fur);
//! traits.set(TraitCategory::Metabolism, TraitValue::Warm);
//! traits.set(TraitCategory::Locomotion, TraitValue::Walking);
//! traits.set(TraitCategory::Reproduction, TraitValue::Sexual);
//! traits.set(TraitCategory::Limbs, TraitValue::Legs);
//! traits.set(TraitCategory::Senses, TraitValue::Sight);
//! traits.set(TraitCategory::Behavior, TraitValue::Social);
//!
//! let result = evaluator::evaluate(
//!     &traits,
//!     Biome::Tundra,
//!     1,
//!     false,
//!     ScoringRule::Mean,
//!     &mut rand::rng(),
//! )
//! .unwrap();
//! assert_eq!(result.adaptation_score(), 75);
//! assert!(result.survived());
//! ```

pub use self::{
    app_state::AppState,
    biome::Biome,
    compatibility::Compatibility,
    error::{ConfigError, EvaluationError, InvalidInputError, MalformedResultError},
    evaluator::{EnvironmentalEvent, GENERATION_COUNT, SURVIVAL_THRESHOLD, ScoringRule},
    generation::{GenerationResult, MutationRecord, PressureAdjustment, TraitScore},
    organism::{Organism, TraitCategory, TraitSelection, TraitValue},
    seed::{InvalidSeedError, SimulationSeed},
    simulation::{Simulation, SimulationConfig, SimulationState},
};

pub mod app_state;
pub mod biome;
pub mod compatibility;
mod error;
pub mod evaluator;
pub mod generation;
pub mod organism;
pub mod seed;
pub mod simulation;
