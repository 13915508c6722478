//! The generation loop.
//!
//! [`Simulation`] is an explicit state machine:
//!
//! ```text
//!            start                tick (g < 5)
//! Idle ───────────────▶ Running(1) ─────────▶ Running(g + 1)
//!   ▲                       │
//!   │ start                 │ tick (g = 5)          tick (evaluation failed)
//!   │                       ▼                       ▼
//!   └──────────────── Complete                   Errored
//! ```
//!
//! `start` is also accepted from `Errored` and ignored while running.
//!
//! The loop never sleeps. The caller owns the timer: it calls
//! [`Simulation::tick`] when the timer fires and waits [`Simulation::next_delay`]
//! before the next call. Abandoning a run is dropping the simulation; there is
//! nothing to clean up.

use std::time::Duration;

use rand::Rng as _;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::{
    AppState, ConfigError, EvaluationError, GENERATION_COUNT, InvalidInputError, ScoringRule,
    SimulationSeed, evaluator,
};

/// Tunable parameters of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Scoring formula
    pub rule: ScoringRule,
    /// Probability that a generation mutates, in `[0, 1]`
    pub mutation_chance: f64,
    /// Pause between generations
    pub generation_delay_ms: u64,
    /// Pause after the last generation before results are shown
    pub completion_delay_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rule: ScoringRule::Mean,
            mutation_chance: 0.12,
            generation_delay_ms: 2000,
            completion_delay_ms: 3000,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.mutation_chance) {
            return Err(ConfigError::MutationChanceOutOfRange {
                value: self.mutation_chance,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn generation_delay(&self) -> Duration {
        Duration::from_millis(self.generation_delay_ms)
    }

    #[must_use]
    pub fn completion_delay(&self) -> Duration {
        Duration::from_millis(self.completion_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SimulationState {
    Idle,
    /// Waiting to evaluate `generation`.
    Running { generation: u8 },
    Complete,
    Errored { error: EvaluationError },
}

#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    seed: SimulationSeed,
    rng: Pcg32,
    state: SimulationState,
}

impl Simulation {
    /// Creates an idle simulation with a random seed.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        Self::with_seed(config, rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for reproducible runs.
    pub fn with_seed(config: SimulationConfig, seed: SimulationSeed) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            seed,
            rng: seed.rng(),
            state: SimulationState::Idle,
        })
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    #[must_use]
    pub fn seed(&self) -> SimulationSeed {
        self.seed
    }

    #[must_use]
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Starts (or restarts) a run: clears the history and waits for generation 1.
    ///
    /// Does nothing while a run is in progress.
    pub fn start(&mut self, app: &mut AppState) {
        if let SimulationState::Running { generation } = self.state {
            log::debug!("start ignored: simulation is waiting for generation {generation}");
            return;
        }
        app.clear_history();
        self.state = SimulationState::Running { generation: 1 };
        log::info!(
            "simulation started (seed {}, rule {})",
            self.seed,
            self.config.rule
        );
    }

    /// Timer fired: evaluates the pending generation and appends its result.
    ///
    /// Does nothing unless the simulation is running.
    pub fn tick(&mut self, app: &mut AppState) -> &SimulationState {
        let SimulationState::Running { generation } = self.state else {
            return &self.state;
        };

        match self.evaluate_generation(app, generation) {
            Ok(()) if generation < GENERATION_COUNT => {
                self.state = SimulationState::Running {
                    generation: generation + 1,
                };
            }
            Ok(()) => {
                log::info!("simulation complete after {generation} generations");
                self.state = SimulationState::Complete;
            }
            Err(error) => {
                log::warn!("generation {generation} failed: {error}");
                self.state = SimulationState::Errored { error };
            }
        }
        &self.state
    }

    /// How long the caller should wait before the next step.
    ///
    /// While running this is the pause before the next generation; once
    /// complete it is the pause before results are shown. The first
    /// generation is due as soon as the run starts.
    #[must_use]
    pub fn next_delay(&self) -> Option<Duration> {
        match self.state {
            SimulationState::Running { generation: 1 } => Some(Duration::ZERO),
            SimulationState::Running { .. } => Some(self.config.generation_delay()),
            SimulationState::Complete => Some(self.config.completion_delay()),
            SimulationState::Idle | SimulationState::Errored { .. } => None,
        }
    }

    fn evaluate_generation(
        &mut self,
        app: &mut AppState,
        generation: u8,
    ) -> Result<(), EvaluationError> {
        let biome = app.biome().ok_or(InvalidInputError::MissingBiome)?;
        let mutation_occurs = self.rng.random_bool(self.config.mutation_chance);
        let result = evaluator::evaluate(
            app.traits(),
            biome,
            generation,
            mutation_occurs,
            self.config.rule,
            &mut self.rng,
        )?;
        app.push_result(result)?;
        Ok(())
    }
}
