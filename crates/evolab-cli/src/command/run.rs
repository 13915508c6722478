use std::{path::PathBuf, thread};

use chrono::Utc;
use evolab_engine::{
    AppState, GenerationResult, InvalidInputError, ScoringRule, Simulation, SimulationConfig,
    SimulationSeed, SimulationState,
};

use super::{OrganismArg, report};
use crate::{
    model::record::SimulationRecord,
    util::{self, Output},
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct RunArg {
    #[clap(flatten)]
    organism: OrganismArg,
    /// Simulation config file (JSON); flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed of the random source (32 hex digits)
    #[arg(long)]
    seed: Option<SimulationSeed>,
    /// Scoring formula
    #[arg(long)]
    rule: Option<ScoringRule>,
    /// Probability that a generation mutates, in [0, 1]
    #[arg(long)]
    mutation_chance: Option<f64>,
    /// Skip the pauses between generations
    #[arg(long)]
    no_delay: bool,
    /// Output file path for the simulation record
    #[arg(long)]
    output: Option<PathBuf>,
}

impl RunArg {
    fn config(&self) -> anyhow::Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => util::read_config_file(path)?,
            None => SimulationConfig::default(),
        };
        if let Some(rule) = self.rule {
            config.rule = rule;
        }
        if let Some(mutation_chance) = self.mutation_chance {
            config.mutation_chance = mutation_chance;
        }
        if self.no_delay {
            config.generation_delay_ms = 0;
            config.completion_delay_ms = 0;
        }
        log::debug!("simulation config: {config:?}");
        Ok(config)
    }
}

pub(crate) fn run(arg: &RunArg) -> anyhow::Result<()> {
    let config = arg.config()?;
    let mut sim = match arg.seed {
        Some(seed) => Simulation::with_seed(config, seed)?,
        None => Simulation::new(config)?,
    };

    let mut app = AppState::new();
    for (category, value) in arg.organism.selection().iter() {
        app.set_trait(category, value);
    }
    if let Some(biome) = arg.organism.biome {
        app.set_biome(biome);
        eprintln!("Biome: {} {}", biome.display_name(), biome.icon());
        eprintln!("  {}", biome.description());
    }
    eprintln!("Seed: {}", sim.seed());
    eprintln!("Rule: {}", sim.config().rule);
    eprintln!();

    sim.start(&mut app);
    while sim.state().is_running() {
        if let Some(delay) = sim.next_delay() {
            thread::sleep(delay);
        }
        if let SimulationState::Errored { error } = sim.tick(&mut app) {
            eprintln!("Simulation stopped: {error}");
            eprintln!("Fix the traits or biome and run the simulation again.");
            return Err(error.clone().into());
        }
        if let Some(result) = app.history().last() {
            print_generation_card(result);
        }
    }

    if let Some(delay) = sim.next_delay() {
        thread::sleep(delay);
    }
    let biome = app.biome().ok_or(InvalidInputError::MissingBiome)?;
    report::print_report(app.traits(), biome, app.history())?;

    if let Some(output) = &arg.output {
        let record = SimulationRecord {
            traits: app.traits().clone(),
            biome,
            seed: sim.seed(),
            rule: sim.config().rule,
            simulated_at: Utc::now(),
            results: app.history().to_vec(),
        };
        Output::save_json(&record, Some(output.clone()))?;
        log::info!("simulation record saved to {}", output.display());

        eprintln!();
        eprintln!("Record saved successfully");
        eprintln!("  Path: {}", output.display());
        eprintln!("  Simulated at: {}", record.simulated_at);
    }

    Ok(())
}

fn print_generation_card(result: &GenerationResult) {
    let status = if result.survived() {
        "Survived"
    } else {
        "Did not survive"
    };
    eprintln!(
        "Generation #{}: {}% ({status})",
        result.generation(),
        result.adaptation_score()
    );
    for note in result.notes() {
        eprintln!("  {note}");
    }
}
