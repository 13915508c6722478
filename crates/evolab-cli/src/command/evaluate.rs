use std::path::PathBuf;

use evolab_engine::{InvalidInputError, ScoringRule, SimulationSeed, evaluator};
use rand::Rng as _;

use super::OrganismArg;
use crate::util::Output;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct EvaluateArg {
    #[clap(flatten)]
    organism: OrganismArg,
    /// Generation number to evaluate (1-5)
    #[arg(long, default_value_t = 1)]
    generation: u8,
    /// Apply a random mutation before scoring
    #[arg(long)]
    mutate: bool,
    /// Scoring formula
    #[arg(long, default_value = "mean")]
    rule: ScoringRule,
    /// Seed of the random source (32 hex digits)
    #[arg(long)]
    seed: Option<SimulationSeed>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &EvaluateArg) -> anyhow::Result<()> {
    let EvaluateArg {
        organism,
        generation,
        mutate,
        rule,
        seed,
        output,
    } = arg;
    let biome = organism.biome.ok_or(InvalidInputError::MissingBiome)?;
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    log::debug!("evaluating generation {generation} with seed {seed}");

    let result = evaluator::evaluate(
        &organism.selection(),
        biome,
        *generation,
        *mutate,
        *rule,
        &mut seed.rng(),
    )?;
    Output::save_json(&result, output.clone())?;
    Ok(())
}
