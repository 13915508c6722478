use clap::{Parser, Subcommand};
use evolab_engine::{Biome, TraitCategory, TraitSelection, TraitValue};

use self::{evaluate::EvaluateArg, options::OptionsArg, report::ReportArg, run::RunArg};

mod evaluate;
mod options;
mod report;
mod run;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// List trait categories, their values and the biomes
    Options(#[clap(flatten)] OptionsArg),
    /// Evaluate a single generation and print the result as JSON
    Evaluate(#[clap(flatten)] EvaluateArg),
    /// Run a full five-generation simulation
    Run(#[clap(flatten)] RunArg),
    /// Print the report of a saved simulation record
    Report(#[clap(flatten)] ReportArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Options(arg) => options::run(&arg)?,
        Mode::Evaluate(arg) => evaluate::run(&arg)?,
        Mode::Run(arg) => run::run(&arg)?,
        Mode::Report(arg) => report::run(&arg)?,
    }
    Ok(())
}

/// The organism and environment under test.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct OrganismArg {
    /// Environment to evaluate against
    #[arg(long)]
    biome: Option<Biome>,
    /// Trait as `category=value`, once per category (e.g. `--trait covering=fur`)
    #[arg(long = "trait", value_name = "CATEGORY=VALUE", value_parser = parse_trait)]
    traits: Vec<(TraitCategory, TraitValue)>,
}

impl OrganismArg {
    /// Later occurrences of a category override earlier ones.
    pub(crate) fn selection(&self) -> TraitSelection {
        self.traits.iter().copied().collect()
    }
}

fn parse_trait(s: &str) -> Result<(TraitCategory, TraitValue), String> {
    let (category, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected CATEGORY=VALUE, got {s:?}"))?;
    let category = category.trim().parse::<TraitCategory>().map_err(|e| e.to_string())?;
    let value = value.trim().parse::<TraitValue>().map_err(|e| e.to_string())?;
    Ok((category, value))
}
