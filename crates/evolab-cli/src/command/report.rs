use std::path::PathBuf;

use anyhow::Context as _;
use evolab_engine::{Biome, GenerationResult, TraitSelection};
use evolab_report::{
    chart, mutation_log::MutationLog, narrative, summary::EvolutionSummary, trait_analysis,
};

use crate::util;

const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ReportArg {
    /// Simulation record saved by `evolab run --output`
    record: PathBuf,
}

pub(crate) fn run(arg: &ReportArg) -> anyhow::Result<()> {
    let record = util::read_record_file(&arg.record)?;
    record
        .check()
        .with_context(|| format!("Malformed simulation record: {}", arg.record.display()))?;

    eprintln!("Simulation record: {}", arg.record.display());
    eprintln!("  Simulated at: {}", record.simulated_at);
    eprintln!("  Seed: {}", record.seed);
    eprintln!("  Rule: {}", record.rule);
    eprintln!();
    print_report(&record.traits, record.biome, &record.results)
}

/// Prints the full results screen of a run to stderr.
pub(crate) fn print_report(
    traits: &TraitSelection,
    biome: Biome,
    history: &[GenerationResult],
) -> anyhow::Result<()> {
    let points = chart::chart_points(history)?;
    let summary = EvolutionSummary::new(traits, Some(biome), history);

    eprintln!("Evolution Report");
    eprintln!("  Generations survived: {}", summary.generations_survived);
    eprintln!("  Total mutations:      {}", summary.total_mutations);
    eprintln!(
        "  Strongest trait:      {}",
        summary
            .strongest_trait
            .map_or("None", |category| category.display_name())
    );
    eprintln!(
        "  Weakest trait:        {}",
        summary
            .weakest_trait
            .map_or("None", |category| category.display_name())
    );
    eprintln!("  Final score:          {}%", summary.final_score);
    if let (Some(min), Some(max), Some(mean)) =
        (summary.min_score, summary.max_score, summary.mean_score)
    {
        eprintln!("  Score min/mean/max:   {min}/{mean}/{max}");
    }
    eprintln!();

    eprintln!("Adaptation Progress");
    for line in chart::render_bars(&points, BAR_WIDTH).lines() {
        eprintln!("  {line}");
    }
    eprintln!();

    eprintln!("Mutation Log");
    for line in MutationLog::new(history).to_string().lines() {
        eprintln!("  {line}");
    }
    eprintln!();

    eprintln!("Trait Analysis ({} {})", biome.display_name(), biome.icon());
    for analysis in trait_analysis::analyze(traits, biome) {
        eprintln!(
            "  {:<16} {:<13} {:<9} {:>3}%  {}",
            analysis.category.display_name(),
            analysis.value.capitalized(),
            analysis.compatibility.as_str(),
            analysis.score,
            analysis.band
        );
    }
    eprintln!();

    eprintln!("Evolution Analysis");
    eprintln!("  {}", narrative::narrative(traits, Some(biome), history));
    Ok(())
}
