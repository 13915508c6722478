use evolab_engine::{Biome, TraitCategory, TraitValue};
use serde::Serialize;

use crate::util::Output;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct OptionsArg {
    /// Print the options as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct CategoryOptions {
    category: TraitCategory,
    name: &'static str,
    values: &'static [TraitValue],
}

#[derive(Debug, Serialize)]
struct BiomeOption {
    biome: Biome,
    name: &'static str,
    icon: &'static str,
    description: &'static str,
}

#[derive(Debug, Serialize)]
struct Options {
    categories: Vec<CategoryOptions>,
    biomes: Vec<BiomeOption>,
}

impl Options {
    fn collect() -> Self {
        Self {
            categories: TraitCategory::ALL
                .into_iter()
                .map(|category| CategoryOptions {
                    category,
                    name: category.display_name(),
                    values: category.values(),
                })
                .collect(),
            biomes: Biome::ALL
                .into_iter()
                .map(|biome| BiomeOption {
                    biome,
                    name: biome.display_name(),
                    icon: biome.icon(),
                    description: biome.description(),
                })
                .collect(),
        }
    }
}

pub(crate) fn run(arg: &OptionsArg) -> anyhow::Result<()> {
    let options = Options::collect();
    if arg.json {
        return Output::save_json(&options, None);
    }

    println!("Traits:");
    for category in &options.categories {
        let values = category
            .values
            .iter()
            .map(|value| value.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        println!("  {:<13} {:<16} {values}", category.category.as_str(), category.name);
    }
    println!();
    println!("Biomes:");
    for biome in &options.biomes {
        println!(
            "  {:<11} {} {}",
            biome.biome.as_str(),
            biome.icon,
            biome.description
        );
    }
    Ok(())
}
