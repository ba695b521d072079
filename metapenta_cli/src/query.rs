use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use log::{info, warn};
use metapenta_core::report::{json_array_report, metabolite_reactions_report, write_report};
use metapenta_core::PetriNet;

use crate::compare::load;

#[derive(Parser)]
pub struct ReactionsOfMetaboliteCommand {
    /// The network (COBRA JSON).
    pub network: PathBuf,

    /// Id of the metabolite.
    pub metabolite: String,

    /// Where the JSON report is written.
    pub output: PathBuf,
}

#[derive(Parser)]
pub struct CatalyzedByCommand {
    /// The network (COBRA JSON).
    pub network: PathBuf,

    /// Name of the enzyme, matched exactly against gene product names.
    pub enzyme: String,

    /// Where the JSON report is written.
    pub output: PathBuf,
}

#[derive(Parser)]
pub struct PlacesCommand {
    /// The network (COBRA JSON).
    pub network: PathBuf,

    /// Where the JSON report is written.
    pub output: PathBuf,
}

#[derive(Parser)]
pub struct DescribeCommand {
    /// The network (COBRA JSON).
    pub network: PathBuf,
}

fn write(output: &Path, report: &str) -> anyhow::Result<()> {
    write_report(output, report).with_context(|| format!("Unable to write {}", output.display()))
}

pub fn reactions_of_metabolite(command: &ReactionsOfMetaboliteCommand) -> anyhow::Result<()> {
    let network = load(&command.network)?;
    if !network.contains_metabolite(&command.metabolite) {
        warn!("Metabolite {} is not part of the network", command.metabolite);
    }
    let reactions = network.reactions_of_metabolite(&command.metabolite);
    info!(
        "{} is consumed by {} and produced by {} reactions",
        command.metabolite,
        reactions.as_reactant.len(),
        reactions.as_product.len()
    );
    write(&command.output, &metabolite_reactions_report(&reactions))
}

pub fn catalyzed_by(command: &CatalyzedByCommand) -> anyhow::Result<()> {
    let network = load(&command.network)?;
    let reactions = network.reactions_catalyzed_by(&command.enzyme);
    info!("{} catalyzes {} reactions", command.enzyme, reactions.len());
    write(&command.output, &json_array_report("reactions", &reactions))
}

pub fn sources(command: &PlacesCommand) -> anyhow::Result<()> {
    let network = load(&command.network)?;
    let sources = network.sources();
    info!("Found {} sources", sources.len());
    write(&command.output, &json_array_report("sources", &sources))
}

pub fn sinks(command: &PlacesCommand) -> anyhow::Result<()> {
    let network = load(&command.network)?;
    let sinks = network.sinks();
    info!("Found {} sinks", sinks.len());
    write(&command.output, &json_array_report("sinks", &sinks))
}

pub fn describe(command: &DescribeCommand) -> anyhow::Result<()> {
    let network = load(&command.network)?;
    println!("name: {}", network.name().unwrap_or("(unnamed)"));
    println!("metabolites: {}", network.metabolite_count());
    println!("reactions: {}", network.reaction_count());
    println!("gene products: {}", network.gene_product_count());
    println!("compartments: {}", network.compartments().join(", "));
    Ok(())
}
