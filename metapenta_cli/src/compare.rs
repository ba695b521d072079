use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use log::info;
use metapenta_core::report::{json_array_report, write_report};
use metapenta_core::{
    common_metabolites as common_metabolites_of, common_reactions as common_reactions_of,
    MetabolicNetwork,
};

#[derive(Parser)]
pub struct CompareCommand {
    /// The first network (COBRA JSON).
    pub network1: PathBuf,

    /// The second network, whose entities are reported.
    pub network2: PathBuf,

    /// Where the JSON report is written.
    pub output: PathBuf,
}

pub(crate) fn load(path: &Path) -> anyhow::Result<MetabolicNetwork> {
    MetabolicNetwork::read_json(path)
        .with_context(|| format!("Unable to load network from {}", path.display()))
}

pub fn common_metabolites(command: &CompareCommand) -> anyhow::Result<()> {
    let network1 = load(&command.network1)?;
    let network2 = load(&command.network2)?;
    let common = common_metabolites_of(&network1, &network2);
    info!("Found {} common metabolites", common.len());
    for metabolite in &common {
        println!("{}", metabolite);
    }
    write_report(&command.output, &json_array_report("commonMetabolites", &common))
        .with_context(|| format!("Unable to write {}", command.output.display()))
}

pub fn common_reactions(command: &CompareCommand) -> anyhow::Result<()> {
    let network1 = load(&command.network1)?;
    let network2 = load(&command.network2)?;
    let common = common_reactions_of(&network1, &network2);
    info!("Found {} common reactions", common.len());
    for reaction in &common {
        println!("{}", reaction);
    }
    write_report(&command.output, &json_array_report("commonReactions", &common))
        .with_context(|| format!("Unable to write {}", command.output.display()))
}
