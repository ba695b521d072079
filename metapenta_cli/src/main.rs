use clap::Parser;
use log::{error, info};
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};

mod compare;
mod query;

#[derive(Parser)]
#[command(name = "metapenta", version, about = "Structural queries over metabolic networks")]
struct CliOptions {
    #[command(subcommand)]
    pub subcommand: Command,

    #[arg(
        long,
        global = true,
        default_value = "Info",
        help = "The log level to use, one of Error, Warn, Info, Debug, Trace"
    )]
    pub log_level: LevelFilter,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Writes the metabolites of the second network whose ids also occur in the first.
    CommonMetabolites(compare::CompareCommand),
    /// Writes the reactions of the second network whose ids also occur in the first.
    CommonReactions(compare::CompareCommand),
    /// Writes the reactions consuming and producing a metabolite.
    ReactionsOfMetabolite(query::ReactionsOfMetaboliteCommand),
    /// Writes the reactions with a catalyst of the given name.
    CatalyzedBy(query::CatalyzedByCommand),
    /// Writes the metabolites no reaction produces.
    Sources(query::PlacesCommand),
    /// Writes the metabolites no reaction consumes.
    Sinks(query::PlacesCommand),
    /// Prints the size and compartments of a network.
    Describe(query::DescribeCommand),
}

fn main() {
    let options = CliOptions::parse();
    initialise_logging(options.log_level);
    if let Err(e) = run(&options) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn initialise_logging(level_filter: LevelFilter) {
    if let Err(e) = CombinedLogger::init(vec![TermLogger::new(
        level_filter,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]) {
        eprintln!("Unable to initialise logging: {}", e);
    }
}

fn run(options: &CliOptions) -> anyhow::Result<()> {
    match &options.subcommand {
        Command::CommonMetabolites(subcommand) => compare::common_metabolites(subcommand),
        Command::CommonReactions(subcommand) => compare::common_reactions(subcommand),
        Command::ReactionsOfMetabolite(subcommand) => query::reactions_of_metabolite(subcommand),
        Command::CatalyzedBy(subcommand) => query::catalyzed_by(subcommand),
        Command::Sources(subcommand) => query::sources(subcommand),
        Command::Sinks(subcommand) => query::sinks(subcommand),
        Command::Describe(subcommand) => query::describe(subcommand),
    }?;
    info!("Done");
    Ok(())
}
