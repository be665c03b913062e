// crates/segmenter-cli/src/main.rs

use clap::{ArgAction, Parser, Subcommand};
use segmenter_cli::cmd;
use tracing_subscriber::{filter::LevelFilter, fmt};

#[derive(Parser)]
#[command(name = "segmenter")]
#[command(about = "Split a campaign lead list into per-agent CSV segments", long_about = None)]
pub struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List campaigns and their agent rosters
    Campaigns(cmd::campaigns::CampaignsArgs),

    /// Load + normalize a CSV and preview its first rows
    Inspect(cmd::inspect::InspectArgs),

    /// Segment a CSV across the selected agents and write one file per segment
    Split(cmd::split::SplitArgs),
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn init_tracing(level: LevelFilter) {
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("tracing subscriber already set");
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(log_level(cli.verbose));

    match cli.cmd {
        Commands::Campaigns(args) => cmd::campaigns::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
        Commands::Split(args) => cmd::split::run(args),
    }
}
