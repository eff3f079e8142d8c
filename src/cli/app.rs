//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{balance, chart, graph, rank, report};
use crate::domain::TimeUnit;

#[derive(Parser)]
#[command(name = "takt")]
#[command(
    author,
    version,
    about = "Assembly-line balancing with the Ranked Positional Weight method"
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments shared by every command: where the data lives and which
/// unit the calculations use
#[derive(Args)]
pub struct DataArgs {
    /// Directory containing the data files
    #[arg(long, short = 'd', default_value = ".", env = "TAKT_DIR")]
    pub dir: PathBuf,

    /// Base unit for calculations (hrs, min, sec); defaults to the
    /// configured unit
    #[arg(long, short = 'u')]
    pub unit: Option<TimeUnit>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the RPW ranking of all tasks
    Rank {
        #[command(flatten)]
        data: DataArgs,
    },

    /// Pack tasks into stations under a cycle-time limit
    Balance {
        #[command(flatten)]
        data: DataArgs,

        /// Which cycle bound to pack against
        #[arg(long, value_enum, default_value_t = balance::LimitKind::Takt)]
        by: balance::LimitKind,

        /// Explicit cycle-time limit, overriding --by
        #[arg(long)]
        limit: Option<f64>,
    },

    /// Write the full line-balancing text report
    Report {
        #[command(flatten)]
        data: DataArgs,

        /// Output path; '-' writes to stdout (default: the configured
        /// report file in the data directory)
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,
    },

    /// Write Graphviz DOT files for the unbalanced and balanced lines
    Graph {
        #[command(flatten)]
        data: DataArgs,

        /// Target directory for the .dot files (default: the data
        /// directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Print stacked time/idle bar charts
    Chart {
        #[command(flatten)]
        data: DataArgs,

        /// Chart a balanced line instead of the unbalanced tasks
        #[arg(long, value_enum)]
        by: Option<balance::LimitKind>,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("takt starting");

    match cli.command {
        Commands::Rank { data } => rank::run(&data, &output),
        Commands::Balance { data, by, limit } => balance::run(&data, by, limit, &output),
        Commands::Report { data, out } => report::run(&data, out.as_deref(), &output),
        Commands::Graph { data, out_dir } => graph::run(&data, out_dir.as_deref(), &output),
        Commands::Chart { data, by } => chart::run(&data, by, &output),
    }
}
