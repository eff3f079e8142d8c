//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `rank` | Print the RPW ranking of all tasks |
//! | `balance` | Pack tasks into stations (`--by takt\|highest`, `--limit`) |
//! | `report` | Write the full line-balancing text report |
//! | `graph` | Write Graphviz DOT files for each line view |
//! | `chart` | Print stacked time/idle bar charts |
//!
//! ## Output Formats
//!
//! All commands support `--format`:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output:
//! ```bash
//! takt --verbose balance --dir data
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod balance;
mod chart;
mod graph;
mod output;
mod rank;
mod report;
mod session;

pub use app::{run, Cli, Commands, DataArgs};
pub use balance::LimitKind;
pub use output::{Output, OutputFormat};
