//! # Storage Layer
//!
//! Plain-text dataset loading and configuration.
//!
//! | Data | Format | File |
//! |------|--------|------|
//! | Task durations | one float per line | `tasktime.txt` |
//! | Task names | one name per line | `tasknames.txt` |
//! | Precedence edges | `from,to` per line | `edges_nodes.txt` |
//! | Plan parameters | `days,hours,demand` | `demand_worktime.txt` |
//! | Config | TOML | `takt.toml` (optional) |
//!
//! [`Dataset`] is the entry point: load the files, then build the
//! precedence graph and production plan from it.

mod config;
mod dataset;

pub use config::{Config, CONFIG_FILE};
pub use dataset::{
    Dataset, DatasetError, DEMAND_FILE, EDGES_FILE, TASK_NAMES_FILE, TASK_TIMES_FILE,
};
