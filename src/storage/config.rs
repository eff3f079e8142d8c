//! Configuration handling for takt
//!
//! An optional `takt.toml` next to the data files overrides defaults:
//!
//! ```toml
//! unit = "minutes"
//! report_file = "balancing.txt"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::TimeUnit;

pub const CONFIG_FILE: &str = "takt.toml";

/// Per-dataset configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Base unit for calculations when `--unit` is not given
    pub unit: TimeUnit,

    /// File name of the generated text report
    pub report_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit: TimeUnit::Hours,
            report_file: "Line_Balancing_Report.txt".to_string(),
        }
    }
}

impl Config {
    /// Loads `takt.toml` from the data directory; a missing file yields
    /// the defaults
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }
}
