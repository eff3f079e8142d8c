//! Shared command context
//!
//! Every command starts the same way: load the config and dataset from
//! the data directory, build the precedence graph, and derive the
//! production plan for the effective unit.

use std::path::{Path, PathBuf};

use anyhow::Result;

use super::output::Output;
use crate::domain::{PrecedenceGraph, ProductionPlan, TimeUnit};
use crate::storage::{Config, Dataset};

pub(crate) struct Session {
    pub dir: PathBuf,
    pub graph: PrecedenceGraph,
    pub plan: ProductionPlan,
    pub config: Config,
}

impl Session {
    /// Opens a data directory. `unit` overrides the configured unit.
    pub fn open(dir: &Path, unit: Option<TimeUnit>, output: &Output) -> Result<Self> {
        let config = Config::load(dir)?;
        let dataset = Dataset::load(dir)?;
        let graph = dataset.build_graph()?;
        let unit = unit.unwrap_or(config.unit);
        let plan = dataset.plan(unit)?;

        output.verbose_ctx(
            "data",
            &format!(
                "Loaded {} tasks, {} precedences from {} (unit: {})",
                graph.len(),
                graph.edge_count(),
                dir.display(),
                unit
            ),
        );

        Ok(Self {
            dir: dir.to_path_buf(),
            graph,
            plan,
            config,
        })
    }
}
