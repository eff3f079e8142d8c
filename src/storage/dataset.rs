//! Plain-text dataset loading
//!
//! A data directory holds four delimited text files, one value or pair
//! per line:
//!
//! | File | Content |
//! |------|---------|
//! | `tasktime.txt` | one task duration per line |
//! | `tasknames.txt` | one task name per line, same order |
//! | `edges_nodes.txt` | one `from,to` precedence pair per line |
//! | `demand_worktime.txt` | `work_days,work_hours,annual_demand` |
//!
//! Tasks are numbered 1..n by line position. Trailing blank lines are
//! tolerated everywhere.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use crate::domain::{GraphError, PlanError, PrecedenceGraph, ProductionPlan, TaskId, TimeUnit};

pub const TASK_TIMES_FILE: &str = "tasktime.txt";
pub const TASK_NAMES_FILE: &str = "tasknames.txt";
pub const EDGES_FILE: &str = "edges_nodes.txt";
pub const DEMAND_FILE: &str = "demand_worktime.txt";

#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    #[error("Task name count ({names}) does not match task time count ({times})")]
    CountMismatch { names: usize, times: usize },

    #[error("Invalid task time on line {line}: '{value}'")]
    InvalidTime { line: usize, value: String },

    #[error("Task time on line {line} is negative: {value}")]
    NegativeTime { line: usize, value: f64 },

    #[error("Invalid edge on line {line}: expected 'from,to', got '{value}'")]
    InvalidEdge { line: usize, value: String },

    #[error("Invalid demand line: expected 'work_days,work_hours,annual_demand', got '{0}'")]
    InvalidDemand(String),

    #[error("Dataset contains no tasks")]
    Empty,
}

/// A parsed dataset, not yet turned into a graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub times: Vec<f64>,
    pub names: Vec<String>,
    pub edges: Vec<(TaskId, TaskId)>,
    pub work_days: f64,
    pub work_hours: f64,
    pub annual_demand: f64,
}

impl Dataset {
    /// Loads and parses the four data files from `dir`
    pub fn load(dir: &Path) -> Result<Self> {
        let times = read(dir, TASK_TIMES_FILE)?;
        let names = read(dir, TASK_NAMES_FILE)?;
        let edges = read(dir, EDGES_FILE)?;
        let demand = read(dir, DEMAND_FILE)?;

        let dataset = Self::parse(&times, &names, &edges, &demand)
            .with_context(|| format!("Invalid dataset in {}", dir.display()))?;
        Ok(dataset)
    }

    /// Parses raw file contents into a dataset
    pub fn parse(
        times_raw: &str,
        names_raw: &str,
        edges_raw: &str,
        demand_raw: &str,
    ) -> Result<Self, DatasetError> {
        let mut times = Vec::new();
        for (i, line) in lines(times_raw).enumerate() {
            let value: f64 = line.parse().map_err(|_| DatasetError::InvalidTime {
                line: i + 1,
                value: line.to_string(),
            })?;
            if !value.is_finite() || value < 0.0 {
                return Err(DatasetError::NegativeTime {
                    line: i + 1,
                    value,
                });
            }
            times.push(value);
        }
        if times.is_empty() {
            return Err(DatasetError::Empty);
        }

        let names: Vec<String> = lines(names_raw).map(str::to_string).collect();
        if names.len() != times.len() {
            return Err(DatasetError::CountMismatch {
                names: names.len(),
                times: times.len(),
            });
        }

        let mut edges = Vec::new();
        for (i, line) in lines(edges_raw).enumerate() {
            let invalid = || DatasetError::InvalidEdge {
                line: i + 1,
                value: line.to_string(),
            };
            let (from, to) = line.split_once(',').ok_or_else(&invalid)?;
            let from: TaskId = from.parse().map_err(|_| invalid())?;
            let to: TaskId = to.parse().map_err(|_| invalid())?;
            edges.push((from, to));
        }

        let demand_line = lines(demand_raw)
            .next()
            .ok_or_else(|| DatasetError::InvalidDemand(String::new()))?;
        let fields: Vec<f64> = demand_line
            .split(',')
            .map(|f| f.trim().parse::<f64>())
            .collect::<Result<_, _>>()
            .map_err(|_| DatasetError::InvalidDemand(demand_line.to_string()))?;
        let [work_days, work_hours, annual_demand] = fields[..] else {
            return Err(DatasetError::InvalidDemand(demand_line.to_string()));
        };

        Ok(Self {
            times,
            names,
            edges,
            work_days,
            work_hours,
            annual_demand,
        })
    }

    /// Builds the precedence graph: tasks numbered 1..n in file order,
    /// then all edges. Unknown endpoints, duplicates, and cycles surface
    /// as [`GraphError`].
    pub fn build_graph(&self) -> Result<PrecedenceGraph, GraphError> {
        let mut graph = PrecedenceGraph::new();
        for (i, (time, name)) in self.times.iter().zip(&self.names).enumerate() {
            graph.add_task(TaskId::new(i as u32 + 1), name.clone(), *time)?;
        }
        for (from, to) in &self.edges {
            graph.add_edge(*from, *to)?;
        }
        Ok(graph)
    }

    /// Builds the production plan for a given base unit
    pub fn plan(&self, unit: TimeUnit) -> Result<ProductionPlan, PlanError> {
        ProductionPlan::new(self.work_days, self.work_hours, self.annual_demand, unit)
    }
}

/// Non-empty trimmed lines of a file
fn lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.lines().map(str::trim).filter(|l| !l.is_empty())
}

fn read(dir: &Path, file: &str) -> Result<String> {
    let path = dir.join(file);
    fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
}
