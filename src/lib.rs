//! takt - Assembly-line balancing with the Ranked Positional Weight method
//!
//! Builds a precedence graph of tasks from plain text files, ranks each
//! task by its downstream workload, and greedily packs tasks into work
//! stations bounded by a cycle-time limit (takt time or the highest
//! single task time). Produces station groupings, line metrics, DOT
//! graphs, and a text report.

pub mod domain;
pub mod storage;
pub mod render;
pub mod report;
pub mod cli;

pub use domain::{
    balance, rank, BalancedLine, GraphError, PrecedenceGraph, ProductionPlan, RankedTask,
    StationGroup, Task, TaskId, TimeUnit,
};
