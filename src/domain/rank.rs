//! Ranked Positional Weight computation
//!
//! A task's ranked positional weight (RPW) is its own duration plus the
//! durations of every task that must follow it. Tasks with the heaviest
//! downstream workload are assigned to stations first.

use serde::Serialize;

use super::graph::{GraphError, PrecedenceGraph};
use super::task::TaskId;

/// A task together with its ranked positional weight.
///
/// Carries the task duration so the balancer can pack stations without
/// going back to the graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTask {
    pub id: TaskId,
    pub duration: f64,
    pub weight: f64,
}

/// Computes the RPW ranking for every task, sorted by descending weight.
///
/// Ties keep the tasks' original input order: the sort is stable over the
/// insertion-ordered task list, so the ranking is deterministic. Pure
/// function of the graph; calling it twice yields identical output.
pub fn rank(graph: &PrecedenceGraph) -> Result<Vec<RankedTask>, GraphError> {
    let mut ranked = Vec::with_capacity(graph.len());
    for task in graph.tasks() {
        ranked.push(RankedTask {
            id: task.id,
            duration: task.duration,
            weight: graph.downstream_weight(task.id)?,
        });
    }
    ranked.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    Ok(ranked)
}
