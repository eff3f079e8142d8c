//! Precedence graph for assembly-line tasks
//!
//! Directed graph of tasks with processing times. Acyclicity is enforced
//! eagerly: an edge that would close a cycle is rejected, so a constructed
//! graph always has well-defined downstream reachability. Uses petgraph
//! for graph storage and cycle checks.

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::{HashMap, HashSet, VecDeque};
use thiserror::Error;

use super::task::{Task, TaskId};

#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("Duplicate task: {0}")]
    DuplicateTask(TaskId),

    #[error("Task not found: {0}")]
    UnknownTask(TaskId),

    #[error("Adding precedence would create a cycle: {0} -> {1}")]
    Cycle(TaskId, TaskId),
}

/// A precedence graph over assembly-line tasks.
///
/// Nodes carry the full [`Task`] record; an edge `a -> b` means task `a`
/// must be performed before task `b`. Node insertion order is preserved
/// (tasks are never removed), which the ranking relies on for its
/// deterministic tie-break.
#[derive(Debug, Default)]
pub struct PrecedenceGraph {
    /// The underlying directed graph
    graph: DiGraph<Task, ()>,

    /// Map from TaskId to node index
    node_map: HashMap<TaskId, NodeIndex>,
}

impl PrecedenceGraph {
    /// Creates an empty precedence graph
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
        }
    }

    /// Adds a task to the graph
    pub fn add_task(
        &mut self,
        id: TaskId,
        name: impl Into<String>,
        duration: f64,
    ) -> Result<(), GraphError> {
        if self.node_map.contains_key(&id) {
            return Err(GraphError::DuplicateTask(id));
        }
        let idx = self.graph.add_node(Task::new(id, name, duration));
        self.node_map.insert(id, idx);
        Ok(())
    }

    /// Adds a precedence edge: `from` must be performed before `to`.
    ///
    /// Duplicate edges collapse silently. An edge that would close a cycle
    /// is rejected and the graph is left unchanged.
    pub fn add_edge(&mut self, from: TaskId, to: TaskId) -> Result<(), GraphError> {
        let from_idx = *self
            .node_map
            .get(&from)
            .ok_or(GraphError::UnknownTask(from))?;
        let to_idx = *self.node_map.get(&to).ok_or(GraphError::UnknownTask(to))?;

        if self.graph.find_edge(from_idx, to_idx).is_some() {
            return Ok(());
        }

        let edge = self.graph.add_edge(from_idx, to_idx, ());

        // Check for cycles
        if is_cyclic_directed(&self.graph) {
            self.graph.remove_edge(edge);
            return Err(GraphError::Cycle(from, to));
        }

        Ok(())
    }

    /// Returns the set of task IDs reachable from `id`, including `id`
    /// itself.
    ///
    /// The self-inclusion is what makes the ranked positional weight pick
    /// up the task's own duration. Each reachable node is visited exactly
    /// once even when multiple paths lead to it.
    pub fn downstream_closure(&self, id: TaskId) -> Result<HashSet<TaskId>, GraphError> {
        let start = *self.node_map.get(&id).ok_or(GraphError::UnknownTask(id))?;

        let mut seen = HashSet::new();
        let mut queue = VecDeque::from([start]);
        seen.insert(start);
        while let Some(idx) = queue.pop_front() {
            for next in self.graph.neighbors_directed(idx, Direction::Outgoing) {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        Ok(seen.iter().map(|idx| self.graph[*idx].id).collect())
    }

    /// Returns the summed duration of `id`'s downstream closure: the
    /// task's own duration plus the durations of everything that must
    /// follow it. This is the ranked positional weight.
    pub fn downstream_weight(&self, id: TaskId) -> Result<f64, GraphError> {
        let closure = self.downstream_closure(id)?;
        Ok(closure
            .iter()
            .filter_map(|member| self.get(*member))
            .map(|task| task.duration)
            .sum())
    }

    /// Returns the task record, or None if absent
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.node_map.get(&id).map(|idx| &self.graph[*idx])
    }

    /// Returns true if the graph contains the task
    pub fn contains(&self, id: TaskId) -> bool {
        self.node_map.contains_key(&id)
    }

    /// Iterates over tasks in insertion order
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// Returns all precedence edges as (from, to) pairs
    pub fn edges(&self) -> Vec<(TaskId, TaskId)> {
        self.graph
            .edge_indices()
            .filter_map(|edge| self.graph.edge_endpoints(edge))
            .map(|(a, b)| (self.graph[a].id, self.graph[b].id))
            .collect()
    }

    /// Returns the number of tasks in the graph
    pub fn len(&self) -> usize {
        self.node_map.len()
    }

    /// Returns true if the graph has no tasks
    pub fn is_empty(&self) -> bool {
        self.node_map.is_empty()
    }

    /// Returns the number of precedence edges
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns the highest single task duration, or 0.0 for an empty graph
    pub fn max_duration(&self) -> f64 {
        self.tasks().map(|t| t.duration).fold(0.0, f64::max)
    }

    /// Returns the sum of all task durations
    pub fn total_duration(&self) -> f64 {
        self.tasks().map(|t| t.duration).sum()
    }
}
