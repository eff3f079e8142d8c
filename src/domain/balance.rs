//! Greedy station packing over the RPW ranking
//!
//! A single linear pass assigns ranked tasks to sequential work stations.
//! The cycle-time limit is checked by peeking one task ahead: the current
//! station is sealed when the next task would push it over the limit.
//! Tasks are unsplittable, so a task whose own duration exceeds the limit
//! still lands in a station of its own rather than failing the run.

use serde::Serialize;
use thiserror::Error;

use super::rank::RankedTask;
use super::task::TaskId;

#[derive(Debug, Error, PartialEq)]
pub enum BalanceError {
    #[error("Cycle-time limit must be a positive finite number, got {0}")]
    InvalidLimit(f64),
}

/// One work station: ordinal position, assigned tasks, summed load.
///
/// Members are listed in assignment order (descending RPW), not numeric
/// task order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationGroup {
    /// 1-based station number
    pub position: usize,
    pub tasks: Vec<TaskId>,
    pub load: f64,
}

/// An ordered sequence of sealed stations: the balanced-line graph.
///
/// Station `k` feeds station `k + 1`; the edges are implied by the
/// ordering and exposed via [`BalancedLine::edges`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalancedLine {
    /// The cycle-time limit the line was packed against
    pub limit: f64,
    pub stations: Vec<StationGroup>,
}

impl BalancedLine {
    /// Returns the number of stations
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the line has no stations
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Returns the summed load across all stations
    pub fn total_load(&self) -> f64 {
        self.stations.iter().map(|s| s.load).sum()
    }

    /// Returns the heaviest station load, or 0.0 for an empty line
    pub fn max_load(&self) -> f64 {
        self.stations.iter().map(|s| s.load).fold(0.0, f64::max)
    }

    /// Returns the sequential edges between consecutive stations as
    /// 1-based (k, k + 1) pairs
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (1..self.stations.len()).map(|k| (k, k + 1))
    }
}

/// Packs the ranked tasks into sequential stations bounded by `limit`.
///
/// `limit` must be a positive finite number. An empty ranking yields an
/// empty line. Stateless: two calls with different limits do not
/// interact.
pub fn balance(ranked: &[RankedTask], limit: f64) -> Result<BalancedLine, BalanceError> {
    if !limit.is_finite() || limit <= 0.0 {
        return Err(BalanceError::InvalidLimit(limit));
    }

    let mut stations: Vec<StationGroup> = Vec::new();
    let mut members: Vec<TaskId> = Vec::new();
    let mut load = 0.0;

    let mut iter = ranked.iter().peekable();
    while let Some(task) = iter.next() {
        members.push(task.id);
        load += task.duration;

        // Seal on the last task, or when the next task would overflow
        let seal = match iter.peek() {
            None => true,
            Some(next) => load + next.duration > limit,
        };
        if seal {
            stations.push(StationGroup {
                position: stations.len() + 1,
                tasks: std::mem::take(&mut members),
                load,
            });
            load = 0.0;
        }
    }

    Ok(BalancedLine { limit, stations })
}
