//! Production plan and line performance metrics
//!
//! The plan converts annual working time and demand into a takt time.
//! Metrics follow the standard line-balancing worksheet: idle time per
//! task/station against a cycle bound, smoothness index, and line
//! efficiency.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::balance::BalancedLine;
use super::graph::PrecedenceGraph;
use super::task::TaskId;

/// Base unit used for all time calculations.
///
/// Available working time is recorded in hours; the multiplier scales it
/// into the unit the task durations were measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    #[default]
    Hours,
    Minutes,
    Seconds,
}

impl TimeUnit {
    /// Scale factor from hours into this unit
    pub fn multiplier(&self) -> f64 {
        match self {
            TimeUnit::Hours => 1.0,
            TimeUnit::Minutes => 60.0,
            TimeUnit::Seconds => 3600.0,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TimeUnit::Hours => "hrs",
            TimeUnit::Minutes => "min",
            TimeUnit::Seconds => "sec",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hrs" | "hours" => Ok(TimeUnit::Hours),
            "min" | "minutes" => Ok(TimeUnit::Minutes),
            "sec" | "seconds" => Ok(TimeUnit::Seconds),
            other => Err(format!(
                "invalid time unit '{other}' (expected hrs, min, or sec)"
            )),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum PlanError {
    #[error("Work time must be positive: {0} days x {1} hours")]
    InvalidWorkTime(f64, f64),

    #[error("Annual demand must be positive, got {0}")]
    InvalidDemand(f64),
}

/// Annual production parameters: working time and demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductionPlan {
    pub work_days: f64,
    pub work_hours_per_day: f64,
    pub annual_demand: f64,
    pub unit: TimeUnit,
}

impl ProductionPlan {
    pub fn new(
        work_days: f64,
        work_hours_per_day: f64,
        annual_demand: f64,
        unit: TimeUnit,
    ) -> Result<Self, PlanError> {
        if !(work_days > 0.0) || !(work_hours_per_day > 0.0) {
            return Err(PlanError::InvalidWorkTime(work_days, work_hours_per_day));
        }
        if !(annual_demand > 0.0) {
            return Err(PlanError::InvalidDemand(annual_demand));
        }
        Ok(Self {
            work_days,
            work_hours_per_day,
            annual_demand,
            unit,
        })
    }

    /// Total available processing time per year, in the plan's unit
    pub fn total_available_time(&self) -> f64 {
        self.work_days * self.work_hours_per_day * self.unit.multiplier()
    }

    /// Takt time: available time divided by demand
    pub fn takt_time(&self) -> f64 {
        self.total_available_time() / self.annual_demand
    }
}

/// Idle time of one task against both cycle bounds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskIdle {
    pub id: TaskId,
    pub task_time: f64,
    /// Idle against the takt time; negative when the task exceeds it
    pub idle_takt: f64,
    /// Idle against the highest single task time
    pub idle_highest: f64,
}

/// Metrics for the unbalanced line: one operator per task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineMetrics {
    pub takt_time: f64,
    pub highest_task_time: f64,
    pub total_task_time: f64,
    pub per_task: Vec<TaskIdle>,
    pub total_idle_takt: f64,
    pub total_idle_highest: f64,
    pub smoothness_takt: f64,
    pub smoothness_highest: f64,
    /// Line efficiency in percent: work / (work + idle) x 100
    pub efficiency_takt: f64,
    pub efficiency_highest: f64,
}

impl LineMetrics {
    pub fn calculate(graph: &PrecedenceGraph, takt_time: f64) -> Self {
        let highest = graph.max_duration();
        let total = graph.total_duration();

        let per_task: Vec<TaskIdle> = graph
            .tasks()
            .map(|t| TaskIdle {
                id: t.id,
                task_time: t.duration,
                idle_takt: takt_time - t.duration,
                idle_highest: highest - t.duration,
            })
            .collect();

        let total_idle_takt: f64 = per_task.iter().map(|t| t.idle_takt).sum();
        let total_idle_highest: f64 = per_task.iter().map(|t| t.idle_highest).sum();

        Self {
            takt_time,
            highest_task_time: highest,
            total_task_time: total,
            smoothness_takt: smoothness(per_task.iter().map(|t| t.idle_takt)),
            smoothness_highest: smoothness(per_task.iter().map(|t| t.idle_highest)),
            efficiency_takt: efficiency(total, total_idle_takt),
            efficiency_highest: efficiency(total, total_idle_highest),
            per_task,
            total_idle_takt,
            total_idle_highest,
        }
    }
}

/// Idle time of one station against the cycle bound
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationIdle {
    pub position: usize,
    pub load: f64,
    pub idle: f64,
}

/// Metrics for a balanced line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationMetrics {
    /// The cycle bound idle time is measured against (takt or highest)
    pub cycle_time: f64,
    pub per_station: Vec<StationIdle>,
    pub total_idle: f64,
    pub smoothness: f64,
    pub efficiency: f64,
    /// Annual output achievable with this grouping: available time
    /// divided by the heaviest station load
    pub max_annual_output: f64,
}

impl StationMetrics {
    pub fn calculate(line: &BalancedLine, cycle_time: f64, total_available_time: f64) -> Self {
        let per_station: Vec<StationIdle> = line
            .stations
            .iter()
            .map(|s| StationIdle {
                position: s.position,
                load: s.load,
                idle: cycle_time - s.load,
            })
            .collect();

        let total_idle: f64 = per_station.iter().map(|s| s.idle).sum();
        let total_work = line.total_load();
        let max_load = line.max_load();
        let max_annual_output = if max_load > 0.0 {
            total_available_time / max_load
        } else {
            0.0
        };

        Self {
            cycle_time,
            smoothness: smoothness(per_station.iter().map(|s| s.idle)),
            efficiency: efficiency(total_work, total_idle),
            per_station,
            total_idle,
            max_annual_output,
        }
    }
}

/// Smoothness index: root of the summed squared idle times
fn smoothness(idle: impl Iterator<Item = f64>) -> f64 {
    idle.map(|i| i * i).sum::<f64>().sqrt()
}

/// Line efficiency in percent; 0.0 when there is no work at all
fn efficiency(work: f64, idle: f64) -> f64 {
    let denom = work + idle;
    if denom > 0.0 {
        work / denom * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::balance::balance;
    use crate::domain::rank::rank;

    fn id(n: u32) -> TaskId {
        TaskId::new(n)
    }

    #[test]
    fn unit_parsing_and_multipliers() {
        assert_eq!("hrs".parse::<TimeUnit>().unwrap(), TimeUnit::Hours);
        assert_eq!("MIN".parse::<TimeUnit>().unwrap(), TimeUnit::Minutes);
        assert_eq!("seconds".parse::<TimeUnit>().unwrap(), TimeUnit::Seconds);
        assert!("days".parse::<TimeUnit>().is_err());

        assert_eq!(TimeUnit::Hours.multiplier(), 1.0);
        assert_eq!(TimeUnit::Minutes.multiplier(), 60.0);
        assert_eq!(TimeUnit::Seconds.multiplier(), 3600.0);
    }

    #[test]
    fn takt_time_from_plan() {
        // 250 days x 8 hours = 2000 hrs; demand 1000 -> takt 2 hrs
        let plan = ProductionPlan::new(250.0, 8.0, 1000.0, TimeUnit::Hours).unwrap();
        assert_eq!(plan.total_available_time(), 2000.0);
        assert_eq!(plan.takt_time(), 2.0);

        // same plan in minutes
        let plan = ProductionPlan::new(250.0, 8.0, 1000.0, TimeUnit::Minutes).unwrap();
        assert_eq!(plan.takt_time(), 120.0);
    }

    #[test]
    fn plan_rejects_degenerate_inputs() {
        assert_eq!(
            ProductionPlan::new(0.0, 8.0, 100.0, TimeUnit::Hours),
            Err(PlanError::InvalidWorkTime(0.0, 8.0))
        );
        assert_eq!(
            ProductionPlan::new(250.0, 8.0, 0.0, TimeUnit::Hours),
            Err(PlanError::InvalidDemand(0.0))
        );
        assert!(ProductionPlan::new(250.0, -1.0, 100.0, TimeUnit::Hours).is_err());
    }

    fn sample_graph() -> PrecedenceGraph {
        let mut graph = PrecedenceGraph::new();
        graph.add_task(id(1), "a", 4.0).unwrap();
        graph.add_task(id(2), "b", 6.0).unwrap();
        graph.add_task(id(3), "c", 2.0).unwrap();
        graph
    }

    #[test]
    fn unbalanced_metrics() {
        let metrics = LineMetrics::calculate(&sample_graph(), 7.0);

        assert_eq!(metrics.highest_task_time, 6.0);
        assert_eq!(metrics.total_task_time, 12.0);
        // idle vs takt: 3 + 1 + 5 = 9
        assert_eq!(metrics.total_idle_takt, 9.0);
        // idle vs highest: 2 + 0 + 4 = 6
        assert_eq!(metrics.total_idle_highest, 6.0);
        // smoothness vs takt: sqrt(9 + 1 + 25)
        assert!((metrics.smoothness_takt - 35.0f64.sqrt()).abs() < 1e-10);
        // efficiency vs takt: 12 / 21 x 100
        assert!((metrics.efficiency_takt - 12.0 / 21.0 * 100.0).abs() < 1e-10);
    }

    #[test]
    fn station_metrics() {
        let graph = sample_graph();
        let ranked = rank(&graph).unwrap();
        let line = balance(&ranked, 7.0).unwrap();
        // stations: [6], [4, 2]
        let metrics = StationMetrics::calculate(&line, 7.0, 70.0);

        assert_eq!(metrics.per_station.len(), 2);
        assert_eq!(metrics.per_station[0].idle, 1.0);
        assert_eq!(metrics.per_station[1].idle, 1.0);
        assert_eq!(metrics.total_idle, 2.0);
        assert!((metrics.smoothness - 2.0f64.sqrt()).abs() < 1e-10);
        // 12 / 14 x 100
        assert!((metrics.efficiency - 12.0 / 14.0 * 100.0).abs() < 1e-10);
        // 70 available / max load 6
        assert!((metrics.max_annual_output - 70.0 / 6.0).abs() < 1e-10);
    }

    #[test]
    fn metrics_of_empty_line() {
        let line = balance(&[], 5.0).unwrap();
        let metrics = StationMetrics::calculate(&line, 5.0, 100.0);
        assert_eq!(metrics.total_idle, 0.0);
        assert_eq!(metrics.efficiency, 0.0);
        assert_eq!(metrics.max_annual_output, 0.0);
    }
}
