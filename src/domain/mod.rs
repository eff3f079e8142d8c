//! Domain model and algorithms for line balancing
//!
//! Contains the precedence graph, RPW ranking, station packing, and line
//! metrics without any I/O concerns.

mod task;
mod graph;
mod rank;
mod balance;
mod metrics;

pub use task::{IdError, Task, TaskId};
pub use graph::{GraphError, PrecedenceGraph};
pub use rank::{rank, RankedTask};
pub use balance::{balance, BalanceError, BalancedLine, StationGroup};
pub use metrics::{
    LineMetrics, PlanError, ProductionPlan, StationIdle, StationMetrics, TaskIdle, TimeUnit,
};
