//! Presentation of graphs and charts
//!
//! Graphviz DOT text for the precedence and balanced-line graphs, and
//! terminal stacked-bar charts for time/idle distributions.

mod chart;
mod dot;

pub use chart::{stacked_chart, BarRow};
pub use dot::{balanced_dot, precedence_dot};
