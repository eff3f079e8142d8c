//! Text report generation
//!
//! Renders the full line-balancing worksheet: plan parameters, the
//! unbalanced per-task table with idle times against both cycle bounds,
//! and one section per balanced line. Output is plain text meant for a
//! `Line_Balancing_Report.txt` file.

use chrono::{DateTime, Local};

use crate::domain::{BalancedLine, LineMetrics, PrecedenceGraph, ProductionPlan, StationMetrics};

const RULE: &str =
    "  -----------------------------------------------------------------------------------------------------------";

/// All inputs of one balancing run, borrowed for rendering.
pub struct LineReport<'a> {
    pub plan: &'a ProductionPlan,
    pub graph: &'a PrecedenceGraph,
    pub metrics: &'a LineMetrics,
    pub takt_line: &'a BalancedLine,
    pub takt_metrics: &'a StationMetrics,
    pub highest_line: &'a BalancedLine,
    pub highest_metrics: &'a StationMetrics,
}

impl LineReport<'_> {
    /// Renders the report; the timestamp is passed in so tests stay
    /// deterministic
    pub fn render(&self, generated_at: DateTime<Local>) -> String {
        let unit = self.plan.unit.as_str();
        let mut out = String::new();
        let mut line = |s: String| {
            out.push_str(&s);
            out.push('\n');
        };

        line(format!(
            "  Report generated on {} at {}",
            generated_at.format("%d %B %Y"),
            generated_at.format("%H:%M:%S")
        ));
        line(String::new());
        line(stat("Total working days in one year", self.plan.work_days, "days"));
        line(stat(
            "Total working hours in one day",
            self.plan.work_hours_per_day,
            "hours",
        ));
        line(stat(
            "Total available time for processing",
            self.plan.total_available_time(),
            unit,
        ));
        line(stat("The annual demand", self.plan.annual_demand, "units"));
        line(stat("The takt time for this process", self.metrics.takt_time, unit));
        line(stat(
            "The highest processing time for this line",
            self.metrics.highest_task_time,
            unit,
        ));
        line(stat(
            "The total task time for this line",
            self.metrics.total_task_time,
            unit,
        ));
        line(count("Number of tasks", self.graph.len()));
        line(count("Number of precedences", self.graph.edge_count()));
        line(String::new());

        // Unbalanced line: one operator per task
        line("  ----------------------------------------- Unbalanced Line -------------------------------------------------".to_string());
        line("        task name                                                          task time   idle time   idle time".to_string());
        line("                                                                                          (takt)   (highest)".to_string());
        line(RULE.to_string());
        for idle in &self.metrics.per_task {
            let name = self
                .graph
                .get(idle.id)
                .map(|t| t.name.as_str())
                .unwrap_or_default();
            line(format!(
                "  [{:>3}] {:<64}{:>12.2}{:>12.2}{:>12.2}",
                idle.id, name, idle.task_time, idle.idle_takt, idle.idle_highest
            ));
        }
        line(String::new());
        line(stat("Total idle time (takt)", self.metrics.total_idle_takt, unit));
        line(stat(
            "Total idle time (highest)",
            self.metrics.total_idle_highest,
            unit,
        ));
        line(stat(
            "Smoothness index based on takt time",
            self.metrics.smoothness_takt,
            "",
        ));
        line(stat(
            "Smoothness index based on the highest task time",
            self.metrics.smoothness_highest,
            "",
        ));
        line(percent("Line efficiency (takt)", self.metrics.efficiency_takt));
        line(percent(
            "Line efficiency (highest)",
            self.metrics.efficiency_highest,
        ));
        line(String::new());

        Self::station_section(
            &mut line,
            "  ---------------------------------------- Balanced Line (takt) ---------------------------------------------",
            self.takt_line,
            self.takt_metrics,
            unit,
        );
        Self::station_section(
            &mut line,
            "  -------------------------------------- Balanced Line (highest) --------------------------------------------",
            self.highest_line,
            self.highest_metrics,
            unit,
        );

        line("  End of report".to_string());
        out
    }

    fn station_section(
        line: &mut impl FnMut(String),
        heading: &str,
        balanced: &BalancedLine,
        metrics: &StationMetrics,
        unit: &str,
    ) {
        line(heading.to_string());
        line("        task groupings                                                     task time               idle time".to_string());
        line(RULE.to_string());
        for (station, idle) in balanced.stations.iter().zip(&metrics.per_station) {
            let members = station
                .tasks
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            line(format!(
                "  [{:>3}] {:<64}{:>12.2}{:>24.2}",
                station.position,
                format!("[{members}]"),
                station.load,
                idle.idle
            ));
        }
        line(String::new());
        line(stat("Total idle time", metrics.total_idle, unit));
        line(stat("Smoothness index", metrics.smoothness, ""));
        line(stat(
            "Maximum units with this setup",
            metrics.max_annual_output,
            "units",
        ));
        line(percent("Line efficiency", metrics.efficiency));
        line(String::new());
    }
}

fn stat(label: &str, value: f64, unit: &str) -> String {
    format!("  {label:<49}: {value:>12.2} {unit}")
}

fn count(label: &str, value: usize) -> String {
    format!("  {label:<49}: {value:>12}")
}

fn percent(label: &str, value: f64) -> String {
    format!("  {label:<49}: {value:>12.2} %")
}
