//! `balance` command: pack tasks into stations

use anyhow::Result;
use clap::ValueEnum;

use super::app::DataArgs;
use super::output::Output;
use super::session::Session;
use crate::domain::{self, PrecedenceGraph, ProductionPlan};

/// Which cycle bound a balancing run packs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LimitKind {
    /// Takt time: available time divided by demand
    #[default]
    Takt,
    /// Highest single task time
    Highest,
}

impl std::fmt::Display for LimitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LimitKind {
    pub fn as_str(&self) -> &str {
        match self {
            LimitKind::Takt => "takt",
            LimitKind::Highest => "highest",
        }
    }

    /// Resolves the bound against the plan and graph
    pub(crate) fn resolve(&self, plan: &ProductionPlan, graph: &PrecedenceGraph) -> f64 {
        match self {
            LimitKind::Takt => plan.takt_time(),
            LimitKind::Highest => graph.max_duration(),
        }
    }
}

pub fn run(data: &DataArgs, by: LimitKind, limit: Option<f64>, output: &Output) -> Result<()> {
    let session = Session::open(&data.dir, data.unit, output)?;

    let (limit, bound_label) = match limit {
        Some(explicit) => (explicit, "explicit".to_string()),
        None => (
            by.resolve(&session.plan, &session.graph),
            by.as_str().to_string(),
        ),
    };
    output.verbose_ctx(
        "balance",
        &format!("Packing against {bound_label} limit {limit:.2}"),
    );

    let ranked = domain::rank(&session.graph)?;
    let line = domain::balance(&ranked, limit)?;
    let unit = session.plan.unit.as_str();

    if output.is_json() {
        output.data(&serde_json::json!({
            "bound": bound_label,
            "limit": limit,
            "unit": unit,
            "stations": line.stations,
            "total_load": line.total_load(),
            "max_load": line.max_load(),
        }));
    } else if line.is_empty() {
        println!("No tasks to balance.");
    } else {
        println!(
            "Balanced line ({} bound, limit {:.2} {}): {} stations",
            bound_label,
            limit,
            unit,
            line.station_count()
        );
        println!("{:<8} {:<30} {:>10} {:>10}", "STATION", "TASKS", "LOAD", "IDLE");
        println!("{}", "-".repeat(62));
        for station in &line.stations {
            let members = station
                .tasks
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            println!(
                "{:<8} {:<30} {:>10.2} {:>10.2}",
                station.position,
                members,
                station.load,
                limit - station.load
            );
        }
    }

    Ok(())
}
