//! `report` command: write the full line-balancing text report

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

use super::app::DataArgs;
use super::output::Output;
use super::session::Session;
use crate::domain::{self, LineMetrics, StationMetrics};
use crate::report::LineReport;

pub fn run(data: &DataArgs, out: Option<&Path>, output: &Output) -> Result<()> {
    let session = Session::open(&data.dir, data.unit, output)?;

    let takt = session.plan.takt_time();
    let highest = session.graph.max_duration();
    let available = session.plan.total_available_time();

    let metrics = LineMetrics::calculate(&session.graph, takt);
    let ranked = domain::rank(&session.graph)?;
    let takt_line = domain::balance(&ranked, takt)?;
    let takt_metrics = StationMetrics::calculate(&takt_line, takt, available);
    let highest_line = domain::balance(&ranked, highest)?;
    let highest_metrics = StationMetrics::calculate(&highest_line, highest, available);

    let report = LineReport {
        plan: &session.plan,
        graph: &session.graph,
        metrics: &metrics,
        takt_line: &takt_line,
        takt_metrics: &takt_metrics,
        highest_line: &highest_line,
        highest_metrics: &highest_metrics,
    };
    let text = report.render(Local::now());

    let default_path = session.dir.join(&session.config.report_file);
    let target = out.unwrap_or(&default_path);

    if target == Path::new("-") {
        print!("{text}");
        return Ok(());
    }

    fs::write(target, &text)
        .with_context(|| format!("Failed to write report: {}", target.display()))?;
    output.verbose_ctx("report", &format!("{} bytes written", text.len()));
    output.success(&format!("Wrote report to {}", target.display()));

    Ok(())
}
