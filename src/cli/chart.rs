//! `chart` command: stacked time/idle bars in the terminal

use anyhow::Result;

use super::app::DataArgs;
use super::balance::LimitKind;
use super::output::Output;
use super::session::Session;
use crate::domain;
use crate::render::{stacked_chart, BarRow};

pub fn run(data: &DataArgs, by: Option<LimitKind>, output: &Output) -> Result<()> {
    let session = Session::open(&data.dir, data.unit, output)?;
    let unit = session.plan.unit.as_str();

    let (title, bound, rows) = match by {
        None => {
            let takt = session.plan.takt_time();
            let rows: Vec<BarRow> = session
                .graph
                .tasks()
                .map(|t| BarRow {
                    label: t.id.to_string(),
                    time: t.duration,
                    idle: takt - t.duration,
                })
                .collect();
            (
                "Unbalanced line with task times and idle times".to_string(),
                takt,
                rows,
            )
        }
        Some(kind) => {
            let bound = kind.resolve(&session.plan, &session.graph);
            let ranked = domain::rank(&session.graph)?;
            let line = domain::balance(&ranked, bound)?;
            let rows: Vec<BarRow> = line
                .stations
                .iter()
                .map(|s| BarRow {
                    label: s.position.to_string(),
                    time: s.load,
                    idle: bound - s.load,
                })
                .collect();
            (
                format!(
                    "Balanced line ({} bound) with station loads and idle times",
                    kind.as_str()
                ),
                bound,
                rows,
            )
        }
    };

    if output.is_json() {
        let bars: Vec<_> = rows
            .iter()
            .map(|r| {
                serde_json::json!({
                    "label": r.label,
                    "time": r.time,
                    "idle": r.idle,
                })
            })
            .collect();
        output.data(&serde_json::json!({
            "title": title,
            "bound": bound,
            "unit": unit,
            "bars": bars,
        }));
    } else {
        print!("{}", stacked_chart(&title, &rows, bound, unit));
    }

    Ok(())
}
