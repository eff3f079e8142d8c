//! `rank` command: print the RPW table

use anyhow::Result;

use super::app::DataArgs;
use super::output::Output;
use super::session::Session;
use crate::domain;

pub fn run(data: &DataArgs, output: &Output) -> Result<()> {
    let session = Session::open(&data.dir, data.unit, output)?;
    let ranked = domain::rank(&session.graph)?;
    output.verbose_ctx("rank", &format!("Ranked {} tasks", ranked.len()));

    if output.is_json() {
        let items: Vec<_> = ranked
            .iter()
            .map(|r| {
                let name = session
                    .graph
                    .get(r.id)
                    .map(|t| t.name.as_str())
                    .unwrap_or_default();
                serde_json::json!({
                    "id": r.id,
                    "name": name,
                    "duration": r.duration,
                    "weight": r.weight,
                })
            })
            .collect();
        output.data(&items);
    } else if ranked.is_empty() {
        println!("No tasks to rank.");
    } else {
        println!("RPW ranking ({} tasks):", ranked.len());
        println!("{:<6} {:<6} {:>10} {:>10}  NAME", "RANK", "TASK", "TIME", "WEIGHT");
        println!("{}", "-".repeat(60));
        for (position, r) in ranked.iter().enumerate() {
            let name = session
                .graph
                .get(r.id)
                .map(|t| t.name.as_str())
                .unwrap_or_default();
            println!(
                "{:<6} {:<6} {:>10.2} {:>10.2}  {}",
                position + 1,
                r.id,
                r.duration,
                r.weight,
                name
            );
        }
    }

    Ok(())
}
