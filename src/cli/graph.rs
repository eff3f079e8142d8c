//! `graph` command: write Graphviz DOT files
//!
//! Emits one file for the unbalanced precedence graph and one per
//! balanced line. Rendering to an image is left to Graphviz, e.g.
//! `dot -Tpng rpw_out.dot -o rpw_out.png`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::app::DataArgs;
use super::balance::LimitKind;
use super::output::Output;
use super::session::Session;
use crate::domain;
use crate::render;

pub const UNBALANCED_DOT: &str = "rpw_out.dot";
pub const TAKT_DOT: &str = "rpw_out_takt_balanced.dot";
pub const HIGHEST_DOT: &str = "rpw_out_highest_balanced.dot";

pub fn run(data: &DataArgs, out_dir: Option<&Path>, output: &Output) -> Result<()> {
    let session = Session::open(&data.dir, data.unit, output)?;
    let target = out_dir.unwrap_or(&session.dir);

    let ranked = domain::rank(&session.graph)?;
    let takt = LimitKind::Takt.resolve(&session.plan, &session.graph);
    let highest = LimitKind::Highest.resolve(&session.plan, &session.graph);
    let takt_line = domain::balance(&ranked, takt)?;
    let highest_line = domain::balance(&ranked, highest)?;

    let files = [
        (
            UNBALANCED_DOT,
            render::precedence_dot(&session.graph, "Unbalanced line"),
        ),
        (
            TAKT_DOT,
            render::balanced_dot(&takt_line, "Balanced line using takt time"),
        ),
        (
            HIGHEST_DOT,
            render::balanced_dot(&highest_line, "Balanced line using highest time"),
        ),
    ];

    let mut written = Vec::new();
    for (name, dot) in files {
        let path = target.join(name);
        fs::write(&path, dot)
            .with_context(|| format!("Failed to write DOT file: {}", path.display()))?;
        output.verbose_ctx("graph", &format!("Wrote {}", path.display()));
        written.push(path);
    }

    if output.is_json() {
        let paths: Vec<_> = written.iter().map(|p| p.display().to_string()).collect();
        output.data(&serde_json::json!({ "written": paths }));
    } else {
        output.success(&format!(
            "Wrote {} DOT files to {}",
            written.len(),
            target.display()
        ));
    }

    Ok(())
}
