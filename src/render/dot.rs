//! Graphviz DOT rendering
//!
//! Emits DOT text for the unbalanced precedence graph and for balanced
//! lines. Layout and rasterization are Graphviz's job (`dot -Tpng`);
//! this module only produces the text.

use crate::domain::{BalancedLine, PrecedenceGraph};

/// Renders the precedence graph: one circle per task labeled
/// `number-(duration)`, edges following the precedences.
pub fn precedence_dot(graph: &PrecedenceGraph, title: &str) -> String {
    let mut dot = header(title);
    for task in graph.tasks() {
        dot.push_str(&format!(
            "    \"{}\" [label=\"{}-({:.2})\"];\n",
            task.id,
            task.id,
            task.duration
        ));
    }
    for (from, to) in graph.edges() {
        dot.push_str(&format!("    \"{from}\" -> \"{to}\";\n"));
    }
    dot.push_str("}\n");
    dot
}

/// Renders a balanced line: one node per station labeled with its
/// members and load, chained by sequential edges.
pub fn balanced_dot(line: &BalancedLine, title: &str) -> String {
    let mut dot = header(title);
    for station in &line.stations {
        let members = station
            .tasks
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        dot.push_str(&format!(
            "    \"{}\" [label=\"{} [{}]\\n({:.2})\"];\n",
            station.position, station.position, members, station.load
        ));
    }
    for (from, to) in line.edges() {
        dot.push_str(&format!("    \"{from}\" -> \"{to}\";\n"));
    }
    dot.push_str("}\n");
    dot
}

fn header(title: &str) -> String {
    format!(
        "digraph {{\n    graph [rankdir=LR, labelloc=t, label=\"{}\", fontsize=20];\n    node [shape=circle];\n",
        escape(title)
    )
}

/// Escapes a string for use inside a double-quoted DOT attribute
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
