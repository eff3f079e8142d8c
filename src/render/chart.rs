//! Terminal stacked-bar charts
//!
//! One row per task or station: a filled segment for processing time and
//! a dotted continuation for idle time up to the cycle bound, scaled to
//! a fixed character width. A numeric column keeps the exact values.

const BAR_WIDTH: usize = 48;

/// One bar of the chart
#[derive(Debug, Clone, PartialEq)]
pub struct BarRow {
    pub label: String,
    /// Processing time (filled segment)
    pub time: f64,
    /// Idle time against the bound (dotted segment); negative idle draws
    /// no dots, the filled bar simply runs past the bound marker
    pub idle: f64,
}

/// Renders a stacked chart with a title line and the cycle bound noted
pub fn stacked_chart(title: &str, rows: &[BarRow], bound: f64, unit: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("{title}\n"));
    out.push_str(&format!("cycle bound: {bound:.2} {unit}\n\n"));

    if rows.is_empty() {
        out.push_str("(no tasks)\n");
        return out;
    }

    // Widest bar: either the bound or an over-limit row
    let scale_max = rows
        .iter()
        .map(|r| r.time + r.idle.max(0.0))
        .fold(bound, f64::max);
    let label_width = rows.iter().map(|r| r.label.len()).max().unwrap_or(0);

    for row in rows {
        let filled = scaled(row.time, scale_max);
        let dotted = scaled(row.idle.max(0.0), scale_max);
        out.push_str(&format!(
            "{:>label_width$} |{}{}{}| {:8.2} time, {:8.2} idle\n",
            row.label,
            "#".repeat(filled),
            ".".repeat(dotted),
            " ".repeat(BAR_WIDTH.saturating_sub(filled + dotted)),
            row.time,
            row.idle,
        ));
    }
    out
}

fn scaled(value: f64, scale_max: f64) -> usize {
    if scale_max <= 0.0 {
        return 0;
    }
    ((value / scale_max) * BAR_WIDTH as f64).round() as usize
}
