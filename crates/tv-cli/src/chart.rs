//! ASCII bar chart of per-quiz accuracy.

use tv_quiz::Tally;

/// Bar width in columns at 100%.
pub const WIDTH: usize = 40;

/// Render one line per quiz:
///
/// ```text
/// nato      |##########################              |  2/3  (67%)
/// ```
pub fn bar_chart(rows: &[(&str, Tally)], width: usize) -> String {
    let label_width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (name, tally) in rows {
        let filled = bar_length(tally.percent(), width);
        out.push_str(&format!(
            "  {name:<label_width$} |{}{}| {:>2}/{:<2} ({:.0}%)\n",
            "#".repeat(filled),
            " ".repeat(width - filled),
            tally.correct,
            tally.total(),
            tally.percent(),
        ));
    }
    out
}

fn bar_length(percent: f64, width: usize) -> usize {
    let filled = (percent / 100.0 * width as f64).round();
    (filled.max(0.0) as usize).min(width)
}
