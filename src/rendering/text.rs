use crate::models::ColorReport;
use std::fmt;

/// Plain-text layout:
///
/// ```text
/// Top 5 Colors:
/// #rrggbb (Count: N)
///
/// Gradient Check:
/// Left: #rrggbb
/// Right: #rrggbb
/// ```
pub fn render_text(report: &ColorReport) -> String {
    TextReport(report).to_string()
}

struct TextReport<'a>(&'a ColorReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;

        writeln!(f, "Top {} Colors:", report.requested_top)?;
        for entry in &report.top_colors {
            writeln!(f, "{} (Count: {})", entry.color, entry.count)?;
        }

        writeln!(f)?;
        writeln!(f, "Gradient Check:")?;
        writeln!(f, "Left: {}", report.gradient.left)?;
        writeln!(f, "Right: {}", report.gradient.right)
    }
}
