use crate::error::ReportError;
use crate::models::ColorReport;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct JsonReport<'a> {
    source: &'a Path,
    width: u32,
    height: u32,
    distinct_colors: usize,
    top_colors: Vec<JsonColor>,
    gradient: JsonGradient,
}

#[derive(Serialize)]
struct JsonColor {
    hex: String,
    count: u32,
}

#[derive(Serialize)]
struct JsonGradient {
    row: u32,
    left: String,
    right: String,
    is_gradient: bool,
}

impl<'a> From<&'a ColorReport> for JsonReport<'a> {
    fn from(report: &'a ColorReport) -> Self {
        Self {
            source: &report.source,
            width: report.width,
            height: report.height,
            distinct_colors: report.distinct_colors,
            top_colors: report
                .top_colors
                .iter()
                .map(|entry| JsonColor {
                    hex: entry.color.to_string(),
                    count: entry.count,
                })
                .collect(),
            gradient: JsonGradient {
                row: report.gradient.row,
                left: report.gradient.left.to_string(),
                right: report.gradient.right.to_string(),
                is_gradient: report.gradient.is_gradient(),
            },
        }
    }
}

/// Pretty-printed JSON document, newline-terminated
pub fn render_json(report: &ColorReport) -> Result<String, ReportError> {
    let mut json = serde_json::to_string_pretty(&JsonReport::from(report))?;
    json.push('\n');
    Ok(json)
}
