//! Turning a [`ColorReport`] into stdout text.
//!
//! Both formats are rendered into a `String` before anything is written,
//! so a failure never leaves half a report on stdout.

pub mod json;
pub mod text;

use crate::error::ReportError;
use crate::models::{ColorReport, OutputFormat};

pub use json::render_json;
pub use text::render_text;

/// Render a report in the requested format
pub fn render(report: &ColorReport, format: OutputFormat) -> Result<String, ReportError> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
    }
}

/// The single line printed in place of a report
pub fn render_error(error: &ReportError) -> String {
    format!("Error: {error}\n")
}
