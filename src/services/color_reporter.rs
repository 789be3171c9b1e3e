use crate::error::ReportError;
use crate::models::{ColorReport, ReportConfig};
use crate::rendering;
use crate::services::image_loader;
use color_tally::ColorHistogram;
use std::path::Path;

/// Runs the decode, downscale, tally and probe steps for one image
#[derive(Debug, Clone)]
pub struct ColorReporter {
    config: ReportConfig,
}

impl ColorReporter {
    /// Create a reporter, rejecting configurations that cannot produce a report
    pub fn new(config: ReportConfig) -> Result<Self, ReportError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Build the report for the image at `path`
    pub fn generate(&self, path: &Path) -> Result<ColorReport, ReportError> {
        let image = image_loader::load_rgb(path)?;
        let grid = image_loader::downscale(&image, &self.config.resize)?;

        let mut histogram = ColorHistogram::from_grid(&grid);
        for &color in &self.config.ignore {
            let pixels = histogram.remove(color);
            tracing::debug!(%color, pixels, "Ignored color");
        }
        tracing::debug!(
            distinct = histogram.distinct(),
            pixels = histogram.total(),
            "Tallied colors"
        );

        let gradient = grid.sample_edges().ok_or_else(|| ReportError::EmptyImage {
            path: path.to_path_buf(),
        })?;

        Ok(ColorReport {
            source: path.to_path_buf(),
            width: grid.width(),
            height: grid.height(),
            distinct_colors: histogram.distinct(),
            requested_top: self.config.top,
            top_colors: histogram.top(self.config.top),
            gradient,
        })
    }

    /// Generate and render in the configured format
    pub fn render(&self, path: &Path) -> Result<String, ReportError> {
        let report = self.generate(path)?;
        rendering::render(&report, self.config.format)
    }

    /// Full stdout text for `path`: the rendered report, or a single
    /// `Error: ...` line if any step failed
    pub fn output_for(&self, path: &Path) -> String {
        match self.render(path) {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!(%e, path = %path.display(), "Report failed");
                rendering::render_error(&e)
            }
        }
    }
}
