pub mod config;
pub mod report;

pub use config::{
    ConfigOverrides, OutputFormat, ReportConfig, ResizeConfig, ResizeFilter, CONFIG_ENV_VAR,
    MAX_GRID_PIXELS,
};
pub use report::ColorReport;
