use crate::error::ConfigError;
use color_tally::Rgb;
use image::imageops::FilterType;
use serde::{Deserialize, Deserializer};
use std::path::Path;

/// Environment variable naming a YAML config file
pub const CONFIG_ENV_VAR: &str = "HUETALLY_CONFIG";

/// Largest resize grid accepted, in pixels (4096x4096)
pub const MAX_GRID_PIXELS: u64 = 4096 * 4096;

/// Report configuration loaded from YAML, then overridden by CLI flags
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportConfig {
    /// Grid the image is downscaled to before counting
    #[serde(default)]
    pub resize: ResizeConfig,

    /// How many colors to list
    #[serde(default = "default_top")]
    pub top: usize,

    /// Output format for stdout
    #[serde(default)]
    pub format: OutputFormat,

    /// Colors left out of the ranking, as hex strings in YAML
    #[serde(default, deserialize_with = "deserialize_colors")]
    pub ignore: Vec<Rgb>,
}

fn default_top() -> usize {
    5
}

fn deserialize_colors<'de, D>(deserializer: D) -> Result<Vec<Rgb>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<String>::deserialize(deserializer)?
        .iter()
        .map(|hex| {
            hex.parse()
                .map_err(|e| serde::de::Error::custom(format!("invalid color {hex:?}: {e}")))
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ResizeConfig {
    #[serde(default = "default_side")]
    pub width: u32,

    #[serde(default = "default_side")]
    pub height: u32,

    #[serde(default)]
    pub filter: ResizeFilter,
}

fn default_side() -> u32 {
    150
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            width: default_side(),
            height: default_side(),
            filter: ResizeFilter::default(),
        }
    }
}

/// Resampling filter used for the downscale
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    /// Bicubic
    #[default]
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Values given on the command line; `None` keeps the configured value
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub filter: Option<ResizeFilter>,
    pub top: Option<usize>,
    pub format: Option<OutputFormat>,
    /// Added to the configured ignore list
    pub ignore: Vec<Rgb>,
}

impl ReportConfig {
    /// Parse configuration from a YAML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            width = config.resize.width,
            height = config.resize.height,
            top = config.top,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Resolve the config source.
    ///
    /// An explicit path (from `--config`) must load. A path from the
    /// environment falls back to defaults with a warning when it cannot
    /// be used. With neither, defaults apply.
    pub fn resolve(explicit: Option<&Path>, from_env: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        match from_env {
            Some(path) => match Self::load_from_file(path) {
                Ok(config) => Ok(config),
                Err(e) => {
                    tracing::warn!(%e, var = CONFIG_ENV_VAR, "Failed to load config, using defaults");
                    Ok(Self::default())
                }
            },
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides on top of the loaded values
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(width) = overrides.width {
            self.resize.width = width;
        }
        if let Some(height) = overrides.height {
            self.resize.height = height;
        }
        if let Some(filter) = overrides.filter {
            self.resize.filter = filter;
        }
        if let Some(top) = overrides.top {
            self.top = top;
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        for &color in &overrides.ignore {
            if !self.ignore.contains(&color) {
                self.ignore.push(color);
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ResizeConfig { width, height, .. } = self.resize;
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        if width as u64 * height as u64 > MAX_GRID_PIXELS {
            return Err(ConfigError::GridTooLarge {
                width,
                height,
                max: MAX_GRID_PIXELS,
            });
        }
        if self.top == 0 {
            return Err(ConfigError::InvalidTop);
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            resize: ResizeConfig::default(),
            top: default_top(),
            format: OutputFormat::default(),
            ignore: Vec::new(),
        }
    }
}
