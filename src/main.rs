use anyhow::Context;
use clap::Parser;
use color_tally::Rgb;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use huetally::models::{ConfigOverrides, OutputFormat, ReportConfig, ResizeFilter, CONFIG_ENV_VAR};
use huetally::rendering;
use huetally::{ColorReporter, ReportError};

#[derive(Parser)]
#[command(name = "huetally")]
#[command(version)]
#[command(about = "Report the dominant colors of an image and check it for a horizontal gradient")]
struct Cli {
    /// Image file to analyze
    image: PathBuf,

    /// YAML configuration file (falls back to $HUETALLY_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Width of the grid the image is resized to before counting
    #[arg(long)]
    width: Option<u32>,

    /// Height of the grid the image is resized to before counting
    #[arg(long)]
    height: Option<u32>,

    /// Number of colors to list
    #[arg(short = 'n', long)]
    top: Option<usize>,

    /// Resampling filter for the resize
    #[arg(short, long, value_enum)]
    filter: Option<ResizeFilter>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Leave a color such as `#ffffff` out of the ranking (repeatable)
    #[arg(long, value_name = "COLOR")]
    ignore: Vec<Rgb>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            width: self.width,
            height: self.height,
            filter: self.filter,
            top: self.top,
            format: self.format,
            ignore: self.ignore.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries only the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "huetally=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let output = match build_reporter(&cli) {
        Ok(reporter) => reporter.output_for(&cli.image),
        Err(e) => rendering::render_error(&e),
    };

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write report to stdout")?;

    Ok(())
}

fn build_reporter(cli: &Cli) -> Result<ColorReporter, ReportError> {
    let env_config = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);

    let mut config = ReportConfig::resolve(cli.config.as_deref(), env_config.as_deref())?;
    config.apply_overrides(&cli.overrides());

    ColorReporter::new(config)
}
