pub mod color_reporter;
pub mod image_loader;

pub use color_reporter::ColorReporter;
