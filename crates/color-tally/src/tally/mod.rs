//! Color frequency counting and ranking.

mod histogram;

pub use histogram::{ColorCount, ColorHistogram};
