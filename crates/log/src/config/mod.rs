//! Configuration types and presets
//!
//! - `base`: core configuration struct and output format
//! - `writer`: writer and display configuration
//! - `presets`: development, production and test setups, plus environment parsing

mod base;
mod presets;
mod writer;

pub use base::{Config, Format};
pub use presets::{FORMAT_ENV, LEVEL_ENV, RUST_LOG_ENV};
pub use writer::{DisplayConfig, WriterConfig};
