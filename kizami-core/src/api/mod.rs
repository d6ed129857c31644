//! Public API for document preprocessing
//!
//! The entry point is [`Preprocessor`], configured through
//! [`PreprocessorConfig::builder`]. Validation happens once at build time.

mod config;
mod error;
mod processor;

pub use config::{defaults, ConfigBuilder, PreprocessorConfig, SplitBy};
pub use error::{Error, Result};
pub use processor::Preprocessor;
