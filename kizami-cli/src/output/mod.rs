//! Output formatting module

use anyhow::Result;
use kizami_core::Document;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single document
    fn format_document(&mut self, document: &Document) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
