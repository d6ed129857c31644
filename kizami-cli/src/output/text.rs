//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use kizami_core::Document;
use std::io::{self, Write};

/// Plain text formatter - outputs one chunk per block, blank-line separated
pub struct TextFormatter<W: Write> {
    writer: W,
    written: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            written: false,
        }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, document: &Document) -> Result<()> {
        if self.written {
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "{}", document.content.trim_end())?;
        self.written = true;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
