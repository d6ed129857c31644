//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use kizami_core::Document;
use std::io::Write;

/// JSON formatter - outputs documents as a pretty-printed JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    documents: Vec<Document>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, document: &Document) -> Result<()> {
        self.documents.push(document.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_array_with_document_fields() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer);
            formatter
                .format_document(&Document::new("A chunk."))
                .unwrap();
            formatter.finish().unwrap();
        }
        let output = String::from_utf8(buffer).unwrap();
        let parsed: Vec<Document> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].content, "A chunk.");
        assert!(!parsed[0].id.is_empty());
    }
}
