//! Chunk-to-document assembly
//!
//! Wraps each chunk's reconstructed text into a new document, copying the
//! parent's metadata and adding a `_split_id` so ordering survives
//! downstream reordering. Page numbers, when requested, are computed by
//! the caller from the chunk's position in the source text.

use crate::document::Document;
use crate::hasher::IdHashKey;
use crate::splitter::Chunk;
use serde_json::json;

/// Metadata key carrying the chunk's position in the split sequence
pub const SPLIT_ID_KEY: &str = "_split_id";

/// Metadata key carrying the chunk's page number
pub const PAGE_KEY: &str = "page";

/// Builds output documents from chunks
#[derive(Debug, Clone)]
pub struct DocumentAssembler {
    id_hash_keys: Vec<IdHashKey>,
}

impl DocumentAssembler {
    pub fn new(id_hash_keys: Vec<IdHashKey>) -> Self {
        Self { id_hash_keys }
    }

    /// Wrap chunks into documents carrying the parent's metadata
    ///
    /// `pages`, when present, holds the 1-based page number per chunk and
    /// must be as long as `chunks`.
    pub fn assemble(
        &self,
        chunks: &[Chunk<'_>],
        pages: Option<&[usize]>,
        joiner: &str,
        parent: &Document,
    ) -> Vec<Document> {
        chunks
            .iter()
            .enumerate()
            .map(|(split_id, chunk)| {
                let content = chunk.units.join(joiner);
                let mut meta = parent.meta.clone();
                meta.insert(SPLIT_ID_KEY.to_string(), json!(split_id));
                if let Some(page) = pages.and_then(|p| p.get(split_id)) {
                    meta.insert(PAGE_KEY.to_string(), json!(*page));
                }
                Document::with_id_hash_keys(content, meta, &self.id_hash_keys)
            })
            .collect()
    }

    /// Single-document passthrough for unsplit content
    pub fn passthrough(&self, content: String, parent: &Document) -> Document {
        Document::with_id_hash_keys(content, parent.meta.clone(), &self.id_hash_keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn chunk<'a>(units: Vec<&'a str>, start: usize) -> Chunk<'a> {
        Chunk { units, start }
    }

    #[test]
    fn test_meta_propagation_and_split_id() {
        let mut parent = Document::new("irrelevant");
        parent.meta.insert("source".to_string(), json!("report.pdf"));

        let chunks = vec![chunk(vec!["One.", "Two."], 0), chunk(vec!["Three."], 2)];
        let assembler = DocumentAssembler::new(vec![IdHashKey::Content]);
        let docs = assembler.assemble(&chunks, None, " ", &parent);

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].content, "One. Two.");
        assert_eq!(docs[0].meta[SPLIT_ID_KEY], json!(0));
        assert_eq!(docs[1].meta[SPLIT_ID_KEY], json!(1));
        assert_eq!(docs[0].meta["source"], json!("report.pdf"));
        assert_eq!(docs[1].meta["source"], json!("report.pdf"));
        assert!(!docs[0].meta.contains_key(PAGE_KEY));
    }

    #[test]
    fn test_page_numbers_attached_when_given() {
        let parent = Document::new("irrelevant");
        let chunks = vec![chunk(vec!["A."], 0), chunk(vec!["B."], 1)];
        let assembler = DocumentAssembler::new(vec![IdHashKey::Content]);
        let docs = assembler.assemble(&chunks, Some(&[1, 2]), " ", &parent);
        assert_eq!(docs[0].meta[PAGE_KEY], json!(1));
        assert_eq!(docs[1].meta[PAGE_KEY], json!(2));
    }

    #[test]
    fn test_passthrough_keeps_meta_without_split_id() {
        let mut parent = Document::new("raw");
        parent.meta.insert("k".to_string(), json!("v"));
        let assembler = DocumentAssembler::new(vec![IdHashKey::Content]);
        let doc = assembler.passthrough("cleaned".to_string(), &parent);
        assert_eq!(doc.content, "cleaned");
        assert_eq!(doc.meta["k"], json!("v"));
        assert!(!doc.meta.contains_key(SPLIT_ID_KEY));
    }

    #[test]
    fn test_ids_differ_per_chunk_content() {
        let parent = Document::new("irrelevant");
        let chunks = vec![chunk(vec!["Alpha."], 0), chunk(vec!["Beta."], 1)];
        let assembler = DocumentAssembler::new(vec![IdHashKey::Content]);
        let docs = assembler.assemble(&chunks, None, " ", &parent);
        assert_ne!(docs[0].id, docs[1].id);
    }
}
