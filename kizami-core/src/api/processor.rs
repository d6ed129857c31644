//! Main preprocessor implementation

use crate::api::{PreprocessorConfig, Result, SplitBy};
use crate::assembler::DocumentAssembler;
use crate::cleaner::{ContentCleaner, PAGE_BREAK};
use crate::document::Document;
use crate::splitter::{Chunk, UnitSplitter};
use crate::tokenizer::SentenceTokenizer;
use tracing::debug;

/// Joiner between sentence or word units in reconstructed chunk text
const SPACE_JOINER: &str = " ";

/// Joiner between passage units in reconstructed chunk text
const PASSAGE_JOINER: &str = "\n\n";

/// Document preprocessor: clean, split, assemble, hash
///
/// Deterministic and synchronous: the same document and configuration
/// always produce the same output sequence and ids. Batches are processed
/// independently per document.
pub struct Preprocessor {
    config: PreprocessorConfig,
    tokenizer: SentenceTokenizer,
    cleaner: ContentCleaner,
    splitter: UnitSplitter,
    assembler: DocumentAssembler,
}

impl Preprocessor {
    /// Create a preprocessor with default configuration
    pub fn new() -> Self {
        Self::with_config(PreprocessorConfig::default())
            .expect("Default config should always be valid")
    }

    /// Create a preprocessor with custom configuration
    ///
    /// Validation runs before any processing; an invalid configuration is
    /// rejected here and never partially applied.
    pub fn with_config(config: PreprocessorConfig) -> Result<Self> {
        config.validate()?;

        let tokenizer = SentenceTokenizer::new(config.language);
        let cleaner = ContentCleaner::new(
            config.clean_whitespace,
            config.clean_empty_lines,
            config.clean_header_footer,
            config.remove_substrings.clone(),
        );
        let splitter = UnitSplitter::new(config.split_length, config.split_overlap);
        let assembler = DocumentAssembler::new(config.id_hash_keys.clone());

        Ok(Self {
            config,
            tokenizer,
            cleaner,
            splitter,
            assembler,
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &PreprocessorConfig {
        &self.config
    }

    /// Clean and split one document into an ordered sequence of documents
    ///
    /// Splitting modes yield nothing for empty content; `split_by = none`
    /// passes the cleaned document through as-is.
    pub fn process(&self, document: &Document) -> Vec<Document> {
        let cleaned = self.cleaner.clean(&document.content);

        let output = match self.config.split_by {
            SplitBy::None => {
                vec![self.assembler.passthrough(cleaned, document)]
            }
            SplitBy::Sentence => {
                let units: Vec<&str> = self.tokenizer.sentences(&cleaned).collect();
                let chunks = self.splitter.split_units(&units);
                self.assemble(&chunks, &cleaned, SPACE_JOINER, document)
            }
            SplitBy::Passage => {
                let units = split_passages(&cleaned);
                let chunks = self.splitter.split_units(&units);
                self.assemble(&chunks, &cleaned, PASSAGE_JOINER, document)
            }
            SplitBy::Word => {
                if self.config.split_respect_sentence_boundary {
                    let sentences: Vec<&str> = self.tokenizer.sentences(&cleaned).collect();
                    let chunks = self.splitter.split_respecting_sentences(&sentences);
                    self.assemble(&chunks, &cleaned, SPACE_JOINER, document)
                } else {
                    let words: Vec<&str> = cleaned.split_whitespace().collect();
                    let chunks = self.splitter.split_units(&words);
                    self.assemble(&chunks, &cleaned, SPACE_JOINER, document)
                }
            }
        };

        debug!(
            split_by = %self.config.split_by,
            outputs = output.len(),
            "processed document"
        );
        output
    }

    /// Process an ordered sequence of documents into a flat sequence
    pub fn process_batch(&self, documents: &[Document]) -> Vec<Document> {
        documents.iter().flat_map(|doc| self.process(doc)).collect()
    }

    fn assemble(
        &self,
        chunks: &[Chunk<'_>],
        source: &str,
        joiner: &str,
        parent: &Document,
    ) -> Vec<Document> {
        let pages = self
            .config
            .add_page_number
            .then(|| chunk_pages(chunks, source));
        self.assembler
            .assemble(chunks, pages.as_deref(), joiner, parent)
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Blank-line-delimited passages, whitespace-only blocks dropped
fn split_passages(text: &str) -> Vec<&str> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// 1-based page number per chunk, from page breaks preceding its first unit
///
/// Chunk units are subslices of `source`, so the unit's byte offset within
/// the source locates it among the page-break markers.
fn chunk_pages(chunks: &[Chunk<'_>], source: &str) -> Vec<usize> {
    let break_offsets: Vec<usize> = source.match_indices(PAGE_BREAK).map(|(i, _)| i).collect();
    let base = source.as_ptr() as usize;

    chunks
        .iter()
        .map(|chunk| match chunk.units.first() {
            Some(unit) => {
                let offset = unit.as_ptr() as usize - base;
                1 + break_offsets.partition_point(|&b| b < offset)
            }
            None => 1,
        })
        .collect()
}
