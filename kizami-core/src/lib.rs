//! Document chunking and cleaning for indexing pipelines
//!
//! This crate partitions long text documents into bounded-size chunks by
//! sentence, word, or passage boundaries, with optional overlap between
//! consecutive chunks and a policy that refuses to cut mid-sentence. It
//! also removes recurring page headers/footers and configured substrings,
//! and derives stable document identifiers from a configurable field set.
//!
//! # Architecture
//!
//! - **language / tokenizer**: abbreviation-aware sentence tokenization
//! - **splitter**: greedy chunk grouping with overlap bookkeeping
//! - **cleaner**: page furniture and substring removal
//! - **assembler / hasher**: document creation and identity
//! - **api**: validated configuration and the [`Preprocessor`] facade
//!
//! # Example
//!
//! ```rust
//! use kizami_core::{Document, Preprocessor, PreprocessorConfig, SplitBy};
//!
//! let config = PreprocessorConfig::builder()
//!     .split_by(SplitBy::Sentence)
//!     .split_length(1)
//!     .build()
//!     .unwrap();
//! let preprocessor = Preprocessor::with_config(config).unwrap();
//!
//! let document = Document::new("Hello world. This is a test.");
//! let chunks = preprocessor.process(&document);
//! assert_eq!(chunks.len(), 2);
//! ```

pub mod api;
pub mod assembler;
pub mod cleaner;
pub mod document;
pub mod hasher;
pub mod language;
pub mod splitter;
pub mod tokenizer;

pub use api::{ConfigBuilder, Error, Preprocessor, PreprocessorConfig, Result, SplitBy};
pub use document::Document;
pub use hasher::IdHashKey;
pub use language::{AbbreviationTable, Language};
pub use tokenizer::SentenceTokenizer;
