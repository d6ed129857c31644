//! Configuration API for document preprocessing

use crate::api::Error;
use crate::hasher::IdHashKey;
use crate::language::Language;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Default configuration constants
pub mod defaults {
    /// Default unit budget per chunk
    pub const SPLIT_LENGTH: usize = 200;
}

/// Unit of splitting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitBy {
    /// Whitespace-delimited words
    #[default]
    Word,
    /// Tokenizer-detected sentences
    Sentence,
    /// Blank-line-delimited passages
    Passage,
    /// No splitting; clean and pass through
    None,
}

impl FromStr for SplitBy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "word" => Ok(SplitBy::Word),
            "sentence" => Ok(SplitBy::Sentence),
            "passage" => Ok(SplitBy::Passage),
            "none" => Ok(SplitBy::None),
            _ => Err(Error::Configuration(format!(
                "unknown split_by value: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for SplitBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SplitBy::Word => "word",
            SplitBy::Sentence => "sentence",
            SplitBy::Passage => "passage",
            SplitBy::None => "none",
        };
        f.write_str(name)
    }
}

/// Preprocessing configuration
///
/// Built through [`ConfigBuilder`]; validation runs once at build time, so
/// a constructed configuration is always internally consistent.
#[derive(Debug, Clone)]
pub struct PreprocessorConfig {
    pub(crate) split_by: SplitBy,
    pub(crate) split_length: usize,
    pub(crate) split_overlap: usize,
    pub(crate) split_respect_sentence_boundary: bool,
    pub(crate) clean_whitespace: bool,
    pub(crate) clean_empty_lines: bool,
    pub(crate) clean_header_footer: bool,
    pub(crate) remove_substrings: Vec<String>,
    pub(crate) language: Language,
    pub(crate) id_hash_keys: Vec<IdHashKey>,
    pub(crate) add_page_number: bool,
}

impl Default for PreprocessorConfig {
    fn default() -> Self {
        Self {
            split_by: SplitBy::Word,
            split_length: defaults::SPLIT_LENGTH,
            split_overlap: 0,
            split_respect_sentence_boundary: true,
            clean_whitespace: true,
            clean_empty_lines: true,
            clean_header_footer: false,
            remove_substrings: Vec::new(),
            language: Language::default(),
            id_hash_keys: vec![IdHashKey::Content],
            add_page_number: false,
        }
    }
}

impl PreprocessorConfig {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.split_length == 0 {
            return Err(Error::Configuration(
                "split_length must be greater than 0".into(),
            ));
        }

        if self.split_by != SplitBy::None && self.split_overlap >= self.split_length {
            return Err(Error::Configuration(format!(
                "split_overlap ({}) must be smaller than split_length ({})",
                self.split_overlap, self.split_length
            )));
        }

        if self.id_hash_keys.is_empty() {
            return Err(Error::Configuration(
                "id_hash_keys must name at least one field".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for [`PreprocessorConfig`]
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: PreprocessorConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the splitting unit
    pub fn split_by(mut self, split_by: SplitBy) -> Self {
        self.config.split_by = split_by;
        self
    }

    /// Set the unit budget per chunk
    pub fn split_length(mut self, length: usize) -> Self {
        self.config.split_length = length;
        self
    }

    /// Set the unit count repeated at chunk boundaries
    pub fn split_overlap(mut self, overlap: usize) -> Self {
        self.config.split_overlap = overlap;
        self
    }

    /// Forbid closing a word chunk mid-sentence
    pub fn split_respect_sentence_boundary(mut self, respect: bool) -> Self {
        self.config.split_respect_sentence_boundary = respect;
        self
    }

    /// Trim spaces and tabs around every line
    pub fn clean_whitespace(mut self, enabled: bool) -> Self {
        self.config.clean_whitespace = enabled;
        self
    }

    /// Collapse runs of three or more newlines
    pub fn clean_empty_lines(mut self, enabled: bool) -> Self {
        self.config.clean_empty_lines = enabled;
        self
    }

    /// Strip recurring page headers and footers
    pub fn clean_header_footer(mut self, enabled: bool) -> Self {
        self.config.clean_header_footer = enabled;
        self
    }

    /// Remove every literal occurrence of the given strings
    pub fn remove_substrings<I, S>(mut self, substrings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.remove_substrings = substrings.into_iter().map(Into::into).collect();
        self
    }

    /// Set the tokenizer language
    pub fn language(mut self, language: Language) -> Self {
        self.config.language = language;
        self
    }

    /// Set the fields covered by document ids
    pub fn id_hash_keys<I>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = IdHashKey>,
    {
        self.config.id_hash_keys = keys.into_iter().collect();
        self
    }

    /// Record a 1-based `page` number on each output document
    pub fn add_page_number(mut self, enabled: bool) -> Self {
        self.config.add_page_number = enabled;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<PreprocessorConfig, Error> {
        self.config.validate()?;
        Ok(self.config)
    }
}
