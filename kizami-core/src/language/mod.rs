//! Language resources for sentence tokenization
//!
//! Abbreviation tables are immutable resources built once per language and
//! passed explicitly into the tokenizer, so tests across languages never
//! share hidden state.

mod abbreviations;

use crate::api::Error;
use std::collections::HashSet;
use std::str::FromStr;

/// Supported tokenizer languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// English abbreviation rules
    #[default]
    English,
    /// German abbreviation rules
    German,
    /// French abbreviation rules
    French,
}

impl Language {
    /// ISO 639-1 code for this language
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
            Language::French => "fr",
        }
    }

    /// All built-in languages
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::German, Language::French]
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "de" | "german" => Ok(Language::German),
            "fr" | "french" => Ok(Language::French),
            _ => Err(Error::InvalidLanguage(s.to_string())),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Case-insensitive abbreviation lookup table
///
/// A period directly after a listed token ("Dr", "etc", "z.B") does not
/// terminate a sentence. Entries are stored lowercased; multi-dot tokens
/// keep their interior periods.
#[derive(Debug, Clone)]
pub struct AbbreviationTable {
    entries: HashSet<String>,
}

impl AbbreviationTable {
    /// Build the table for a built-in language
    pub fn for_language(language: Language) -> Self {
        let list = match language {
            Language::English => abbreviations::ENGLISH,
            Language::German => abbreviations::GERMAN,
            Language::French => abbreviations::FRENCH,
        };
        Self::from_entries(list.iter().copied())
    }

    /// Build a custom table from arbitrary entries
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|e| e.as_ref().trim_end_matches('.').to_lowercase())
                .collect(),
        }
    }

    /// Whether `token` (without its trailing period) is a known abbreviation
    pub fn contains(&self, token: &str) -> bool {
        if token.is_empty() {
            return false;
        }
        self.entries.contains(&token.to_lowercase())
    }

    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
