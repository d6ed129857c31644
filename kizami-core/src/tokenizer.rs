//! Abbreviation-aware sentence tokenization
//!
//! Splits text on sentence-ending punctuation (`.`, `!`, `?`) followed by
//! whitespace and a capital letter, or by end of text. A period directly
//! after a known abbreviation ("Dr", "etc") never ends a sentence, so
//! "Dr. Smith" stays in one piece. The tokenizer never fails: text without
//! terminators comes back as a single sentence.

use crate::language::{AbbreviationTable, Language};

/// Sentence tokenizer over an immutable abbreviation table
#[derive(Debug, Clone)]
pub struct SentenceTokenizer {
    abbreviations: AbbreviationTable,
}

impl SentenceTokenizer {
    /// Create a tokenizer with the built-in table for `language`
    pub fn new(language: Language) -> Self {
        Self {
            abbreviations: AbbreviationTable::for_language(language),
        }
    }

    /// Create a tokenizer with a custom abbreviation table
    pub fn with_abbreviations(abbreviations: AbbreviationTable) -> Self {
        Self { abbreviations }
    }

    /// Lazy iterator over the sentences of `text`
    ///
    /// Each yielded slice is trimmed of surrounding whitespace. The iterator
    /// is restartable: calling this method again scans from the beginning.
    pub fn sentences<'a>(&'a self, text: &'a str) -> Sentences<'a> {
        Sentences {
            tokenizer: self,
            text,
            pos: 0,
        }
    }
}

impl Default for SentenceTokenizer {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

/// Iterator over sentence slices of a text
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    tokenizer: &'a SentenceTokenizer,
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while self.pos < self.text.len() {
            let end = self.find_boundary(self.pos);
            let sentence = self.text[self.pos..end].trim();
            self.pos = end;
            if !sentence.is_empty() {
                return Some(sentence);
            }
        }
        None
    }
}

impl<'a> Sentences<'a> {
    /// Byte offset just past the next sentence boundary at or after `start`
    fn find_boundary(&self, start: usize) -> usize {
        let rest = &self.text[start..];

        for (i, ch) in rest.char_indices() {
            if !matches!(ch, '.' | '!' | '?') {
                continue;
            }

            // Consume the whole terminator run ("...", "?!") as one unit.
            let mut end_rel = i + ch.len_utf8();
            let mut run_len = 1usize;
            for next in rest[end_rel..].chars() {
                if matches!(next, '.' | '!' | '?') {
                    end_rel += next.len_utf8();
                    run_len += 1;
                } else {
                    break;
                }
            }

            let after = &rest[end_rel..];
            if after.trim().is_empty() {
                // Terminator at end of text always closes the sentence.
                return self.text.len();
            }

            if !followed_by_capital(after) {
                continue;
            }

            if ch == '.' && run_len == 1 && self.is_abbreviation(start + i) {
                continue;
            }

            return start + end_rel;
        }

        self.text.len()
    }

    /// Whether the period at byte offset `period_pos` follows a known abbreviation
    fn is_abbreviation(&self, period_pos: usize) -> bool {
        let before = &self.text[..period_pos];
        let token = match before.rfind(char::is_whitespace) {
            Some(i) => before[i..].trim_start(),
            None => before,
        };
        let token = token.trim_start_matches(|c: char| !c.is_alphanumeric());
        self.tokenizer.abbreviations.contains(token)
    }
}

/// Whitespace then an uppercase letter
fn followed_by_capital(after: &str) -> bool {
    let mut chars = after.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => {}
        _ => return false,
    }
    chars.find(|c| !c.is_whitespace()).is_some_and(|c| c.is_uppercase())
}
