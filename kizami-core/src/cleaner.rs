//! Content cleaning: whitespace, empty lines, page furniture, substrings
//!
//! Header/footer removal works on page-break markers (`\u{000C}`, as
//! emitted by PDF text extraction). A line recurring as the first or last
//! non-empty line across a strict majority of pages is stripped from every
//! page containing it. Plain text without page markers skips the step.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

/// Page delimiter produced by paginated converters
pub const PAGE_BREAK: char = '\u{000C}';

static EMPTY_LINE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("static regex must compile"));

/// Header/footer candidates detected across pages
///
/// Lines are stored in normalized form (see [`normalize_line`]) so that
/// near-identical repeats such as numbered footers match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageFurniture {
    pub headers: Vec<String>,
    pub footers: Vec<String>,
}

impl PageFurniture {
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.footers.is_empty()
    }
}

/// Strategy for classifying recurring header/footer lines across pages
pub trait HeaderFooterClassifier: Send + Sync {
    fn classify(&self, pages: &[&str]) -> PageFurniture;
}

/// Majority-vote classification of first/last lines
///
/// A normalized candidate line is classified when it occurs on strictly
/// more than half of the pages.
#[derive(Debug, Clone, Default)]
pub struct MajorityVoteClassifier;

impl HeaderFooterClassifier for MajorityVoteClassifier {
    fn classify(&self, pages: &[&str]) -> PageFurniture {
        if pages.len() < 2 {
            return PageFurniture::default();
        }

        let mut first_lines: HashMap<String, usize> = HashMap::new();
        let mut last_lines: HashMap<String, usize> = HashMap::new();

        for page in pages {
            if let Some(line) = first_non_empty_line(page) {
                *first_lines.entry(normalize_line(line)).or_default() += 1;
            }
            if let Some(line) = last_non_empty_line(page) {
                *last_lines.entry(normalize_line(line)).or_default() += 1;
            }
        }

        let majority = |counts: HashMap<String, usize>| -> Vec<String> {
            counts
                .into_iter()
                .filter(|(_, count)| count * 2 > pages.len())
                .map(|(line, _)| line)
                .collect()
        };

        PageFurniture {
            headers: majority(first_lines),
            footers: majority(last_lines),
        }
    }
}

/// Content cleaner applying the configured noise-removal steps in order:
/// header/footer stripping, whitespace trimming, empty-line collapsing,
/// literal substring removal.
pub struct ContentCleaner {
    clean_whitespace: bool,
    clean_empty_lines: bool,
    clean_header_footer: bool,
    remove_substrings: Vec<String>,
    classifier: Box<dyn HeaderFooterClassifier>,
}

impl ContentCleaner {
    pub fn new(
        clean_whitespace: bool,
        clean_empty_lines: bool,
        clean_header_footer: bool,
        remove_substrings: Vec<String>,
    ) -> Self {
        Self {
            clean_whitespace,
            clean_empty_lines,
            clean_header_footer,
            remove_substrings,
            classifier: Box::new(MajorityVoteClassifier),
        }
    }

    /// Replace the header/footer classification strategy
    pub fn with_classifier(mut self, classifier: Box<dyn HeaderFooterClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Apply all configured cleaning steps to `content`
    pub fn clean(&self, content: &str) -> String {
        let mut text = content.to_string();

        if self.clean_header_footer {
            text = self.strip_header_footer(&text);
        }

        if self.clean_whitespace {
            text = trim_line_whitespace(&text);
        }

        if self.clean_empty_lines {
            text = EMPTY_LINE_RUNS.replace_all(&text, "\n\n").into_owned();
        }

        for substring in &self.remove_substrings {
            if !substring.is_empty() {
                text = text.replace(substring.as_str(), "");
            }
        }

        text
    }

    fn strip_header_footer(&self, text: &str) -> String {
        if !text.contains(PAGE_BREAK) {
            return text.to_string();
        }

        let pages: Vec<&str> = text.split(PAGE_BREAK).collect();
        let furniture = self.classifier.classify(&pages);
        if furniture.is_empty() {
            return text.to_string();
        }

        debug!(
            headers = furniture.headers.len(),
            footers = furniture.footers.len(),
            pages = pages.len(),
            "stripping page furniture"
        );

        pages
            .iter()
            .map(|page| strip_page(page, &furniture))
            .collect::<Vec<_>>()
            .join(&PAGE_BREAK.to_string())
    }
}

impl std::fmt::Debug for ContentCleaner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentCleaner")
            .field("clean_whitespace", &self.clean_whitespace)
            .field("clean_empty_lines", &self.clean_empty_lines)
            .field("clean_header_footer", &self.clean_header_footer)
            .field("remove_substrings", &self.remove_substrings)
            .finish_non_exhaustive()
    }
}

/// Trim spaces and tabs around every line, leaving page breaks in place
fn trim_line_whitespace(text: &str) -> String {
    let trimmed: Vec<&str> = text
        .split('\n')
        .map(|line| line.trim_matches([' ', '\t']))
        .collect();
    trimmed.join("\n")
}

/// Normalized form for near-identical matching: digit runs collapse so
/// "Page 3 of 9" and "Page 7 of 9" compare equal.
fn normalize_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut in_digits = false;
    for c in line.trim().chars() {
        if c.is_ascii_digit() {
            if !in_digits {
                out.push('#');
                in_digits = true;
            }
        } else {
            in_digits = false;
            out.push(c);
        }
    }
    out
}

fn first_non_empty_line(page: &str) -> Option<&str> {
    page.lines().find(|line| !line.trim().is_empty())
}

fn last_non_empty_line(page: &str) -> Option<&str> {
    page.lines().rev().find(|line| !line.trim().is_empty())
}

/// Remove classified header/footer lines from one page
fn strip_page(page: &str, furniture: &PageFurniture) -> String {
    let lines: Vec<&str> = page.lines().collect();
    let header_idx = lines
        .iter()
        .position(|line| !line.trim().is_empty())
        .filter(|&i| furniture.headers.contains(&normalize_line(lines[i])));
    let footer_idx = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .filter(|&i| furniture.footers.contains(&normalize_line(lines[i])));

    let kept: Vec<&str> = lines
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != header_idx && Some(*i) != footer_idx)
        .map(|(_, line)| *line)
        .collect();
    kept.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passthrough() -> ContentCleaner {
        ContentCleaner::new(false, false, false, Vec::new())
    }

    #[test]
    fn test_disabled_cleaner_is_identity() {
        let text = "  messy \n\n\n\n text ";
        assert_eq!(passthrough().clean(text), text);
    }

    #[test]
    fn test_whitespace_trimming() {
        let cleaner = ContentCleaner::new(true, false, false, Vec::new());
        assert_eq!(cleaner.clean("  line one \t\n\tline two  "), "line one\nline two");
    }

    #[test]
    fn test_empty_line_collapsing() {
        let cleaner = ContentCleaner::new(false, true, false, Vec::new());
        assert_eq!(cleaner.clean("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(cleaner.clean("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_substring_removal() {
        let cleaner = ContentCleaner::new(
            false,
            false,
            false,
            vec!["This is a header.".to_string(), "wiki".to_string(), "🪲".to_string()],
        );
        let text = "This is a header. Some additional text. wiki. Some emoji ✨ 🪲 done.";
        let cleaned = cleaner.clean(text);
        assert!(!cleaned.contains("This is a header."));
        assert!(!cleaned.contains("wiki"));
        assert!(!cleaned.contains("🪲"));
        assert!(cleaned.contains("✨"));
        assert!(cleaned.contains("Some additional text."));
    }

    #[test]
    fn test_substring_removal_is_idempotent() {
        let cleaner =
            ContentCleaner::new(false, false, false, vec!["noise".to_string()]);
        let once = cleaner.clean("some noise here and noise there");
        let twice = cleaner.clean(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_header_footer_stripped_across_pages() {
        let text = "ACME Report\nbody one\nPage 1 of 3\u{000C}\
                    ACME Report\nbody two\nPage 2 of 3\u{000C}\
                    ACME Report\nbody three\nPage 3 of 3";
        let cleaner = ContentCleaner::new(false, false, true, Vec::new());
        let cleaned = cleaner.clean(text);
        assert!(!cleaned.contains("ACME Report"));
        assert!(!cleaned.contains("Page 1 of 3"));
        assert!(!cleaned.contains("Page 3 of 3"));
        assert!(cleaned.contains("body one"));
        assert!(cleaned.contains("body three"));
    }

    #[test]
    fn test_minority_line_survives() {
        let text = "Unique header\nbody one\u{000C}body two\u{000C}body three";
        let cleaner = ContentCleaner::new(false, false, true, Vec::new());
        let cleaned = cleaner.clean(text);
        assert!(cleaned.contains("Unique header"));
    }

    #[test]
    fn test_no_page_breaks_disables_header_footer() {
        let text = "Repeated line\nRepeated line\nRepeated line";
        let cleaner = ContentCleaner::new(false, false, true, Vec::new());
        assert_eq!(cleaner.clean(text), text);
    }

    #[test]
    fn test_custom_classifier() {
        struct StripEverything;
        impl HeaderFooterClassifier for StripEverything {
            fn classify(&self, pages: &[&str]) -> PageFurniture {
                PageFurniture {
                    headers: pages
                        .iter()
                        .filter_map(|p| first_non_empty_line(p))
                        .map(normalize_line)
                        .collect(),
                    footers: Vec::new(),
                }
            }
        }

        let text = "top a\nbody a\u{000C}top b\nbody b";
        let cleaner = ContentCleaner::new(false, false, true, Vec::new())
            .with_classifier(Box::new(StripEverything));
        let cleaned = cleaner.clean(text);
        assert!(!cleaned.contains("top a"));
        assert!(!cleaned.contains("top b"));
        assert!(cleaned.contains("body a"));
        assert!(cleaned.contains("body b"));
    }

    #[test]
    fn test_normalize_collapses_digit_runs() {
        assert_eq!(normalize_line("Page 12 of 304"), "Page # of #");
        assert_eq!(normalize_line("  spaced  "), "spaced");
    }
}
