//! Greedy unit splitting with overlap
//!
//! Chunks are contiguous runs of units (words, sentences, or passages).
//! Two strategies exist: stepped windows over a flat unit sequence, and a
//! sentence-boundary-respecting accumulator for word budgets. Overlap is
//! expressed in units for windows and in words for the boundary-respecting
//! mode, where it is re-expressed as trailing whole sentences.

use tracing::debug;

/// A contiguous run of units destined for one output document
///
/// `start` is the index of the chunk's first unit in the full unit
/// sequence, overlap-carried units included.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk<'a> {
    pub units: Vec<&'a str>,
    pub start: usize,
}

/// Splits unit sequences into bounded chunks
///
/// `length` and `overlap` are validated by the configuration layer before
/// a splitter is built; `overlap < length` is assumed here.
#[derive(Debug, Clone)]
pub struct UnitSplitter {
    length: usize,
    overlap: usize,
}

impl UnitSplitter {
    pub fn new(length: usize, overlap: usize) -> Self {
        debug_assert!(length > 0 && overlap < length);
        Self { length, overlap }
    }

    /// Stepped windows of `length` units with `overlap` units repeated
    ///
    /// The last window absorbs the tail; iteration stops once a window
    /// reaches end-of-input, so no overlap-only trailing chunk is emitted.
    pub fn split_units<'a>(&self, units: &[&'a str]) -> Vec<Chunk<'a>> {
        if units.is_empty() {
            return Vec::new();
        }

        let step = self.length - self.overlap;
        let mut chunks = Vec::new();
        let mut start = 0;

        loop {
            let end = (start + self.length).min(units.len());
            chunks.push(Chunk {
                units: units[start..end].to_vec(),
                start,
            });
            if end == units.len() {
                break;
            }
            start += step;
        }

        debug!(chunks = chunks.len(), units = units.len(), "windowed split");
        chunks
    }

    /// Accumulate whole sentences until the word budget would overflow
    ///
    /// A chunk closes at the end of the nearest fully included sentence, so
    /// cuts may fall short of `length` words but never exceed it — except
    /// when a single sentence alone is longer than the budget, in which
    /// case that sentence becomes its own oversized chunk. Overlap is a
    /// word budget satisfied by trailing whole sentences of the closed
    /// chunk, always strictly fewer sentences than the chunk holds.
    pub fn split_respecting_sentences<'a>(&self, sentences: &[&'a str]) -> Vec<Chunk<'a>> {
        let mut chunks: Vec<Chunk<'a>> = Vec::new();
        let mut current: Vec<&'a str> = Vec::new();
        let mut current_start = 0;
        let mut word_count = 0;

        for (idx, sentence) in sentences.iter().enumerate() {
            let sentence_words = count_words(sentence);

            if sentence_words > self.length {
                // The sentence cannot be honored within the budget; emit it
                // verbatim as its own chunk. No overlap is carried out of it.
                if !current.is_empty() {
                    chunks.push(Chunk {
                        units: std::mem::take(&mut current),
                        start: current_start,
                    });
                }
                debug!(words = sentence_words, budget = self.length, "oversized sentence");
                chunks.push(Chunk {
                    units: vec![sentence],
                    start: idx,
                });
                word_count = 0;
                current_start = idx + 1;
                continue;
            }

            if word_count + sentence_words > self.length && !current.is_empty() {
                let closed = Chunk {
                    units: std::mem::take(&mut current),
                    start: current_start,
                };
                let (seed, seed_words) = self.overlap_tail(&closed.units);
                current_start = idx - seed.len();
                current = seed;
                word_count = seed_words;
                chunks.push(closed);

                if word_count + sentence_words > self.length {
                    // Overlap alone would blow the budget; start clean.
                    current.clear();
                    word_count = 0;
                    current_start = idx;
                }
            }

            if current.is_empty() {
                current_start = idx;
            }
            current.push(sentence);
            word_count += sentence_words;
        }

        if !current.is_empty() {
            chunks.push(Chunk {
                units: current,
                start: current_start,
            });
        }

        debug!(chunks = chunks.len(), sentences = sentences.len(), "boundary-respecting split");
        chunks
    }

    /// Trailing sentences of `units` worth up to the overlap word budget
    fn overlap_tail<'a>(&self, units: &[&'a str]) -> (Vec<&'a str>, usize) {
        let mut tail: Vec<&'a str> = Vec::new();
        let mut words = 0;

        if self.overlap == 0 {
            return (tail, 0);
        }

        for sentence in units.iter().rev() {
            if words >= self.overlap || tail.len() + 1 >= units.len() {
                break;
            }
            tail.push(sentence);
            words += count_words(sentence);
        }

        tail.reverse();
        (tail, words)
    }
}

/// Whitespace-delimited word count
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(chunk: &Chunk) -> String {
        chunk.units.join(" ")
    }

    #[test]
    fn test_window_exact_multiple() {
        let units: Vec<&str> = vec!["a", "b", "c", "d"];
        let splitter = UnitSplitter::new(2, 0);
        let chunks = splitter.split_units(&units);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].units, vec!["a", "b"]);
        assert_eq!(chunks[1].units, vec!["c", "d"]);
    }

    #[test]
    fn test_window_partial_tail() {
        let units: Vec<&str> = (0..15).map(|_| "s").collect();
        let splitter = UnitSplitter::new(10, 0);
        let chunks = splitter.split_units(&units);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].units.len(), 10);
        assert_eq!(chunks[1].units.len(), 5);
    }

    #[test]
    fn test_window_length_covers_everything() {
        let units: Vec<&str> = vec!["a", "b", "c"];
        let splitter = UnitSplitter::new(10, 0);
        let chunks = splitter.split_units(&units);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].units.len(), 3);
    }

    #[test]
    fn test_window_with_overlap() {
        let units: Vec<&str> = vec!["a", "b", "c", "d", "e"];
        let splitter = UnitSplitter::new(3, 1);
        let chunks = splitter.split_units(&units);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].units, vec!["a", "b", "c"]);
        assert_eq!(chunks[1].units, vec!["c", "d", "e"]);
        assert_eq!(chunks[1].start, 2);
    }

    #[test]
    fn test_window_no_overlap_only_tail() {
        // 4 units, length 3, overlap 2: second window reaches the end, so
        // iteration stops without a window made purely of repeated units.
        let units: Vec<&str> = vec!["a", "b", "c", "d"];
        let splitter = UnitSplitter::new(3, 2);
        let chunks = splitter.split_units(&units);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1].units, vec!["b", "c", "d"]);
    }

    #[test]
    fn test_empty_units() {
        let splitter = UnitSplitter::new(3, 0);
        assert!(splitter.split_units(&[]).is_empty());
        assert!(splitter.split_respecting_sentences(&[]).is_empty());
    }

    #[test]
    fn test_respect_closes_before_budget() {
        // Sentences of 7 words each; budget of 15 fits two (14 words).
        let sentence = "one two three four five six seven";
        let sentences = vec![sentence; 5];
        let splitter = UnitSplitter::new(15, 0);
        let chunks = splitter.split_respecting_sentences(&sentences);
        assert_eq!(chunks.len(), 3);
        assert_eq!(count_words(&texts(&chunks[0])), 14);
        assert_eq!(count_words(&texts(&chunks[1])), 14);
        assert_eq!(count_words(&texts(&chunks[2])), 7);
    }

    #[test]
    fn test_respect_oversized_sentence_emitted_alone() {
        let short = "a b c";
        let long = "w1 w2 w3 w4 w5 w6 w7 w8 w9 w10";
        let sentences = vec![short, long, short];
        let splitter = UnitSplitter::new(5, 0);
        let chunks = splitter.split_respecting_sentences(&sentences);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].units, vec![short]);
        assert_eq!(chunks[1].units, vec![long]);
        assert_eq!(chunks[2].units, vec![short]);
    }

    #[test]
    fn test_respect_every_sentence_over_budget() {
        let sentence = "one two three four five six seven";
        let sentences = vec![sentence; 15];
        let splitter = UnitSplitter::new(5, 0);
        let chunks = splitter.split_respecting_sentences(&sentences);
        assert_eq!(chunks.len(), 15);
        for chunk in &chunks {
            assert_eq!(chunk.units.len(), 1);
        }
    }

    #[test]
    fn test_respect_with_word_overlap() {
        // 14 seven-word sentences plus a fifteen-word one; budget 40 with
        // overlap 10 closes at 35 words and carries two sentences (14 words)
        // into each following chunk.
        let seven = "w w w w w w w";
        let fifteen = "w w w w w w w w w w w w w w w";
        let mut sentences = vec![seven; 14];
        sentences.push(fifteen);
        let splitter = UnitSplitter::new(40, 10);
        let chunks = splitter.split_respecting_sentences(&sentences);
        assert_eq!(chunks.len(), 5);
        assert_eq!(chunks[0].units.len(), 5);
        // Overlap carried: chunk 1 starts two sentences before chunk 0 ended.
        assert_eq!(chunks[1].start, 3);
    }

    #[test]
    fn test_overlap_never_consumes_whole_chunk() {
        let sentence = "a b";
        let sentences = vec![sentence; 4];
        // Overlap budget larger than any single chunk's word count.
        let splitter = UnitSplitter::new(3, 2);
        let chunks = splitter.split_respecting_sentences(&sentences);
        for window in chunks.windows(2) {
            assert!(
                window[1].start > window[0].start,
                "chunks must make forward progress"
            );
        }
    }

    #[test]
    fn test_reconstruction_without_overlap() {
        let sentences = vec!["One two.", "Three four.", "Five six.", "Seven."];
        let splitter = UnitSplitter::new(3, 0);
        let chunks = splitter.split_respecting_sentences(&sentences);
        let rebuilt: Vec<&str> = chunks.iter().flat_map(|c| c.units.iter().copied()).collect();
        assert_eq!(rebuilt, sentences);
    }
}
