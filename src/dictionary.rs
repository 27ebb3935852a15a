//! Length-bucketed dictionary index.
//!
//! Words are grouped by their length in characters, and each bucket is kept
//! sorted so that both exact membership and "does any word start with this
//! prefix" resolve with a binary search instead of a scan.

use log::debug;

use crate::grid::normalize_word;

/// Split newline-separated word-list text into trimmed, lowercased words.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(normalize_word)
        .collect()
}

/// Immutable index of dictionary words, bucketed by length.
#[derive(Debug, Clone, Default)]
pub struct DictionaryIndex {
    /// `buckets[n]` holds the sorted, distinct words of length `n`.
    buckets: Vec<Vec<String>>,
    min_length: usize,
    len: usize,
}

impl DictionaryIndex {
    /// Build the index, keeping only words of at least `min_length` characters.
    pub fn new<I, S>(words: I, min_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let min_length = min_length.max(1);
        let mut buckets: Vec<Vec<String>> = Vec::new();

        for word in words {
            let word = normalize_word(word.as_ref().trim());
            let length = word.chars().count();
            if length < min_length {
                continue;
            }
            if buckets.len() <= length {
                buckets.resize_with(length + 1, Vec::new);
            }
            buckets[length].push(word);
        }

        let mut len = 0;
        for bucket in &mut buckets {
            bucket.sort_unstable();
            bucket.dedup();
            len += bucket.len();
        }

        debug!(
            "indexed {} words with lengths {}..={}",
            len,
            min_length,
            buckets.len().saturating_sub(1)
        );

        Self {
            buckets,
            min_length,
            len,
        }
    }

    /// Number of distinct indexed words.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Longest indexed word length, or 0 when empty.
    pub fn max_length(&self) -> usize {
        self.buckets.len().saturating_sub(1)
    }

    /// Lengths that have at least one word, ascending.
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets
            .iter()
            .enumerate()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(length, _)| length)
    }

    /// Words of exactly `n` characters, sorted.
    pub fn words_of_length(&self, n: usize) -> &[String] {
        self.buckets.get(n).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_word(&self, s: &str) -> bool {
        self.is_word_of_len(s, s.chars().count())
    }

    /// True iff some indexed word at least as long as `prefix` starts with it.
    ///
    /// Every remaining length is examined: a prefix with no continuation at
    /// the next length may still begin a longer word.
    pub fn has_prefix_candidate(&self, prefix: &str) -> bool {
        self.has_prefix_of_len(prefix, prefix.chars().count())
    }

    /// [`Self::is_word`] with the character count already known.
    pub(crate) fn is_word_of_len(&self, s: &str, length: usize) -> bool {
        self.words_of_length(length)
            .binary_search_by(|w| w.as_str().cmp(s))
            .is_ok()
    }

    /// [`Self::has_prefix_candidate`] with the character count already known.
    pub(crate) fn has_prefix_of_len(&self, prefix: &str, length: usize) -> bool {
        let start = length.max(self.min_length);
        self.buckets.iter().skip(start).any(|bucket| {
            let at = bucket.partition_point(|w| w.as_str() < prefix);
            bucket.get(at).is_some_and(|w| w.starts_with(prefix))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_words_are_not_indexed() {
        let index = DictionaryIndex::new(["cat", "cart", "carts"], 4);
        assert_eq!(index.len(), 2);
        assert!(!index.is_word("cat"));
        assert!(index.is_word("cart"));
    }

    #[test]
    fn prefix_spans_all_longer_lengths() {
        let index = DictionaryIndex::new(["abcdef"], 4);
        for prefix in ["a", "ab", "abc", "abcd", "abcde", "abcdef"] {
            assert!(index.has_prefix_candidate(prefix), "{}", prefix);
        }
        assert!(!index.has_prefix_candidate("abd"));
        assert!(!index.has_prefix_candidate("abcdefg"));
    }
}
