//! Aggregation of discoveries into the final word mapping.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::grid::Position;

/// An ordered walk of grid cells.
pub type WordPath = Vec<Position>;

/// Discoveries from one or more search roots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Found {
    /// Every word with all of its distinct paths.
    Paths(BTreeMap<String, Vec<WordPath>>),
    /// Distinct words only.
    Words(BTreeSet<String>),
}

impl Found {
    pub fn paths() -> Self {
        Found::Paths(BTreeMap::new())
    }

    pub fn words() -> Self {
        Found::Words(BTreeSet::new())
    }

    /// Record one discovery. The path is dropped in word-only mode.
    pub fn record(&mut self, word: &str, path: impl FnOnce() -> WordPath) {
        match self {
            Found::Paths(map) => match map.get_mut(word) {
                Some(paths) => paths.push(path()),
                None => {
                    map.insert(word.to_string(), vec![path()]);
                }
            },
            Found::Words(set) => {
                if !set.contains(word) {
                    set.insert(word.to_string());
                }
            }
        }
    }

    /// Union of words; path lists are concatenated, `self` first.
    ///
    /// Merging a word set with a path map yields a word set: a word never
    /// ends up in a path map without at least one path.
    pub fn merge(self, other: Found) -> Found {
        match (self, other) {
            (Found::Paths(mut into), Found::Paths(from)) => {
                for (word, mut paths) in from {
                    into.entry(word).or_default().append(&mut paths);
                }
                Found::Paths(into)
            }
            (Found::Words(mut into), Found::Words(from)) => {
                into.extend(from);
                Found::Words(into)
            }
            (left, right) => {
                let mut words = left.into_words();
                words.extend(right.into_words());
                Found::Words(words)
            }
        }
    }

    /// Drop any path geometry, keeping the distinct words.
    pub fn into_words(self) -> BTreeSet<String> {
        match self {
            Found::Paths(map) => map.into_keys().collect(),
            Found::Words(set) => set,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Found::Paths(map) => map.len(),
            Found::Words(set) => set.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Outcome of a solve call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    found: Found,
    complete: bool,
}

impl Solution {
    pub fn new(found: Found, complete: bool) -> Self {
        Self { found, complete }
    }

    pub fn found(&self) -> &Found {
        &self.found
    }

    pub fn into_found(self) -> Found {
        self.found
    }

    /// `false` when the search was cancelled before exhausting every root.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Found words in lexicographic order.
    pub fn words(&self) -> Vec<&str> {
        match &self.found {
            Found::Paths(map) => map.keys().map(String::as_str).collect(),
            Found::Words(set) => set.iter().map(String::as_str).collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        match &self.found {
            Found::Paths(map) => map.contains_key(word),
            Found::Words(set) => set.contains(word),
        }
    }

    /// Paths spelling `word`. Always empty in word-only mode.
    pub fn paths(&self, word: &str) -> &[WordPath] {
        match &self.found {
            Found::Paths(map) => map.get(word).map(Vec::as_slice).unwrap_or(&[]),
            Found::Words(_) => &[],
        }
    }

    pub fn word_count(&self) -> usize {
        self.found.len()
    }

    /// Total number of recorded paths across all words.
    pub fn path_count(&self) -> usize {
        match &self.found {
            Found::Paths(map) => map.values().map(Vec::len).sum(),
            Found::Words(_) => 0,
        }
    }

    /// (word length, number of words) pairs for lengths that occur, ascending.
    pub fn length_distribution(&self) -> Vec<(usize, usize)> {
        let lengths: Vec<usize> = self.words().iter().map(|w| w.chars().count()).collect();
        let max_length = lengths.iter().copied().max().unwrap_or(0);
        let mut distribution = vec![0usize; max_length + 1];

        for length in lengths {
            distribution[length] += 1;
        }

        distribution
            .into_iter()
            .enumerate()
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    /// Serialize the found mapping (or word set) as JSON.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(&self.found)
        } else {
            serde_json::to_string(&self.found)
        }
    }
}
