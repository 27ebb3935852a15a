//! Pruned backtracking search for words spelled by grid paths.
//!
//! Every non-blank cell roots an independent exploration. A branch extends its
//! path one unvisited neighbor at a time, records the prefix whenever it is a
//! dictionary word, and is abandoned as soon as no indexed word of any
//! remaining length starts with it. Roots only read the shared graph and
//! dictionary, so they run in parallel and their results are merged in root
//! order.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use log::{debug, trace, warn};
use rayon::prelude::*;

use crate::dictionary::DictionaryIndex;
use crate::error::{Result, SolveError};
use crate::grid::AdjacencyGraph;
use crate::results::{Found, Solution};
use crate::MIN_WORD_LENGTH;

/// What the search keeps for each discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Words together with every distinct path spelling them.
    #[default]
    Paths,
    /// Distinct words only.
    WordsOnly,
}

/// Shared flag for aborting a running search.
///
/// Cloning yields a handle to the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Solver configuration.
#[derive(Debug, Clone)]
pub struct SolveOptions {
    /// Shortest word length that is reported.
    pub min_length: usize,
    pub mode: OutputMode,
    /// Worker count for a dedicated pool; `None` uses the global rayon pool.
    pub threads: Option<usize>,
    pub cancel: Option<CancelToken>,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            min_length: MIN_WORD_LENGTH,
            mode: OutputMode::Paths,
            threads: None,
            cancel: None,
        }
    }
}

impl SolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn words_only(self) -> Self {
        self.with_mode(OutputMode::WordsOnly)
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_length == 0 {
            return Err(SolveError::InvalidOptions("min_length must be at least 1".to_string()));
        }
        if self.threads == Some(0) {
            return Err(SolveError::InvalidOptions("threads must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Fixed-width bitset of visited cell indices.
#[derive(Debug, Clone)]
struct CellSet {
    bits: Vec<u64>,
}

impl CellSet {
    fn with_capacity(cells: usize) -> Self {
        Self {
            bits: vec![0; cells.div_ceil(64)],
        }
    }

    fn insert(&mut self, index: usize) {
        self.bits[index / 64] |= 1 << (index % 64);
    }

    fn remove(&mut self, index: usize) {
        self.bits[index / 64] &= !(1 << (index % 64));
    }

    fn contains(&self, index: usize) -> bool {
        self.bits[index / 64] & (1 << (index % 64)) != 0
    }
}

/// State of one exploration: the walk so far, its cells, and what it spells.
struct Branch {
    path: Vec<usize>,
    visited: CellSet,
    prefix: String,
}

/// The path-search engine over a fixed grid and dictionary.
#[derive(Debug, Clone)]
pub struct Solver {
    graph: AdjacencyGraph,
    dictionary: DictionaryIndex,
    options: SolveOptions,
}

impl Solver {
    /// Fails if the options are invalid or the dictionary was indexed with a
    /// longer minimum word length than the options ask for.
    pub fn new(graph: AdjacencyGraph, dictionary: DictionaryIndex, options: SolveOptions) -> Result<Self> {
        options.validate()?;
        if dictionary.min_length() > options.min_length {
            return Err(SolveError::InvalidOptions(format!(
                "min_length {} is below the dictionary's indexed minimum of {}",
                options.min_length,
                dictionary.min_length()
            )));
        }
        Ok(Self {
            graph,
            dictionary,
            options,
        })
    }

    pub fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    pub fn dictionary(&self) -> &DictionaryIndex {
        &self.dictionary
    }

    pub fn options(&self) -> &SolveOptions {
        &self.options
    }

    /// Run the search from every root and merge the results.
    ///
    /// If the cancel token trips, the discoveries recorded so far are
    /// returned and the solution is marked incomplete.
    pub fn solve(&self) -> Result<Solution> {
        debug!(
            "solving {n}x{n} grid ({} tiles) against {} words",
            self.graph.node_count(),
            self.dictionary.len(),
            n = self.graph.size()
        );
        let start = Instant::now();

        let (found, complete) = match self.options.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| SolveError::ThreadPool(e.to_string()))?;
                pool.install(|| self.search_all())
            }
            None => self.search_all(),
        };

        if complete {
            debug!("found {} words in {:.2?}", found.len(), start.elapsed());
        } else {
            warn!("search cancelled after {:.2?} with {} words found", start.elapsed(), found.len());
        }

        Ok(Solution::new(found, complete))
    }

    fn search_all(&self) -> (Found, bool) {
        self.graph
            .nodes()
            .par_iter()
            .map(|&root| self.search_root(root))
            .reduce(
                || (self.empty_found(), true),
                |(left, left_complete), (right, right_complete)| {
                    (left.merge(right), left_complete && right_complete)
                },
            )
    }

    fn empty_found(&self) -> Found {
        match self.options.mode {
            OutputMode::Paths => Found::paths(),
            OutputMode::WordsOnly => Found::words(),
        }
    }

    fn is_cancelled(&self) -> bool {
        self.options.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }

    /// Explore every path starting at `root`. Returns whether it ran to exhaustion.
    fn search_root(&self, root: usize) -> (Found, bool) {
        let mut found = self.empty_found();
        if self.is_cancelled() {
            return (found, false);
        }
        let Some(letter) = self.graph.letter(root) else {
            return (found, true);
        };

        let mut branch = Branch {
            path: vec![root],
            visited: CellSet::with_capacity(self.graph.cell_count()),
            prefix: letter.to_string(),
        };
        branch.visited.insert(root);

        if !self.dictionary.has_prefix_of_len(&branch.prefix, 1) {
            trace!("root {} ({}) starts no word", self.graph.position(root), letter);
            return (found, true);
        }

        let complete = self.extend(&mut branch, &mut found);
        trace!(
            "root {} ({}) yielded {} words",
            self.graph.position(root),
            letter,
            found.len()
        );
        (found, complete)
    }

    /// Try every unvisited neighbor of the branch tip, recursing while some
    /// word can still follow. Returns `false` if cancelled.
    fn extend(&self, branch: &mut Branch, found: &mut Found) -> bool {
        if self.is_cancelled() {
            return false;
        }
        let Some(&tip) = branch.path.last() else {
            return true;
        };

        for &next in self.graph.neighbors(tip) {
            if branch.visited.contains(next) {
                continue;
            }
            let Some(letter) = self.graph.letter(next) else {
                continue;
            };

            branch.prefix.push(letter);
            branch.path.push(next);
            let length = branch.path.len();

            if length >= self.options.min_length && self.dictionary.is_word_of_len(&branch.prefix, length) {
                found.record(&branch.prefix, || {
                    branch.path.iter().map(|&i| self.graph.position(i)).collect()
                });
            }

            let mut complete = true;
            if self.dictionary.has_prefix_of_len(&branch.prefix, length) {
                branch.visited.insert(next);
                complete = self.extend(branch, found);
                branch.visited.remove(next);
            }

            branch.prefix.pop();
            branch.path.pop();

            if !complete {
                return false;
            }
        }

        true
    }
}

/// Parse `grid`, index `words`, and solve in one call.
pub fn solve<S: AsRef<str>>(grid: &str, words: &[S], options: SolveOptions) -> Result<Solution> {
    options.validate()?;
    let graph = AdjacencyGraph::parse(grid)?;
    let dictionary = DictionaryIndex::new(words, options.min_length);
    Solver::new(graph, dictionary, options)?.solve()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_set_tracks_indices_past_one_word() {
        let mut set = CellSet::with_capacity(130);
        set.insert(0);
        set.insert(129);
        assert!(set.contains(0) && set.contains(129));
        assert!(!set.contains(64));
        set.remove(129);
        assert!(!set.contains(129));
    }

    #[test]
    fn zero_min_length_is_rejected() {
        let options = SolveOptions::new().with_min_length(0);
        assert!(matches!(options.validate(), Err(SolveError::InvalidOptions(_))));
    }
}
