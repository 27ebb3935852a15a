//! # Squaredle Solver
//!
//! Finds every dictionary word that can be spelled by walking a path of
//! adjacent cells in a square letter grid without reusing a cell.
//!
//! The grid becomes an immutable adjacency graph, the word list a
//! length-bucketed prefix index, and a pruned backtracking search explores
//! every starting cell in parallel.

pub mod dictionary;
pub mod error;
pub mod grid;
pub mod results;
pub mod solver;

pub use dictionary::{parse_word_list, DictionaryIndex};
pub use error::{Result, SolveError};
pub use grid::{normalize_letter, normalize_word, AdjacencyGraph, Position, BLANK};
pub use results::{Found, Solution, WordPath};
pub use solver::{solve, CancelToken, OutputMode, SolveOptions, Solver};

/// Default shortest reportable word length
pub const MIN_WORD_LENGTH: usize = 4;
