//! Grid parsing and the cell adjacency graph.
//!
//! A puzzle arrives as a flat, row-major string of `N * N` characters. Letters
//! become graph nodes; the blank marker (a space) leaves a hole that no path
//! may cross. Two nodes are adjacent when their rows and columns each differ
//! by at most one (8-directional, diagonals included).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SolveError};

/// Marker for a cell with no tile.
pub const BLANK: char = ' ';

/// Offsets of the 8 surrounding cells.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A cell coordinate in the grid.
///
/// Serializes as a `[row, col]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Chebyshev distance of exactly one.
    pub fn is_adjacent(self, other: Position) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Position> for (usize, usize) {
    fn from(position: Position) -> Self {
        (position.row, position.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Immutable adjacency structure over the non-blank cells of a square grid.
///
/// Cells are addressed by their row-major index. The graph is never mutated
/// after construction, so it can be shared freely between search threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph {
    size: usize,
    letters: Vec<Option<char>>,
    neighbors: Vec<Vec<usize>>,
    nodes: Vec<usize>,
}

impl AdjacencyGraph {
    /// Build the graph from a row-major grid string.
    ///
    /// Letters are lowercased. Fails with [`SolveError::InvalidGridSize`] when
    /// the input is empty or its length is not a perfect square, and with
    /// [`SolveError::InvalidCharacter`] on anything that is neither a letter
    /// nor [`BLANK`].
    pub fn parse(grid: &str) -> Result<Self> {
        let chars: Vec<char> = grid.chars().collect();
        let size = square_side(chars.len()).ok_or(SolveError::InvalidGridSize { len: chars.len() })?;

        let mut letters = Vec::with_capacity(chars.len());
        for (index, &ch) in chars.iter().enumerate() {
            if ch == BLANK {
                letters.push(None);
            } else if ch.is_alphabetic() {
                letters.push(Some(normalize_letter(ch)));
            } else {
                return Err(SolveError::InvalidCharacter {
                    row: index / size,
                    col: index % size,
                    ch,
                });
            }
        }

        let mut neighbors = vec![Vec::new(); letters.len()];
        let mut nodes = Vec::new();
        for index in 0..letters.len() {
            if letters[index].is_none() {
                continue;
            }
            nodes.push(index);
            let (row, col) = (index / size, index % size);
            for (dr, dc) in DIRECTIONS {
                let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
                    continue;
                };
                if r >= size || c >= size {
                    continue;
                }
                let other = r * size + c;
                if letters[other].is_some() {
                    neighbors[index].push(other);
                }
            }
        }

        Ok(Self {
            size,
            letters,
            neighbors,
            nodes,
        })
    }

    /// Side length `N` of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells, blanks included.
    pub fn cell_count(&self) -> usize {
        self.letters.len()
    }

    /// Number of non-blank cells.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Indices of the non-blank cells in row-major order.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Letter at a cell index; `None` for blanks and out-of-range indices.
    pub fn letter(&self, index: usize) -> Option<char> {
        self.letters.get(index).copied().flatten()
    }

    /// Non-blank neighbors of a cell. Empty for blanks.
    pub fn neighbors(&self, index: usize) -> &[usize] {
        self.neighbors.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn position(&self, index: usize) -> Position {
        Position::new(index / self.size, index % self.size)
    }

    pub fn index_of(&self, position: Position) -> Option<usize> {
        (position.row < self.size && position.col < self.size).then(|| position.row * self.size + position.col)
    }

    /// Whether two cell indices are connected by an edge.
    pub fn is_adjacent(&self, a: usize, b: usize) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Spell the word along a caller-supplied path.
    ///
    /// Returns `None` unless every cell is in bounds and non-blank, no cell
    /// repeats, and consecutive cells are adjacent.
    pub fn trace(&self, path: &[Position]) -> Option<String> {
        let mut word = String::with_capacity(path.len());
        let mut seen: Vec<usize> = Vec::with_capacity(path.len());
        for &position in path {
            let index = self.index_of(position)?;
            let letter = self.letter(index)?;
            if seen.contains(&index) {
                return None;
            }
            if let Some(&last) = seen.last() {
                if !self.is_adjacent(last, index) {
                    return None;
                }
            }
            seen.push(index);
            word.push(letter);
        }
        Some(word)
    }
}

impl fmt::Display for AdjacencyGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.letters.chunks(self.size) {
            let line: String = row.iter().map(|l| l.unwrap_or('.')).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Side length of a non-empty square with `len` cells.
fn square_side(len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let mut side = (len as f64).sqrt() as usize;
    while side * side > len {
        side -= 1;
    }
    while (side + 1) * (side + 1) <= len {
        side += 1;
    }
    (side * side == len).then_some(side)
}

/// Lowercase a word one letter at a time, the same way grid cells are.
///
/// Whole-string lowercasing is context-sensitive (a final `Σ` becomes `ς`)
/// and can change the character count, so it would not match the grid.
pub fn normalize_word(word: &str) -> String {
    word.chars().map(normalize_letter).collect()
}

/// Lowercase a letter, keeping it as-is when lowercasing would expand it.
pub fn normalize_letter(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => ch,
    }
}
