use squaredle_solver::{AdjacencyGraph, Position, SolveError};

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

#[test]
fn test_parse_square_grid() {
    let graph = AdjacencyGraph::parse("ABCDEFGHI").unwrap();
    assert_eq!(graph.size(), 3);
    assert_eq!(graph.node_count(), 9);
    assert_eq!(graph.letter(0), Some('a'));
    assert_eq!(graph.letter(8), Some('i'));
}

#[test]
fn test_empty_grid_is_rejected() {
    assert_eq!(AdjacencyGraph::parse(""), Err(SolveError::InvalidGridSize { len: 0 }));
}

#[test]
fn test_non_square_grid_is_rejected() {
    assert_eq!(AdjacencyGraph::parse("abc"), Err(SolveError::InvalidGridSize { len: 3 }));
    assert_eq!(
        AdjacencyGraph::parse("abcdefghij"),
        Err(SolveError::InvalidGridSize { len: 10 })
    );
}

#[test]
fn test_invalid_character_names_cell() {
    let err = AdjacencyGraph::parse("abc1efghi").unwrap_err();
    assert_eq!(err, SolveError::InvalidCharacter { row: 1, col: 0, ch: '1' });
}

#[test]
fn test_blank_cells_are_not_nodes() {
    let graph = AdjacencyGraph::parse("abcd fghi").unwrap();
    assert_eq!(graph.node_count(), 8);
    assert_eq!(graph.letter(4), None);
    assert!(graph.neighbors(4).is_empty());
    assert!(!graph.neighbors(0).contains(&4));
    assert_eq!(graph.neighbors(0), &[1, 3]);
}

#[test]
fn test_adjacency_is_chebyshev() {
    let graph = AdjacencyGraph::parse("abcdefghijklmnop").unwrap();
    // (1, 1) touches all eight surrounding cells.
    let center = graph.index_of(pos(1, 1)).unwrap();
    let mut around: Vec<Position> = graph.neighbors(center).iter().map(|&i| graph.position(i)).collect();
    around.sort();
    assert_eq!(
        around,
        vec![pos(0, 0), pos(0, 1), pos(0, 2), pos(1, 0), pos(1, 2), pos(2, 0), pos(2, 1), pos(2, 2)]
    );
    assert!(!graph.is_adjacent(0, 2));
    assert!(graph.is_adjacent(0, 5));
    assert!(graph.is_adjacent(5, 0));
}

#[test]
fn test_single_cell_grid_has_no_edges() {
    let graph = AdjacencyGraph::parse("x").unwrap();
    assert_eq!(graph.node_count(), 1);
    assert!(graph.neighbors(0).is_empty());
}

#[test]
fn test_trace_spells_valid_paths() {
    let graph = AdjacencyGraph::parse("ABCDEFGHI").unwrap();
    assert_eq!(graph.trace(&[pos(0, 0), pos(0, 1), pos(1, 1)]), Some("abe".to_string()));
    assert_eq!(graph.trace(&[pos(2, 2), pos(1, 1), pos(0, 0)]), Some("iea".to_string()));
}

#[test]
fn test_trace_rejects_invalid_paths() {
    let graph = AdjacencyGraph::parse("abcd fghi").unwrap();
    // not adjacent
    assert_eq!(graph.trace(&[pos(0, 0), pos(0, 2)]), None);
    // reused cell
    assert_eq!(graph.trace(&[pos(0, 0), pos(0, 1), pos(0, 0)]), None);
    // blank
    assert_eq!(graph.trace(&[pos(0, 0), pos(1, 1)]), None);
    // out of bounds
    assert_eq!(graph.trace(&[pos(2, 2), pos(3, 3)]), None);
}

#[test]
fn test_display_marks_blanks() {
    let graph = AdjacencyGraph::parse("abcd fghi").unwrap();
    assert_eq!(graph.to_string(), "abc\nd.f\nghi\n");
}

#[test]
fn test_position_serializes_as_pair() {
    let json = serde_json::to_string(&pos(1, 2)).unwrap();
    assert_eq!(json, "[1,2]");
}
