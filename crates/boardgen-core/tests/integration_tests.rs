//! Integration tests for the board generator.
//!
//! These tests run the whole text -> board -> header pipeline over the boards
//! shipped in `boards/`.

use boardgen_core::*;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

const STANDARD: &str = include_str!("../../../boards/Standard.txt");
const SINGLE: &str = include_str!("../../../boards/Single.txt");
const SINGLE_HEADER: &str = include_str!("golden/Single.h");

fn boards_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../boards")
}

/// Count emitted statements whose source is of the given kind
fn statements_from(statements: &[EdgeStatement], kind: CellKind) -> usize {
    statements.iter().filter(|s| s.from.kind == kind).count()
}

#[test]
fn test_standard_board_counts() {
    let board = Board::parse(STANDARD).unwrap();
    assert_eq!(
        board.counts(),
        KindCounts {
            roads: 72,
            junctions: 54,
            tiles: 19,
            flippables: 0,
            oceans: 18,
        }
    );

    let header = render_header(&board, "Standard");
    assert!(header.contains(
        "        m_graph = new Graph(
            72, // roads
            54, // junctions
            19, // hexes
            0, // flippables
            18 // oceans
        );"
    ));
}

#[test]
fn test_standard_board_emits_one_statement_per_link() {
    let board = Board::parse(STANDARD).unwrap();
    let statements = edge_statements(&board);

    assert_eq!(statements.len(), board.link_count());
    assert_eq!(statements.len(), 612);
    assert_eq!(statements_from(&statements, CellKind::Road), 144);
    assert_eq!(statements_from(&statements, CellKind::Junction), 306);
    assert_eq!(statements_from(&statements, CellKind::Tile), 114);
    assert_eq!(statements_from(&statements, CellKind::Flippable), 0);
    assert_eq!(statements_from(&statements, CellKind::Ocean), 48);

    let header = render_header(&board, "Standard");
    assert_eq!(header.matches("->add_edge(").count(), 612);
}

#[test]
fn test_standard_board_neighbor_counts() {
    let board = Board::parse(STANDARD).unwrap();

    for road in board.cells(CellKind::Road) {
        assert_eq!(road.neighbor_count(), 2, "{road}");
    }
    for junction in board.cells(CellKind::Junction) {
        assert!(
            matches!(junction.neighbor_count(), 5 | 6),
            "{junction} has {} neighbors",
            junction.neighbor_count()
        );
    }
    for tile in board.cells(CellKind::Tile) {
        assert_eq!(tile.neighbor_count(), 6, "{tile}");
    }
    for ocean in board.cells(CellKind::Ocean) {
        assert!(
            matches!(ocean.neighbor_count(), 2 | 3),
            "{ocean} has {} neighbors",
            ocean.neighbor_count()
        );
    }
}

#[test]
fn test_standard_board_links_are_reciprocal() {
    let board = Board::parse(STANDARD).unwrap();
    assert!(board.one_way_links().is_empty());
}

#[test]
fn test_standard_board_first_statements() {
    let board = Board::parse(STANDARD).unwrap();
    let lines: Vec<_> = edge_statements(&board).iter().map(ToString::to_string).collect();

    assert_eq!(
        &lines[..4],
        &[
            "m_graph->road(0)->add_edge(Direction::Clock2, m_graph->junction(0));",
            "m_graph->road(0)->add_edge(Direction::Clock8, m_graph->junction(3));",
            "m_graph->road(1)->add_edge(Direction::Clock4, m_graph->junction(4));",
            "m_graph->road(1)->add_edge(Direction::Clock10, m_graph->junction(0));",
        ]
    );

    // First junction: far spokes first, then the roads beside it
    assert_eq!(
        &lines[144..149],
        &[
            "m_graph->junction(0)->add_edge(Direction::Clock2, m_graph->ocean(1));",
            "m_graph->junction(0)->add_edge(Direction::Clock6, m_graph->hex(0));",
            "m_graph->junction(0)->add_edge(Direction::Clock10, m_graph->ocean(0));",
            "m_graph->junction(0)->add_edge(Direction::Clock8, m_graph->road(0));",
            "m_graph->junction(0)->add_edge(Direction::Clock4, m_graph->road(1));",
        ]
    );
}

#[test]
fn test_single_board_header_matches_golden() {
    let board = Board::parse(SINGLE).unwrap();
    assert_eq!(render_header(&board, "Single"), SINGLE_HEADER);
}

#[test]
fn test_generation_is_deterministic() {
    let first = render_header(&Board::parse(STANDARD).unwrap(), "Standard");
    let second = render_header(&Board::parse(STANDARD).unwrap(), "Standard");
    assert_eq!(first, second);

    let first = render_json(&Board::parse(STANDARD).unwrap(), "Standard").unwrap();
    let second = render_json(&Board::parse(STANDARD).unwrap(), "Standard").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_from_file_matches_parse() {
    let from_file = Board::from_file(boards_dir().join("Standard.txt")).unwrap();
    let parsed = Board::parse(STANDARD).unwrap();
    assert_eq!(edge_statements(&from_file), edge_statements(&parsed));
}

#[test]
fn test_every_shipped_board_parses() {
    for name in ["Standard", "Single", "Flippable"] {
        let board = Board::from_file(boards_dir().join(format!("{name}.txt")))
            .unwrap_or_else(|e| panic!("{name}: {e}"));
        assert!(board.one_way_links().is_empty(), "{name} has one-way links");
    }
}

#[test]
fn test_unrecognized_symbol_aborts() {
    let mut text = STANDARD.to_string();
    // Swap the centre tile for a stray symbol
    let centre = text.lines().nth(12).unwrap().find('h').unwrap();
    let offset: usize = text.lines().take(12).map(|l| l.len() + 1).sum::<usize>() + centre + 16;
    text.replace_range(offset..offset + 1, "#");

    match Board::parse(&text) {
        Err(BoardError::UnrecognizedSymbol { symbol, row, col }) => {
            assert_eq!(symbol, '#');
            assert_eq!(row, 12);
            assert_eq!(col, centre + 16);
        }
        other => panic!("expected an unrecognized symbol error, got {other:?}"),
    }
}
