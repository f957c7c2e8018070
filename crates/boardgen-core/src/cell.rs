//! Typed cells read out of a board text.
//!
//! Every non-blank character in a board text becomes one `Cell`. A cell knows
//! its kind, where it was drawn, its index among cells of the same kind, and which
//! neighbors it found in each of the directions its kind may look in.

use crate::direction::{self, Direction, Offset};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a classified cell.
///
/// Blank grid slots are not cells; the grid stores `None` for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    /// `|`, `/` or `\` - an edge between two junctions
    Road,
    /// `.` - a corner where hexes meet
    Junction,
    /// `h` - a land hex
    Tile,
    /// `?` - a hex whose face is revealed during play
    Flippable,
    /// `o` - a water hex on the rim
    Ocean,
}

impl CellKind {
    /// All kinds, in the order they are resolved and emitted
    pub const ALL: [CellKind; 5] = [
        CellKind::Road,
        CellKind::Junction,
        CellKind::Tile,
        CellKind::Flippable,
        CellKind::Ocean,
    ];

    /// Name of the engine accessor that looks up a node of this kind
    pub fn accessor(&self) -> &'static str {
        match self {
            CellKind::Road => "road",
            CellKind::Junction => "junction",
            CellKind::Tile => "hex",
            CellKind::Flippable => "flippable",
            CellKind::Ocean => "ocean",
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.accessor())
    }
}

/// Which way a road is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slant {
    /// `|` joins the junctions above and below
    Vertical,
    /// `/` joins upper-right and lower-left
    Forward,
    /// `\` joins upper-left and lower-right
    Backward,
}

impl Slant {
    /// The two directions a road of this slant connects along
    pub fn offsets(&self) -> &'static [Offset] {
        match self {
            Slant::Vertical => &direction::VERTICAL_ROAD,
            Slant::Forward => &direction::FORWARD_ROAD,
            Slant::Backward => &direction::BACKWARD_ROAD,
        }
    }
}

/// What a classified cell looks like: its kind, plus the slant for roads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Road(Slant),
    Junction,
    Tile,
    Flippable,
    Ocean,
}

impl Shape {
    pub fn kind(&self) -> CellKind {
        match self {
            Shape::Road(_) => CellKind::Road,
            Shape::Junction => CellKind::Junction,
            Shape::Tile => CellKind::Tile,
            Shape::Flippable => CellKind::Flippable,
            Shape::Ocean => CellKind::Ocean,
        }
    }

    /// The directions a cell of this shape may link along, in emission order.
    pub fn offsets(&self) -> &'static [Offset] {
        match self {
            Shape::Road(slant) => slant.offsets(),
            Shape::Junction => &direction::JUNCTION,
            Shape::Tile | Shape::Flippable | Shape::Ocean => &direction::FAR,
        }
    }
}

/// What a single board character classifies as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Nothing drawn here
    Blank,
    Cell(Shape),
}

impl Symbol {
    /// Classify one character. Returns `None` for characters that have no
    /// meaning in a board text.
    pub fn classify(ch: char) -> Option<Symbol> {
        let shape = match ch {
            c if c.is_ascii_whitespace() => return Some(Symbol::Blank),
            '.' => Shape::Junction,
            'o' => Shape::Ocean,
            'h' => Shape::Tile,
            '?' => Shape::Flippable,
            '|' => Shape::Road(Slant::Vertical),
            '/' => Shape::Road(Slant::Forward),
            '\\' => Shape::Road(Slant::Backward),
            _ => return None,
        };
        Some(Symbol::Cell(shape))
    }
}

/// Identity of a cell: its kind plus its index among cells of that kind.
///
/// This is the handle the engine uses, and the only way cells refer to each
/// other. The `Board` owns the cells themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellRef {
    pub kind: CellKind,
    pub index: usize,
}

impl CellRef {
    pub const fn new(kind: CellKind, index: usize) -> Self {
        Self { kind, index }
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind.accessor(), self.index)
    }
}

/// A classified position in the board text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub shape: Shape,
    pub row: usize,
    pub col: usize,
    /// Position among cells of the same kind, in scan order
    pub index: usize,
    /// One slot per entry of `offsets()`
    neighbors: Vec<Option<CellRef>>,
}

impl Cell {
    pub(crate) fn new(shape: Shape, row: usize, col: usize, index: usize) -> Self {
        Self {
            shape,
            row,
            col,
            index,
            neighbors: vec![None; shape.offsets().len()],
        }
    }

    pub fn kind(&self) -> CellKind {
        self.shape.kind()
    }

    pub fn id(&self) -> CellRef {
        CellRef::new(self.kind(), self.index)
    }

    pub fn offsets(&self) -> &'static [Offset] {
        self.shape.offsets()
    }

    /// Record what was found at the `slot`-th offset.
    pub(crate) fn set_neighbor(&mut self, slot: usize, neighbor: Option<CellRef>) {
        self.neighbors[slot] = neighbor;
    }

    /// Resolved neighbors with the direction each was found in.
    pub fn links(&self) -> impl Iterator<Item = (Direction, CellRef)> + '_ {
        self.offsets()
            .iter()
            .zip(&self.neighbors)
            .filter_map(|(offset, neighbor)| neighbor.map(|n| (offset.direction, n)))
    }

    pub fn neighbor_count(&self) -> usize {
        self.neighbors.iter().filter(|n| n.is_some()).count()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at ({}, {})", self.id(), self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_board_symbols() {
        assert_eq!(Symbol::classify(' '), Some(Symbol::Blank));
        assert_eq!(Symbol::classify('\n'), Some(Symbol::Blank));
        assert_eq!(Symbol::classify('\t'), Some(Symbol::Blank));
        assert_eq!(Symbol::classify('.'), Some(Symbol::Cell(Shape::Junction)));
        assert_eq!(Symbol::classify('h'), Some(Symbol::Cell(Shape::Tile)));
        assert_eq!(Symbol::classify('?'), Some(Symbol::Cell(Shape::Flippable)));
        assert_eq!(Symbol::classify('o'), Some(Symbol::Cell(Shape::Ocean)));
        assert_eq!(
            Symbol::classify('\\'),
            Some(Symbol::Cell(Shape::Road(Slant::Backward)))
        );
    }

    #[test]
    fn test_classify_rejects_unknown_symbols() {
        for ch in ['#', 'H', 'O', 'p', '0', '-', 'é'] {
            assert_eq!(Symbol::classify(ch), None, "{:?} should be rejected", ch);
        }
    }

    #[test]
    fn test_shape_kinds() {
        assert_eq!(Shape::Road(Slant::Vertical).kind(), CellKind::Road);
        assert_eq!(Shape::Flippable.kind(), CellKind::Flippable);
    }

    #[test]
    fn test_bound_offset_counts() {
        assert_eq!(Cell::new(Shape::Junction, 0, 0, 0).offsets().len(), 12);
        assert_eq!(Cell::new(Shape::Tile, 0, 0, 0).offsets().len(), 6);
        assert_eq!(Cell::new(Shape::Ocean, 0, 0, 0).offsets().len(), 6);
        assert_eq!(Cell::new(Shape::Flippable, 0, 0, 0).offsets().len(), 6);

        let road = Cell::new(Shape::Road(Slant::Forward), 0, 0, 0);
        let directions: Vec<_> = road.offsets().iter().map(|o| o.direction).collect();
        assert_eq!(directions, vec![Direction::Clock2, Direction::Clock8]);
    }

    #[test]
    fn test_links_skip_empty_slots() {
        let mut road = Cell::new(Shape::Road(Slant::Vertical), 1, 0, 3);
        assert_eq!(road.neighbor_count(), 0);

        road.set_neighbor(1, Some(CellRef::new(CellKind::Junction, 7)));
        let links: Vec<_> = road.links().collect();
        assert_eq!(links, vec![(Direction::Clock6, CellRef::new(CellKind::Junction, 7))]);
        assert_eq!(road.neighbor_count(), 1);
    }

    #[test]
    fn test_display() {
        let cell = Cell::new(Shape::Tile, 4, 8, 2);
        assert_eq!(cell.id().to_string(), "hex(2)");
        assert_eq!(cell.to_string(), "hex(2) at (4, 8)");
    }
}
