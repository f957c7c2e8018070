//! Board parsing and neighbor resolution.
//!
//! A `Board` is built in three passes over a board text:
//! - size the grid from the text's line count and longest line
//! - classify each character into a typed cell, numbering cells per kind
//! - resolve each cell's neighbors through the direction tables
//!
//! Once built, a board is read-only. It owns every cell, grouped by kind with
//! each group indexed by `Cell::index`.

use crate::cell::{Cell, CellKind, CellRef, Symbol};
use crate::direction::Direction;
use crate::grid::{self, Grid};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that stop a board from being built
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Unrecognized symbol {symbol:?} at row {row}, column {col}")]
    UnrecognizedSymbol { symbol: char, row: usize, col: usize },

    #[error("Cannot read board file {}", path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Number of cells of each kind, in the order the engine's graph takes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KindCounts {
    pub roads: usize,
    pub junctions: usize,
    pub tiles: usize,
    pub flippables: usize,
    pub oceans: usize,
}

/// A link whose target does not link back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneWayLink {
    pub from: CellRef,
    pub direction: Direction,
    pub to: CellRef,
}

/// A parsed and resolved board.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    roads: Vec<Cell>,
    junctions: Vec<Cell>,
    tiles: Vec<Cell>,
    flippables: Vec<Cell>,
    oceans: Vec<Cell>,
}

impl Board {
    /// Read and parse a board file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BoardError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| BoardError::InputNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read {} bytes from {}", text.len(), path.display());
        Self::parse(&text)
    }

    /// Parse a board text. Fails on the first character that is not part of
    /// the board alphabet.
    pub fn parse(text: &str) -> Result<Self, BoardError> {
        let mut board = Self {
            grid: Grid::for_text(text),
            roads: Vec::new(),
            junctions: Vec::new(),
            tiles: Vec::new(),
            flippables: Vec::new(),
            oceans: Vec::new(),
        };
        debug!("Grid is {} rows by {} columns", board.grid.height(), board.grid.width());

        board.classify(text)?;
        let counts = board.counts();
        debug!(
            roads = counts.roads,
            junctions = counts.junctions,
            tiles = counts.tiles,
            flippables = counts.flippables,
            oceans = counts.oceans,
            "Classified cells"
        );

        board.resolve();
        Ok(board)
    }

    fn classify(&mut self, text: &str) -> Result<(), BoardError> {
        for (row, line) in grid::lines(text).enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let shape = match Symbol::classify(ch) {
                    Some(Symbol::Blank) => continue,
                    Some(Symbol::Cell(shape)) => shape,
                    None => return Err(BoardError::UnrecognizedSymbol { symbol: ch, row, col }),
                };

                let cells = self.cells_mut(shape.kind());
                let cell = Cell::new(shape, row, col, cells.len());
                let id = cell.id();
                cells.push(cell);
                self.grid.place(row, col, id);
            }
        }
        Ok(())
    }

    fn resolve(&mut self) {
        let (height, width) = (self.grid.height(), self.grid.width());
        let mut resolved = 0;

        for kind in CellKind::ALL {
            // Split borrows: the grid is read while the kind's cells are written
            let grid = &self.grid;
            let cells = match kind {
                CellKind::Road => &mut self.roads,
                CellKind::Junction => &mut self.junctions,
                CellKind::Tile => &mut self.tiles,
                CellKind::Flippable => &mut self.flippables,
                CellKind::Ocean => &mut self.oceans,
            };

            for cell in cells.iter_mut() {
                for (slot, offset) in cell.offsets().iter().enumerate() {
                    let neighbor = offset
                        .apply(cell.row, cell.col, height, width)
                        .and_then(|(row, col)| grid.get(row, col));
                    resolved += usize::from(neighbor.is_some());
                    cell.set_neighbor(slot, neighbor);
                }
            }
        }

        debug!("Resolved {} links", resolved);
    }

    fn cells_mut(&mut self, kind: CellKind) -> &mut Vec<Cell> {
        match kind {
            CellKind::Road => &mut self.roads,
            CellKind::Junction => &mut self.junctions,
            CellKind::Tile => &mut self.tiles,
            CellKind::Flippable => &mut self.flippables,
            CellKind::Ocean => &mut self.oceans,
        }
    }

    /// All cells of one kind, ordered by index
    pub fn cells(&self, kind: CellKind) -> &[Cell] {
        match kind {
            CellKind::Road => &self.roads,
            CellKind::Junction => &self.junctions,
            CellKind::Tile => &self.tiles,
            CellKind::Flippable => &self.flippables,
            CellKind::Ocean => &self.oceans,
        }
    }

    /// Every cell, kind by kind in emission order
    pub fn all_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        CellKind::ALL.into_iter().flat_map(move |kind| self.cells(kind))
    }

    pub fn cell(&self, id: CellRef) -> Option<&Cell> {
        self.cells(id.kind).get(id.index)
    }

    /// The cell drawn at `(row, col)`, if any
    pub fn cell_at(&self, row: usize, col: usize) -> Option<&Cell> {
        self.grid.get(row, col).and_then(|id| self.cell(id))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn counts(&self) -> KindCounts {
        KindCounts {
            roads: self.roads.len(),
            junctions: self.junctions.len(),
            tiles: self.tiles.len(),
            flippables: self.flippables.len(),
            oceans: self.oceans.len(),
        }
    }

    /// Total number of resolved links across all cells
    pub fn link_count(&self) -> usize {
        self.all_cells().map(Cell::neighbor_count).sum()
    }

    /// Links the engine could only follow one way.
    ///
    /// The engine adds each emitted edge on its own, so a link from A to B
    /// in direction D is only usable both ways if B also links to A in the
    /// opposite direction. Boards drawn on the hex lattice have none of these;
    /// hand-edited ones can.
    pub fn one_way_links(&self) -> Vec<OneWayLink> {
        self.all_cells()
            .flat_map(|cell| {
                cell.links().map(move |(direction, to)| OneWayLink {
                    from: cell.id(),
                    direction,
                    to,
                })
            })
            .filter(|link| {
                let back = (link.direction.opposite(), link.from);
                !self
                    .cell(link.to)
                    .is_some_and(|target| target.links().any(|l| l == back))
            })
            .collect()
    }
}
