//! Kopiatan board generator - compiles ASCII hex maps into engine graphs
//!
//! This crate turns a hand-drawn board text into the statements that build the
//! engine's board graph:
//! - Reading the text onto a character grid
//! - Classifying characters into junctions, roads, tiles, flippables and oceans
//! - Resolving each cell's neighbors along fixed hex-direction offsets
//! - Emitting one edge statement per resolved link
//!
//! # Board texts
//!
//! ```text
//!         .
//!       /   \
//!     .       .
//!     |   h   |
//!     .       .
//!       \   /
//!         .
//! ```
//!
//! `.` is a junction, `|` `/` `\` are roads, `h` is a tile, `?` a flippable tile
//! and `o` an ocean tile. Whitespace is ignored; anything else is an error.
//!
//! # Modules
//!
//! - [`direction`]: Clock directions and their grid offsets
//! - [`cell`]: Cell kinds and symbol classification
//! - [`grid`]: The character grid a board is laid out on
//! - [`board`]: Parsing and neighbor resolution
//! - [`emit`]: C++ header and JSON output

pub mod board;
pub mod cell;
pub mod direction;
pub mod emit;
pub mod grid;

// Re-export commonly used types
pub use board::{Board, BoardError, KindCounts, OneWayLink};
pub use cell::{Cell, CellKind, CellRef, Shape, Slant, Symbol};
pub use direction::{Direction, Offset};
pub use emit::{edge_statements, render_header, render_json, BoardGraph, EdgeStatement};
pub use grid::Grid;
