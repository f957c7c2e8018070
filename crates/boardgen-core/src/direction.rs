//! Hex directions and their offsets in text-grid coordinates.
//!
//! Board texts are drawn with pointy-top hexes. A tile sits at the centre of its
//! hex; its six corner junctions are three rows up or down (12 and 6 o'clock) or
//! one row up or down and four columns across (2, 4, 8 and 10 o'clock). Roads sit
//! halfway between two junctions, one row away from each.
//!
//! This gives every direction two offsets:
//! - far: tile/ocean/flippable to junction, and junction back to tile
//! - near: junction to road, and road back to junction
//!
//! The tables here are the only source of offsets in the crate. Each offset is the
//! exact negation of its opposite direction's offset in the same table, which is
//! what lets both endpoints of a link find each other. That property is checked
//! at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six clock positions around a hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    Clock12,
    Clock2,
    Clock4,
    Clock6,
    Clock8,
    Clock10,
}

impl Direction {
    /// All directions clockwise from 12 o'clock
    pub const ALL: [Direction; 6] = [
        Direction::Clock12,
        Direction::Clock2,
        Direction::Clock4,
        Direction::Clock6,
        Direction::Clock8,
        Direction::Clock10,
    ];

    /// The direction pointing back the other way
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Clock12 => Direction::Clock6,
            Direction::Clock2 => Direction::Clock8,
            Direction::Clock4 => Direction::Clock10,
            Direction::Clock6 => Direction::Clock12,
            Direction::Clock8 => Direction::Clock2,
            Direction::Clock10 => Direction::Clock4,
        }
    }

    /// Hour on the clock face
    pub const fn clock(self) -> u8 {
        match self {
            Direction::Clock12 => 12,
            Direction::Clock2 => 2,
            Direction::Clock4 => 4,
            Direction::Clock6 => 6,
            Direction::Clock8 => 8,
            Direction::Clock10 => 10,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Direction::Clock{}", self.clock())
    }
}

/// A direction together with the grid displacement it resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub direction: Direction,
    /// Row delta (positive is down)
    pub d_row: isize,
    /// Column delta (positive is right)
    pub d_col: isize,
}

impl Offset {
    const fn new(direction: Direction, d_row: isize, d_col: isize) -> Self {
        Self {
            direction,
            d_row,
            d_col,
        }
    }

    /// Apply this offset to `(row, col)`, returning the target if it lies
    /// inside a `height` x `width` grid.
    pub fn apply(
        &self,
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    ) -> Option<(usize, usize)> {
        let target_row = row.checked_add_signed(self.d_row)?;
        let target_col = col.checked_add_signed(self.d_col)?;
        (target_row < height && target_col < width).then_some((target_row, target_col))
    }
}

/// Tile-to-junction spokes, clockwise from 12.
pub const FAR: [Offset; 6] = [
    Offset::new(Direction::Clock12, -3, 0),
    Offset::new(Direction::Clock2, -1, 4),
    Offset::new(Direction::Clock4, 1, 4),
    Offset::new(Direction::Clock6, 3, 0),
    Offset::new(Direction::Clock8, 1, -4),
    Offset::new(Direction::Clock10, -1, -4),
];

/// Junction-to-road edges, grouped by the road slant that carries them.
pub const NEAR: [Offset; 6] = [
    Offset::new(Direction::Clock12, -1, 0),
    Offset::new(Direction::Clock6, 1, 0),
    Offset::new(Direction::Clock2, -1, 2),
    Offset::new(Direction::Clock8, 1, -2),
    Offset::new(Direction::Clock4, 1, 2),
    Offset::new(Direction::Clock10, -1, -2),
];

/// Junctions look both ways: out to the three hexes they touch and across to
/// the roads that meet at them.
pub const JUNCTION: [Offset; 12] = [
    FAR[0], FAR[1], FAR[2], FAR[3], FAR[4], FAR[5], NEAR[0], NEAR[1], NEAR[2], NEAR[3], NEAR[4],
    NEAR[5],
];

/// `|` roads
pub const VERTICAL_ROAD: [Offset; 2] = [NEAR[0], NEAR[1]];
/// `/` roads
pub const FORWARD_ROAD: [Offset; 2] = [NEAR[2], NEAR[3]];
/// `\` roads
pub const BACKWARD_ROAD: [Offset; 2] = [NEAR[4], NEAR[5]];

const fn is_reciprocal(table: &[Offset; 6]) -> bool {
    let mut i = 0;
    while i < table.len() {
        let opposite = table[i].direction.opposite();
        let mut found = false;
        let mut j = 0;
        while j < table.len() {
            if table[j].direction as u8 == opposite as u8 {
                found = table[j].d_row == -table[i].d_row && table[j].d_col == -table[i].d_col;
            }
            j += 1;
        }
        if !found {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(is_reciprocal(&FAR), "far offsets must mirror their opposites");
const _: () = assert!(is_reciprocal(&NEAR), "near offsets must mirror their opposites");
