//! The character grid a board text is laid out on.

use crate::cell::CellRef;

/// Lines of a board text, each keeping its line terminator.
///
/// Widths are measured over these, so a line's `\n` counts as a column.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split_inclusive('\n')
}

/// A `height` x `width` grid of slots, each either blank or holding the
/// identity of the cell drawn there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    slots: Vec<Option<CellRef>>,
}

impl Grid {
    /// A grid sized to fit `text`: one row per line, as wide as the longest
    /// line. Every slot starts blank.
    pub fn for_text(text: &str) -> Self {
        let (height, width) = lines(text).fold((0, 0), |(height, width), line| {
            (height + 1, width.max(line.chars().count()))
        });
        Self::new(height, width)
    }

    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            slots: vec![None; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// The cell at `(row, col)`, or `None` when the slot is blank or outside
    /// the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<CellRef> {
        if row < self.height && col < self.width {
            self.slots[row * self.width + col]
        } else {
            None
        }
    }

    pub(crate) fn place(&mut self, row: usize, col: usize, cell: CellRef) {
        debug_assert!(row < self.height && col < self.width);
        self.slots[row * self.width + col] = Some(cell);
    }
}
