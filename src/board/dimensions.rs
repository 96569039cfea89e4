//! Board dimensions and the flat-index addressing scheme
//!
//! Cells are stored row-major, so the cell at `(row, col)` lives at
//! `row * width + col`.

use serde::Serialize;

/// Converts a row and column to a flat index in to the cell array
pub fn get_cell_pos(row: usize, col: usize, width: usize) -> usize {
    row * width + col
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
/// The height and width of a board
///
/// Both are non-zero and `height * width` fits in a usize, for a
/// `Dimensions` built with [Dimensions::new]
pub struct Dimensions {
    height: usize,
    width: usize,
}

/// Width of the board used when no compressed board is given
pub const DEFAULT_WIDTH: usize = 20;

/// Height of the board used when no compressed board is given
pub const DEFAULT_HEIGHT: usize = 10;

impl Dimensions {
    /// Builds dimensions from a height and width, returns `None` if either is
    /// zero or the board would have more cells than a usize can count
    pub fn new(height: usize, width: usize) -> Option<Self> {
        if height == 0 || width == 0 {
            return None;
        }
        height.checked_mul(width)?;
        Some(Self { height, width })
    }

    /// The dimensions of the default board
    pub const fn default_board() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
        }
    }

    #[allow(missing_docs)]
    pub fn width(&self) -> usize {
        self.width
    }

    #[allow(missing_docs)]
    pub fn height(&self) -> usize {
        self.height
    }

    /// total number of cells on a board of this size
    pub fn cell_count(&self) -> usize {
        self.height * self.width
    }
}
