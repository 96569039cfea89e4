//! The in-memory grid a snake game is played on
mod cell;
pub mod dimensions;

use std::fmt;

use rand::seq::IteratorRandom;
use serde::Serialize;

use crate::types::{FoodPlaceableGame, Position, SizeDeterminableGame};

pub use cell::Cell;
pub use dimensions::{get_cell_pos, Dimensions};

/// flat index of the snake head on the default board
pub const DEFAULT_SNAKE_HEAD: CellIndex = CellIndex(2 * dimensions::DEFAULT_WIDTH + 2);

/// wrapper type for an index in to the board
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct CellIndex(pub usize);

impl CellIndex {
    /// makes a new cell index from a position, needs to know the width of the board
    pub fn new(pos: Position, width: usize) -> Self {
        Self(get_cell_pos(pos.row, pos.col, width))
    }

    /// get a usize from a CellIndex
    pub fn as_usize(&self) -> usize {
        self.0
    }

    /// converts a cellindex to a position
    pub fn into_position(self, width: usize) -> Position {
        Position {
            row: self.0 / width,
            col: self.0 % width,
        }
    }
}

/// A rectangular board of cells stored row-major. The cell array always holds
/// exactly `height * width` cells
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    dimensions: Dimensions,
    cells: Vec<Cell>,
}

impl Board {
    /// callers guarantee `cells.len() == dimensions.cell_count()`
    pub(crate) fn from_cells(dimensions: Dimensions, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), dimensions.cell_count());
        Board { dimensions, cells }
    }

    /// The 20x10 board used when no compressed board is supplied: a ring of
    /// walls, a ring of grass just inside it, plain cells in the middle and the
    /// snake at [DEFAULT_SNAKE_HEAD]
    pub fn default_board() -> Self {
        let dimensions = Dimensions::default_board();
        let (width, height) = (dimensions.width(), dimensions.height());
        let mut cells = vec![Cell::plain(); dimensions.cell_count()];

        for row in 0..height {
            for col in 0..width {
                let edge_distance = row.min(col).min(height - 1 - row).min(width - 1 - col);
                let cell = match edge_distance {
                    0 => Cell::wall(),
                    1 => Cell::grass(),
                    _ => continue,
                };
                cells[get_cell_pos(row, col, width)] = cell;
            }
        }

        cells[DEFAULT_SNAKE_HEAD.as_usize()] = Cell::snake();

        Board::from_cells(dimensions, cells)
    }

    #[allow(missing_docs)]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// all cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// get the cell at an index, `None` if it is off the board
    pub fn get_cell(&self, idx: CellIndex) -> Option<Cell> {
        self.cells.get(idx.as_usize()).copied()
    }

    /// iterates the board a row at a time
    pub fn rows(&self) -> std::slice::Chunks<'_, Cell> {
        self.cells.chunks(self.dimensions.width())
    }

    /// the index of the first snake cell, scanning in row-major order
    pub fn find_snake(&self) -> Option<CellIndex> {
        self.cells.iter().position(Cell::is_snake).map(CellIndex)
    }

    /// every cell with no flags set
    pub fn get_plain_cells(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_plain())
            .map(|(i, _)| CellIndex(i))
    }
}

impl SizeDeterminableGame for Board {
    fn get_width(&self) -> usize {
        self.dimensions.width()
    }

    fn get_height(&self) -> usize {
        self.dimensions.height()
    }
}

impl FoodPlaceableGame for Board {
    fn place_food(&mut self, rng: &mut impl rand::Rng) -> Option<CellIndex> {
        let idx = self.get_plain_cells().choose(rng)?;
        self.cells[idx.as_usize()].set_food();
        Some(idx)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                let c = if cell.is_snake() {
                    'S'
                } else if cell.is_food() {
                    'f'
                } else if cell.is_wall() {
                    '#'
                } else if cell.is_grass() {
                    ','
                } else {
                    '.'
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
