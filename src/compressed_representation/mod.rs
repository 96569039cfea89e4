//! The compressed, run-length encoded board format.
//!
//! A board is written as a header followed by one token per row, all separated
//! by `|`:
//! ```plain
//! B<height>x<width>|<row 1>|<row 2>|...|<row height>
//! ```
//! Each row is a list of `<symbol><count>` runs, where the symbol is one of
//! `W` (wall), `E` (plain), `G` (grass) or `S` (snake). The runs in a row sum to
//! the width and the board holds exactly one snake cell, written as `S1`.
//!
//! ```
//! # use snake_game_types::compressed_representation::decompress_board_str;
//! let setup = decompress_board_str("B2x2|W1E1|E1S1").unwrap();
//! assert_eq!(setup.snake_head.as_usize(), 3);
//! ```
mod fill;
mod header;
mod runs;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::board::{Board, Cell, Dimensions};
use crate::error::{BoardInitError, EncodeError};
use crate::game::BoardSetup;
use crate::types::Input;

pub use fill::fill_cells;
pub use header::set_dimensions;
pub use runs::{Run, Runs};

/// separates the header and each row
pub const ROW_SEPARATOR: char = '|';

/// Decodes a compressed board.
///
/// On success the returned setup owns the board, the snake head and a reset
/// input direction. On failure nothing of the partially decoded board is
/// returned.
#[tracing::instrument(level = "debug", skip(compressed), fields(len = compressed.len()))]
pub fn decompress_board_str(compressed: &str) -> Result<BoardSetup, BoardInitError> {
    // empty tokens are skipped, so `||` and a trailing `|` are harmless
    let mut tokens = compressed
        .split(ROW_SEPARATOR)
        .filter(|token| !token.is_empty());

    let header = tokens.next().ok_or(BoardInitError::BadChar)?;
    let dimensions = set_dimensions(header).map_err(|e| {
        debug!(header, error = %e, "rejected board header");
        e
    })?;
    let mut assembler = Assembler::new(dimensions)?;

    for token in tokens {
        assembler.push_row(token).map_err(|e| {
            debug!(row = assembler.row_count, error = %e, "rejected board row");
            e
        })?;
    }

    let setup = assembler.finish().map_err(|e| {
        debug!(error = %e, "rejected board");
        e
    })?;
    trace!(
        height = dimensions.height(),
        width = dimensions.width(),
        snake_head = setup.snake_head.as_usize(),
        "decoded board"
    );
    Ok(setup)
}

/// Decode state between the header and the last row
struct Assembler {
    dimensions: Dimensions,
    /// only ever holds validated runs, its length is the next cell to write
    cells: Vec<Cell>,
    row_count: usize,
    snake_count: usize,
}

impl Assembler {
    fn new(dimensions: Dimensions) -> Result<Self, BoardInitError> {
        let total_cells = dimensions.cell_count();
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(total_cells)
            .map_err(|_| BoardInitError::BadChar)?;

        Ok(Assembler {
            dimensions,
            cells,
            row_count: 0,
            snake_count: 0,
        })
    }

    fn push_row(&mut self, token: &str) -> Result<(), BoardInitError> {
        if self.row_count >= self.dimensions.height() {
            return Err(BoardInitError::IncorrectDimensions);
        }

        let width = self.dimensions.width();
        let total_cells = self.dimensions.cell_count();
        let mut row_cells = 0usize;
        for run in Runs::new(token) {
            let Run { symbol, count } = run?;
            row_cells = row_cells.saturating_add(count);

            // count <= width once the first check passes, so the sum can't overflow
            let cell_pos = self.cells.len();
            if row_cells > width || cell_pos + count > total_cells {
                return Err(BoardInitError::IncorrectDimensions);
            }

            fill_cells(
                &mut self.cells,
                cell_pos,
                count,
                symbol,
                &mut self.snake_count,
            )?;
        }

        if row_cells != width {
            return Err(BoardInitError::IncorrectDimensions);
        }

        self.row_count += 1;
        Ok(())
    }

    fn finish(self) -> Result<BoardSetup, BoardInitError> {
        if self.row_count != self.dimensions.height()
            || self.cells.len() != self.dimensions.cell_count()
        {
            return Err(BoardInitError::IncorrectDimensions);
        }
        if self.snake_count != 1 {
            return Err(BoardInitError::WrongSnakeCount);
        }

        let board = Board::from_cells(self.dimensions, self.cells);
        let snake_head = board.find_snake().ok_or(BoardInitError::WrongSnakeCount)?;

        Ok(BoardSetup {
            board,
            snake_head,
            direction: Input::None,
        })
    }
}

/// Writes a board in the compressed format, one run per maximal stretch of
/// identical cells within a row. Decoding the result gives back the same cells.
///
/// Fails for cells the format has no symbol for, such as food.
pub fn compress_board(board: &Board) -> Result<String, EncodeError> {
    let dimensions = board.dimensions();
    let mut out = format!("B{}x{}", dimensions.height(), dimensions.width());

    let mut index = 0;
    for row in board.rows() {
        out.push(ROW_SEPARATOR);
        for (count, cell) in row.iter().dedup_with_count() {
            let symbol = cell
                .symbol()
                .ok_or(EncodeError::UnencodableCell { index })?;
            out.push(symbol);
            out.push_str(&count.to_string());
            index += count;
        }
    }

    Ok(out)
}
