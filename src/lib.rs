#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! Types for setting up a snake game board.
//! A board either comes from the built in default layout or is decoded from a
//! compact run-length encoded string, see [compressed_representation] for the
//! format. The decoder validates the whole string before handing back a board,
//! so a caller never sees a half built one.
//! ```plain
//! B10x20|W20|W1G18W1|W1G1S1E15G1W1|W1G1E16G1W1|...|W1G18W1|W20
//! ```
//! [game::GameState] holds the values gameplay works from: the board, the
//! snake head, the last direction input, score, game over and the food.

pub mod board;
pub mod compressed_representation;
pub mod config;
pub mod error;
pub mod game;
pub mod types;

use board::Board;

/// Loads a board fixture from a compressed string
pub fn board_fixture(board_fixture: &str) -> Board {
    let setup = compressed_representation::decompress_board_str(board_fixture.trim());
    setup.expect("the board literal is valid").board
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_fixture_trims_newlines() {
        let board = board_fixture(include_str!("../fixtures/default_board.txt"));
        assert_eq!(board, Board::default_board());
        let board = board_fixture("B1x2|W1S1\n");
        assert_eq!(board.cells().len(), 2);
    }
}
