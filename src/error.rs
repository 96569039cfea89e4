//! errors produced while building or encoding a board
use thiserror::Error;

/// Why a board could not be initialized. Every variant is a deterministic
/// function of the input string, so retrying with the same input is pointless
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BoardInitError {
    /// malformed header, unknown cell symbol, or a run with no count
    #[error("bad character in compressed board")]
    BadChar,
    /// a run claims more than one snake cell, or the board does not hold exactly one
    #[error("board must contain exactly one snake cell")]
    WrongSnakeCount,
    /// a row, the row count, or the total cell count disagrees with the header
    #[error("board contents do not match the declared dimensions")]
    IncorrectDimensions,
}

/// Why a board could not be written in the compressed format
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EncodeError {
    /// the cell holds a flag combination (food, snake on grass, ...) that has no symbol
    #[error("cell {index} cannot be expressed in the compressed format")]
    UnencodableCell {
        /// flat index of the offending cell
        index: usize,
    },
}

/// Errors from loading a [`crate::config::GameConfig`] and starting a game from it
#[derive(Error, Debug)]
pub enum ConfigError {
    /// the config is not valid json for a `GameConfig`
    #[error("invalid game config: {0}")]
    Json(#[from] serde_json::Error),
    /// the config was fine but the board it names was not
    #[error(transparent)]
    Board(#[from] BoardInitError),
}
