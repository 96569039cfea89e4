//! various types that are useful for working with a snake board
use crate::board::CellIndex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A row/column position on the board, row 0 is the top row
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    #[allow(missing_docs)]
    pub row: usize,
    #[allow(missing_docs)]
    pub col: usize,
}

/// The most recent direction input from the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Input {
    /// no input has been received since the game was initialized
    #[default]
    None,
    #[allow(missing_docs)]
    Up,
    #[allow(missing_docs)]
    Down,
    #[allow(missing_docs)]
    Left,
    #[allow(missing_docs)]
    Right,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::None => write!(f, "none"),
            Input::Up => write!(f, "up"),
            Input::Down => write!(f, "down"),
            Input::Left => write!(f, "left"),
            Input::Right => write!(f, "right"),
        }
    }
}

/// a game for which the size of the game board can be determined
pub trait SizeDeterminableGame {
    #[allow(missing_docs)]
    fn get_width(&self) -> usize;
    #[allow(missing_docs)]
    fn get_height(&self) -> usize;
}

/// A game for which the head of the snake can be got.
pub trait SnakeHeadGettableGame: SizeDeterminableGame {
    /// the flat index of the snake head
    fn get_head_as_native_position(&self) -> CellIndex;

    /// the snake head as a row/column position
    fn get_head_as_position(&self) -> Position {
        self.get_head_as_native_position()
            .into_position(self.get_width())
    }
}

/// A game which can have food dropped on to it
pub trait FoodPlaceableGame {
    /// places a single piece of food on a random plain cell, returning where it
    /// landed. Returns `None` when there is no plain cell left
    fn place_food(&mut self, rng: &mut impl rand::Rng) -> Option<CellIndex>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_defaults_to_none() {
        assert_eq!(Input::default(), Input::None);
        assert_eq!(Input::default().to_string(), "none");
    }

    #[test]
    fn test_input_serializes_lowercase() {
        let s = serde_json::to_string(&Input::Left).unwrap();
        assert_eq!(s, "\"left\"");
        let back: Input = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(back, Input::None);
    }
}
