//! Session state for a single game and how a fresh board is merged in to it
use serde::Serialize;
use tracing::{debug, info};

use crate::board::{Board, CellIndex, DEFAULT_SNAKE_HEAD};
use crate::compressed_representation::decompress_board_str;
use crate::error::BoardInitError;
use crate::types::{FoodPlaceableGame, Input, SizeDeterminableGame, SnakeHeadGettableGame};

/// A freshly built board and the state values that go with it. Produced by
/// [decompress_board_str] or [BoardSetup::default_board]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSetup {
    /// the fully validated board
    pub board: Board,
    /// flat index of the single snake cell
    pub snake_head: CellIndex,
    /// always [Input::None], no input has been read for a new board
    pub direction: Input,
}

impl BoardSetup {
    /// the 20x10 walled board with the snake in the top left
    pub fn default_board() -> Self {
        BoardSetup {
            board: Board::default_board(),
            snake_head: DEFAULT_SNAKE_HEAD,
            direction: Input::None,
        }
    }
}

/// Everything gameplay needs to know about the game in progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// the cells, including the placed food
    pub board: Board,
    #[allow(missing_docs)]
    pub snake_head: CellIndex,
    /// the last direction the player asked for
    pub direction: Input,
    #[allow(missing_docs)]
    pub score: u32,
    #[allow(missing_docs)]
    pub game_over: bool,
    /// where the current food is, `None` if the board had nowhere to put it
    pub food: Option<CellIndex>,
}

impl GameState {
    /// Starts a new game from a compressed board, or from the default board
    /// when `board_rep` is `None`
    pub fn new(board_rep: Option<&str>, rng: &mut impl rand::Rng) -> Result<Self, BoardInitError> {
        let setup = load_setup(board_rep)?;
        Ok(Self::from_setup(setup, rng))
    }

    /// Replaces the running game with a new one. If the board fails to decode
    /// the current state is left exactly as it was
    pub fn initialize_game(
        &mut self,
        board_rep: Option<&str>,
        rng: &mut impl rand::Rng,
    ) -> Result<(), BoardInitError> {
        let setup = load_setup(board_rep)?;
        *self = Self::from_setup(setup, rng);
        Ok(())
    }

    /// resets score, game over and direction and places the first food
    pub fn from_setup(setup: BoardSetup, rng: &mut impl rand::Rng) -> Self {
        let BoardSetup {
            mut board,
            snake_head,
            direction,
        } = setup;

        let food = board.place_food(rng);
        match food {
            Some(idx) => debug!(food = idx.as_usize(), "placed food"),
            None => debug!("no plain cell left for food"),
        }

        GameState {
            board,
            snake_head,
            direction,
            score: 0,
            game_over: false,
            food,
        }
    }
}

fn load_setup(board_rep: Option<&str>) -> Result<BoardSetup, BoardInitError> {
    match board_rep {
        Some(compressed) => {
            let setup = decompress_board_str(compressed)?;
            info!(
                height = setup.board.get_height(),
                width = setup.board.get_width(),
                "initialized board from compressed representation"
            );
            Ok(setup)
        }
        None => {
            info!("initialized default board");
            Ok(BoardSetup::default_board())
        }
    }
}

impl SizeDeterminableGame for GameState {
    fn get_width(&self) -> usize {
        self.board.get_width()
    }

    fn get_height(&self) -> usize {
        self.board.get_height()
    }
}

impl SnakeHeadGettableGame for GameState {
    fn get_head_as_native_position(&self) -> CellIndex {
        self.snake_head
    }
}
