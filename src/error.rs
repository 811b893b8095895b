//! Error types for board and match operations.

use crate::game::Move;

/// A move the board refuses. The board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("cell {} is already taken", .0.position())]
    Occupied(Move),

    #[error("cell ({row}, {col}) is outside the board")]
    OutOfRange { row: usize, col: usize },
}

/// Failure to read a 1-9 position from user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsePositionError {
    #[error("'{0}' is not a number between 1 and 9")]
    InvalidFormat(String),

    #[error("{0} is not between 1 and 9")]
    OutOfRange(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    IllegalMove(#[from] IllegalMove),

    #[error("the game is already over")]
    GameOver,

    #[error("it is not the human's turn")]
    NotYourTurn,
}
