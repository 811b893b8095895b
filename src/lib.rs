//! Tic-tac-toe against a computer that searches the full game tree with
//! minimax.
//!
//! [`Board`] holds the position and answers win/draw queries for the last
//! move; [`Minimax`] picks moves; [`Match`] strings the two together for a
//! whole game.

pub mod cli;
pub mod error;
pub mod game;
pub mod minimax;
pub mod session;
pub mod tic_tac_toe;

pub use error::{GameError, IllegalMove, ParsePositionError};
pub use game::{Game, GameStatus, Move, Player};
pub use minimax::Minimax;
pub use session::Match;
pub use tic_tac_toe::{Board, Cell};

/// A fresh board with cells labelled 1-9.
pub fn new_board() -> Board {
    Board::new()
}
