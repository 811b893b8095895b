//! A single match between the human and the computer.
//!
//! The player to move is derived from the number of moves played and who
//! opened; nothing else tracks turns.

use anyhow::Result;
use log::info;

use crate::error::GameError;
use crate::game::{Game, GameStatus, Move, Player};
use crate::minimax::Minimax;
use crate::tic_tac_toe::Board;

#[derive(Debug, Clone)]
pub struct Match {
    board: Board,
    first: Player,
    history: Vec<Move>,
    status: GameStatus,
}

impl Match {
    pub fn new(first: Player) -> Self {
        Self {
            board: Board::new(),
            first,
            history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn first_mover(&self) -> Player {
        self.first
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn to_move(&self) -> Player {
        if self.history.len() % 2 == 0 {
            self.first
        } else {
            self.first.opponent()
        }
    }

    /// Plays `mv` for whoever is to move and returns the new status.
    pub fn play(&mut self, mv: Move) -> Result<GameStatus, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }
        let player = self.to_move();
        self.board.apply_move(mv, player)?;
        self.history.push(mv);
        self.status = self.board.status(mv.row(), mv.col(), player);
        info!("{:?} played {} -> {:?}", player, mv, self.status);
        Ok(self.status)
    }

    pub fn play_human(&mut self, mv: Move) -> Result<GameStatus, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }
        if self.to_move() != Player::Human {
            return Err(GameError::NotYourTurn);
        }
        self.play(mv)
    }

    /// Lets the engine choose and commit the computer's move.
    pub fn play_computer(&mut self, engine: &Minimax) -> Result<Move> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver.into());
        }
        let mv = engine.best_move(&mut self.board, Player::Computer)?;
        self.play(mv)?;
        Ok(mv)
    }

    /// The human's best move in the current position, not committed.
    pub fn hint(&mut self, engine: &Minimax) -> Result<Move> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver.into());
        }
        engine.best_move(&mut self.board, Player::Human)
    }
}
