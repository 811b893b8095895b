use std::fmt;
use std::str::FromStr;

use crate::error::{IllegalMove, ParsePositionError};

/// Side length of the board.
pub const SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Mark drawn on the board for this player.
    pub fn mark(self) -> char {
        match self {
            Player::Human => 'X',
            Player::Computer => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.mark())
    }
}

/// A (row, col) pair. Coordinates are not range checked here; the board
/// rejects anything outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Translates a 1-based position (1-9, row-major) into a move.
    pub fn from_position(position: usize) -> Result<Self, ParsePositionError> {
        if !(1..=SIZE * SIZE).contains(&position) {
            return Err(ParsePositionError::OutOfRange(position));
        }
        Ok(Self::new((position - 1) / SIZE, (position - 1) % SIZE))
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn in_bounds(&self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// The 1-based position label of this cell.
    pub fn position(&self) -> usize {
        self.row * SIZE + self.col + 1
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (row {}, col {})", self.position(), self.row, self.col)
    }
}

impl FromStr for Move {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let position: usize = token
            .parse()
            .map_err(|_| ParsePositionError::InvalidFormat(token.to_string()))?;
        Move::from_position(position)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    HumanWin,
    ComputerWin,
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::HumanWin => Some(Player::Human),
            GameStatus::ComputerWin => Some(Player::Computer),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    pub(crate) fn won_by(player: Player) -> Self {
        match player {
            Player::Human => GameStatus::HumanWin,
            Player::Computer => GameStatus::ComputerWin,
        }
    }
}

/// Position operations the search engine needs. Every `apply_move` made by
/// the engine is paired with an `undo_move` on the same cell before it
/// returns.
pub trait Game {
    fn apply_move(&mut self, mv: Move, player: Player) -> Result<(), IllegalMove>;

    fn undo_move(&mut self, mv: Move);

    /// Empty cells in row-major order. This order breaks ties in search.
    fn legal_moves(&self) -> Vec<Move>;

    /// Status after `last_player` placed a mark at (`row`, `col`).
    fn status(&self, row: usize, col: usize, last_player: Player) -> GameStatus;
}
