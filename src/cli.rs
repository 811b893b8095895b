//! Command-line arguments for the console game.

use clap::{Parser, ValueEnum};
use rand::Rng;

use crate::game::Player;

/// Play tic-tac-toe against a minimax computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Who makes the opening move
    #[arg(short, long, value_enum, default_value_t = FirstMover::Computer)]
    pub first: FirstMover,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstMover {
    Human,
    Computer,
    /// Flip a coin
    Random,
}

impl FirstMover {
    pub fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> Player {
        match self {
            FirstMover::Human => Player::Human,
            FirstMover::Computer => Player::Computer,
            FirstMover::Random if rng.gen_bool(0.5) => Player::Human,
            FirstMover::Random => Player::Computer,
        }
    }
}
