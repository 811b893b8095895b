use std::io::{self, BufRead, Write};

use clap::Parser;

use tictactoe_minimax::cli::Cli;
use tictactoe_minimax::{GameError, GameStatus, Match, Minimax, Move, Player};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let first = cli.first.resolve(&mut rand::thread_rng());
    let mut game = Match::new(first);
    let engine = Minimax::new();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Welcome to Tic Tac Toe!");

    loop {
        print!("{}", game.board());

        match game.status() {
            GameStatus::HumanWin => {
                println!("Player {} wins!", Player::Human);
                break;
            }
            GameStatus::ComputerWin => {
                println!("Robot ({}) wins!", Player::Computer);
                break;
            }
            GameStatus::Draw => {
                println!("It's a draw!");
                break;
            }
            GameStatus::InProgress => {}
        }

        match game.to_move() {
            Player::Computer => {
                println!("Robot {} turn:", Player::Computer);
                let mv = game.play_computer(&engine)?;
                println!("Robot plays {}", mv.position());
            }
            Player::Human => {
                println!("Player {} turn (1-9, 'hint' or 'quit'):", Player::Human);
                loop {
                    io::stdout().flush()?;
                    let Some(line) = lines.next() else {
                        return Ok(());
                    };
                    let input = line?;
                    match input.trim() {
                        "quit" | "q" => return Ok(()),
                        "hint" => {
                            let hint = game.hint(&engine)?;
                            println!("Try {}", hint.position());
                            continue;
                        }
                        _ => {}
                    }

                    let mv = match input.parse::<Move>() {
                        Ok(mv) => mv,
                        Err(err) => {
                            println!("Invalid move: {}", err);
                            continue;
                        }
                    };
                    match game.play_human(mv) {
                        Ok(_) => break,
                        Err(GameError::IllegalMove(_)) => {
                            println!("Invalid move. Cell is already taken.");
                        }
                        Err(err) => return Err(err.into()),
                    }
                }
            }
        }
    }

    Ok(())
}
