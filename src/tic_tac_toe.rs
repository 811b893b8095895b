use std::fmt;

use crate::error::IllegalMove;
use crate::game::{Game, GameStatus, Move, Player, SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Empty cell carrying its 1-9 position label.
    Empty(u8),
    Occupied(Player),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty(0); SIZE]; SIZE];
        for (row, line) in cells.iter_mut().enumerate() {
            for (col, cell) in line.iter_mut().enumerate() {
                *cell = Self::label(row, col);
            }
        }
        Self { cells }
    }

    fn label(row: usize, col: usize) -> Cell {
        Cell::Empty((row * SIZE + col + 1) as u8)
    }

    pub fn cell(&self, mv: Move) -> Option<Cell> {
        self.cells.get(mv.row())?.get(mv.col()).copied()
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .flatten()
            .all(|cell| matches!(cell, Cell::Occupied(_)))
    }

    pub fn moves_played(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| matches!(cell, Cell::Occupied(_)))
            .count()
    }

    fn owned_by(&self, row: usize, col: usize, player: Player) -> bool {
        self.cells[row][col] == Cell::Occupied(player)
    }

    // Only lines through (row, col) can have just been completed.
    fn completes_line(&self, row: usize, col: usize, player: Player) -> bool {
        if row >= SIZE || col >= SIZE {
            return false;
        }
        if (0..SIZE).all(|i| self.owned_by(row, i, player)) {
            return true;
        }
        if (0..SIZE).all(|i| self.owned_by(i, col, player)) {
            return true;
        }
        if row == col && (0..SIZE).all(|i| self.owned_by(i, i, player)) {
            return true;
        }
        row + col == SIZE - 1 && (0..SIZE).all(|i| self.owned_by(i, SIZE - 1 - i, player))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Board {
    fn apply_move(&mut self, mv: Move, player: Player) -> Result<(), IllegalMove> {
        if !mv.in_bounds() {
            return Err(IllegalMove::OutOfRange {
                row: mv.row(),
                col: mv.col(),
            });
        }
        match self.cells[mv.row()][mv.col()] {
            Cell::Empty(_) => {
                self.cells[mv.row()][mv.col()] = Cell::Occupied(player);
                Ok(())
            }
            Cell::Occupied(_) => Err(IllegalMove::Occupied(mv)),
        }
    }

    fn undo_move(&mut self, mv: Move) {
        if mv.in_bounds() {
            self.cells[mv.row()][mv.col()] = Self::label(mv.row(), mv.col());
        }
    }

    fn legal_moves(&self) -> Vec<Move> {
        (1..=SIZE * SIZE)
            .filter_map(|position| Move::from_position(position).ok())
            .filter(|mv| matches!(self.cells[mv.row()][mv.col()], Cell::Empty(_)))
            .collect()
    }

    fn status(&self, row: usize, col: usize, last_player: Player) -> GameStatus {
        if self.completes_line(row, col, last_player) {
            GameStatus::won_by(last_player)
        } else if self.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "-------------")?;
        for row in &self.cells {
            write!(f, "|")?;
            for cell in row {
                match cell {
                    Cell::Empty(label) => write!(f, " {} |", label)?,
                    Cell::Occupied(player) => write!(f, " {} |", player.mark())?,
                }
            }
            writeln!(f)?;
            writeln!(f, "-------------")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(board: &mut Board, moves: &[(usize, Player)]) {
        for &(position, player) in moves {
            board
                .apply_move(Move::from_position(position).unwrap(), player)
                .unwrap();
        }
    }

    #[test]
    fn test_new() {
        let board = Board::new();
        assert_eq!(board.cell(Move::new(0, 0)), Some(Cell::Empty(1)));
        assert_eq!(board.cell(Move::new(1, 1)), Some(Cell::Empty(5)));
        assert_eq!(board.cell(Move::new(2, 2)), Some(Cell::Empty(9)));
        assert_eq!(board.cell(Move::new(3, 0)), None);
        assert_eq!(board.moves_played(), 0);
        assert_eq!(board.legal_moves().len(), 9);
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_apply_move() {
        let mut board = Board::new();
        assert!(board.apply_move(Move::new(0, 0), Player::Human).is_ok());
        assert_eq!(board.cell(Move::new(0, 0)), Some(Cell::Occupied(Player::Human)));
        assert_eq!(board.moves_played(), 1);

        let before = board.clone();
        assert_eq!(
            board.apply_move(Move::new(0, 0), Player::Computer),
            Err(IllegalMove::Occupied(Move::new(0, 0)))
        );
        assert_eq!(board, before);

        assert_eq!(
            board.apply_move(Move::new(0, 3), Player::Computer),
            Err(IllegalMove::OutOfRange { row: 0, col: 3 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_undo_move() {
        let mut board = Board::new();
        play(&mut board, &[(2, Player::Human)]);
        let before = board.clone();
        let moves_before = board.legal_moves();

        let mv = Move::new(2, 1);
        board.apply_move(mv, Player::Computer).unwrap();
        assert!(!board.legal_moves().contains(&mv));
        board.undo_move(mv);

        assert_eq!(board, before);
        assert_eq!(board.cell(mv), Some(Cell::Empty(8)));
        assert_eq!(board.legal_moves(), moves_before);
    }

    #[test]
    fn test_legal_moves_order() {
        let mut board = Board::new();
        play(&mut board, &[(5, Player::Computer), (1, Player::Human), (9, Player::Computer)]);
        let positions: Vec<usize> = board.legal_moves().iter().map(Move::position).collect();
        assert_eq!(positions, vec![2, 3, 4, 6, 7, 8]);
    }

    #[test]
    fn test_status_lines() {
        let lines: [[usize; 3]; 8] = [
            [1, 2, 3],
            [4, 5, 6],
            [7, 8, 9],
            [1, 4, 7],
            [2, 5, 8],
            [3, 6, 9],
            [1, 5, 9],
            [3, 5, 7],
        ];
        for line in lines {
            for player in [Player::Human, Player::Computer] {
                let mut board = Board::new();
                for &position in &line {
                    board
                        .apply_move(Move::from_position(position).unwrap(), player)
                        .unwrap();
                }
                for &position in &line {
                    let mv = Move::from_position(position).unwrap();
                    assert_eq!(
                        board.status(mv.row(), mv.col(), player),
                        GameStatus::won_by(player),
                        "line {:?} via {}",
                        line,
                        position
                    );
                    assert_eq!(
                        board.status(mv.row(), mv.col(), player.opponent()),
                        GameStatus::InProgress
                    );
                }
            }
        }
    }

    #[test]
    fn test_status_examples() {
        let mut board = Board::new();
        play(&mut board, &[(1, Player::Human), (2, Player::Human), (3, Player::Human)]);
        assert_eq!(board.status(0, 2, Player::Human), GameStatus::HumanWin);

        let mut board = Board::new();
        play(&mut board, &[(1, Player::Computer), (5, Player::Computer), (9, Player::Computer)]);
        assert_eq!(board.status(2, 2, Player::Computer), GameStatus::ComputerWin);
    }

    #[test]
    fn test_status_only_checks_last_move_lines() {
        let mut board = Board::new();
        play(
            &mut board,
            &[(1, Player::Human), (2, Player::Human), (3, Player::Human), (9, Player::Computer)],
        );
        // (2, 2) sits on no line of the completed top row.
        assert_eq!(board.status(2, 2, Player::Human), GameStatus::InProgress);
    }

    #[test]
    fn test_draw() {
        // X O X / X O O / O X X
        let (x, o) = (Player::Human, Player::Computer);
        let mut board = Board::new();
        play(
            &mut board,
            &[(1, x), (2, o), (3, x), (4, x), (5, o), (6, o), (7, o), (8, x), (9, x)],
        );
        assert!(board.is_full());
        assert!(board.legal_moves().is_empty());
        for position in 1..=9 {
            let mv = Move::from_position(position).unwrap();
            let Some(Cell::Occupied(player)) = board.cell(mv) else {
                panic!("cell {} should be occupied", position);
            };
            assert_eq!(board.status(mv.row(), mv.col(), player), GameStatus::Draw);
        }
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        play(&mut board, &[(1, Player::Human), (5, Player::Computer)]);
        let expected = "\
-------------
| X | 2 | 3 |
-------------
| 4 | O | 6 |
-------------
| 7 | 8 | 9 |
-------------
";
        assert_eq!(board.to_string(), expected);
    }
}
