use std::fmt;

use super::lines::{self, Grid, LINE_LEN};
use super::player::Player;
use crate::error::GameError;

/// Smallest board that can hold a line.
pub const MIN_SIZE: usize = LINE_LEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerA,
    PlayerB,
}

impl Cell {
    /// Player holding this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerA => Some(Player::A),
            Cell::PlayerB => Some(Player::B),
        }
    }

    fn symbol(self) -> char {
        self.owner().map_or('.', Player::symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell ({x}, {y}) is occupied or off the board")]
    IllegalMove { x: usize, y: usize },

    #[error("column ({x}, {y}) is full")]
    ColumnFull { x: usize, y: usize },
}

/// Square tic-tac-toe grid, indexed `(x, y)` with `x` as the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board. Any size that fits a line is accepted; which
    /// sizes a game may use is decided by [`GameKind`](super::GameKind).
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size < MIN_SIZE {
            return Err(GameError::InvalidConfiguration(format!(
                "board size {size} is smaller than {MIN_SIZE}"
            )));
        }
        Ok(Self::empty(size))
    }

    pub(crate) fn empty(size: usize) -> Self {
        Board {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    /// Get the cell at a position, `None` when off the board
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.in_bounds(x, y).then(|| self.cells[x * self.size + y])
    }

    /// Mark an empty cell for `player`. Fails without touching the board if
    /// the cell is taken or out of range.
    pub fn place(&mut self, player: Player, x: usize, y: usize) -> Result<(), MoveError> {
        if self.get(x, y) != Some(Cell::Empty) {
            return Err(MoveError::IllegalMove { x, y });
        }
        self.cells[x * self.size + y] = player.to_cell();
        Ok(())
    }

    /// Owner of the first three-in-a-row on this board
    pub fn check_lines(&self) -> Option<Player> {
        lines::check_lines(self)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Geometric center, used by the center-first scenario
    pub fn center(&self) -> (usize, usize) {
        (self.size / 2, self.size / 2)
    }
}

impl Grid for Board {
    fn size(&self) -> usize {
        self.size
    }

    fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[x * self.size + y]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            let line: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, marks: &[(Player, usize, usize)]) -> Board {
        let mut board = Board::new(size).unwrap();
        for &(p, x, y) in marks {
            board.place(p, x, y).unwrap();
        }
        board
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(5).unwrap();
        for x in 0..5 {
            for y in 0..5 {
                assert_eq!(board.get(x, y), Some(Cell::Empty));
            }
        }
        assert_eq!(board.occupied(), 0);
    }

    #[test]
    fn test_new_rejects_tiny_board() {
        assert!(matches!(
            Board::new(2),
            Err(GameError::InvalidConfiguration(_))
        ));
        // Even sizes are a game policy question, not a board one.
        assert!(Board::new(4).is_ok());
    }

    #[test]
    fn test_place_marks_cell() {
        let mut board = Board::new(3).unwrap();
        board.place(Player::B, 2, 1).unwrap();
        assert_eq!(board.get(2, 1), Some(Cell::PlayerB));
        assert_eq!(board.occupied(), 1);
    }

    #[test]
    fn test_place_on_occupied_cell_fails_without_change() {
        let mut board = board_with(3, &[(Player::A, 1, 1)]);
        let before = board.clone();
        assert_eq!(
            board.place(Player::B, 1, 1),
            Err(MoveError::IllegalMove { x: 1, y: 1 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_off_board_fails() {
        let mut board = Board::new(3).unwrap();
        assert_eq!(
            board.place(Player::A, 3, 0),
            Err(MoveError::IllegalMove { x: 3, y: 0 })
        );
        assert_eq!(board.get(3, 0), None);
        assert_eq!(board.occupied(), 0);
    }

    #[test]
    fn test_horizontal_win() {
        let board = board_with(3, &[(Player::A, 0, 0), (Player::A, 0, 1), (Player::A, 0, 2)]);
        assert_eq!(board.check_lines(), Some(Player::A));
    }

    #[test]
    fn test_vertical_win() {
        let board = board_with(5, &[(Player::B, 2, 4), (Player::B, 3, 4), (Player::B, 4, 4)]);
        assert_eq!(board.check_lines(), Some(Player::B));
    }

    #[test]
    fn test_diagonal_win_mid_board() {
        let board = board_with(7, &[(Player::A, 2, 3), (Player::A, 3, 4), (Player::A, 4, 5)]);
        assert_eq!(board.check_lines(), Some(Player::A));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = board_with(5, &[(Player::B, 4, 0), (Player::B, 3, 1), (Player::B, 2, 2)]);
        assert_eq!(board.check_lines(), Some(Player::B));
    }

    #[test]
    fn test_no_win_with_two() {
        let board = board_with(7, &[(Player::A, 6, 5), (Player::A, 6, 6)]);
        assert_eq!(board.check_lines(), None);
    }

    #[test]
    fn test_three_wins_on_large_board() {
        // The line length never grows with the board.
        let board = board_with(7, &[(Player::B, 0, 4), (Player::B, 0, 5), (Player::B, 0, 6)]);
        assert_eq!(board.check_lines(), Some(Player::B));
    }

    #[test]
    fn test_full_board_without_line_is_draw_shape() {
        use Player::{A, B};
        let board = board_with(
            3,
            &[
                (B, 0, 0), (A, 0, 1), (B, 0, 2),
                (B, 1, 0), (A, 1, 1), (A, 1, 2),
                (A, 2, 0), (B, 2, 1), (B, 2, 2),
            ],
        );
        assert!(board.is_full());
        assert_eq!(board.check_lines(), None);
    }

    #[test]
    fn test_center() {
        assert_eq!(Board::new(3).unwrap().center(), (1, 1));
        assert_eq!(Board::new(5).unwrap().center(), (2, 2));
        assert_eq!(Board::new(7).unwrap().center(), (3, 3));
    }

    #[test]
    fn test_display() {
        let board = board_with(3, &[(Player::A, 0, 0), (Player::B, 2, 2)]);
        assert_eq!(board.to_string(), "O . .\n. . .\n. . X\n");
    }
}
