use super::{Board, Cube, MoveError, Player, CUBE_SIZE};
use crate::error::GameError;

/// Planar board sizes a round may be configured with.
pub const SUPPORTED_SIZES: [usize; 3] = [3, 5, 7];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

impl GameOutcome {
    /// Result code handed to tallying code: 1 and 2 for a player win, 3 for a
    /// draw.
    pub fn code(self) -> u8 {
        match self {
            GameOutcome::Winner(Player::A) => 1,
            GameOutcome::Winner(Player::B) => 2,
            GameOutcome::Draw => 3,
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Winner(p) => Some(p),
            GameOutcome::Draw => None,
        }
    }
}

/// Which game a round is played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    Planar { size: usize },
    Cubic,
}

impl GameKind {
    pub fn validate(self) -> Result<(), GameError> {
        match self {
            GameKind::Planar { size } if !SUPPORTED_SIZES.contains(&size) => {
                Err(GameError::InvalidConfiguration(format!(
                    "unsupported board size {size} (expected one of {SUPPORTED_SIZES:?})"
                )))
            }
            _ => Ok(()),
        }
    }

    /// Side length of the board, or of the cube's layers
    pub fn board_size(self) -> usize {
        match self {
            GameKind::Planar { size } => size,
            GameKind::Cubic => CUBE_SIZE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GameKind::Planar { .. } => "planar",
            GameKind::Cubic => "cubic",
        }
    }
}

/// Game surface the round loop drives: one mutation primitive plus the
/// terminal checks.
pub trait Playfield {
    /// Exclusive upper bound for each drawn coordinate.
    fn span(&self) -> usize;

    /// Target of the forced opening move.
    fn center(&self) -> (usize, usize);

    fn apply(&mut self, player: Player, x: usize, y: usize) -> Result<(), MoveError>;

    fn winner(&self) -> Option<Player>;

    fn is_full(&self) -> bool;

    /// Win first, then a full field is a draw; `None` while play continues.
    fn outcome(&self) -> Option<GameOutcome> {
        if let Some(player) = self.winner() {
            Some(GameOutcome::Winner(player))
        } else if self.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}

impl Playfield for Board {
    fn span(&self) -> usize {
        self.size()
    }

    fn center(&self) -> (usize, usize) {
        Board::center(self)
    }

    fn apply(&mut self, player: Player, x: usize, y: usize) -> Result<(), MoveError> {
        self.place(player, x, y)
    }

    fn winner(&self) -> Option<Player> {
        self.check_lines()
    }

    fn is_full(&self) -> bool {
        Board::is_full(self)
    }
}

impl Playfield for Cube {
    fn span(&self) -> usize {
        CUBE_SIZE
    }

    fn center(&self) -> (usize, usize) {
        Cube::center(self)
    }

    fn apply(&mut self, player: Player, x: usize, y: usize) -> Result<(), MoveError> {
        self.drop_piece(player, x, y).map(|_| ())
    }

    fn winner(&self) -> Option<Player> {
        self.check_win()
    }

    fn is_full(&self) -> bool {
        Cube::is_full(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_codes() {
        assert_eq!(GameOutcome::Winner(Player::A).code(), 1);
        assert_eq!(GameOutcome::Winner(Player::B).code(), 2);
        assert_eq!(GameOutcome::Draw.code(), 3);
        assert_eq!(GameOutcome::Draw.winner(), None);
    }

    #[test]
    fn test_game_kind_validation() {
        for size in SUPPORTED_SIZES {
            assert!(GameKind::Planar { size }.validate().is_ok());
        }
        assert!(GameKind::Planar { size: 4 }.validate().is_err());
        assert!(GameKind::Planar { size: 9 }.validate().is_err());
        assert!(GameKind::Cubic.validate().is_ok());
        assert_eq!(GameKind::Cubic.board_size(), 5);
    }

    #[test]
    fn test_outcome_prefers_win_over_full() {
        let mut board = Board::new(3).unwrap();
        assert_eq!(board.outcome(), None);
        for (x, y) in [(0, 0), (0, 1), (0, 2)] {
            board.place(Player::A, x, y).unwrap();
        }
        assert_eq!(board.outcome(), Some(GameOutcome::Winner(Player::A)));
    }

    #[test]
    fn test_cube_apply_uses_gravity() {
        let mut cube = Cube::new();
        cube.apply(Player::B, 3, 3).unwrap();
        assert_eq!(cube.column_height(3, 3), 1);
        assert_eq!(cube.span(), 5);
    }
}
