use std::thread;
use std::time::Duration;

use crate::agent::MoveSource;
use crate::error::GameError;
use crate::game::{Board, Cube, GameKind, GameOutcome, Playfield, Player};

/// Settings for every round a driver plays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundConfig {
    pub game: GameKind,
    /// Force player A's opening move onto the center.
    pub center_first: bool,
    /// Sleep before each random draw. Affects timing only.
    pub pacing_delay: Duration,
}

impl Default for RoundConfig {
    fn default() -> Self {
        RoundConfig {
            game: GameKind::Planar { size: 3 },
            center_first: false,
            pacing_delay: Duration::ZERO,
        }
    }
}

/// Result of playing a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    pub outcome: GameOutcome,
    /// Marks placed, including a forced center opening.
    pub moves: usize,
    /// Draws rejected because the cell or column was taken.
    pub rejected_draws: u64,
}

/// Plays rounds between two random players, one fresh board per round.
pub struct RoundDriver {
    config: RoundConfig,
    source: Box<dyn MoveSource>,
}

impl RoundDriver {
    pub fn new(config: RoundConfig, source: Box<dyn MoveSource>) -> Result<Self, GameError> {
        config.game.validate()?;
        Ok(RoundDriver { config, source })
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Play one round from an empty board and return its outcome.
    pub fn play_round(&mut self) -> GameOutcome {
        self.play_round_traced().outcome
    }

    /// Play one round from an empty board, keeping move statistics.
    pub fn play_round_traced(&mut self) -> RoundResult {
        match self.config.game {
            GameKind::Planar { size } => {
                let (result, board) = self.play_on(Board::empty(size));
                log::trace!("final board:\n{board}");
                result
            }
            GameKind::Cubic => {
                let (result, cube) = self.play_on(Cube::new());
                log::trace!("final cube:\n{cube}");
                result
            }
        }
    }

    /// Put the forced opening on an empty field, if configured. Returns the
    /// player to move next.
    pub fn open<F: Playfield>(&self, field: &mut F) -> Player {
        if self.config.center_first {
            let (x, y) = field.center();
            if field.apply(Player::A, x, y).is_ok() {
                return Player::B;
            }
        }
        Player::A
    }

    /// Play `field` to a decision. The field must start empty; it is handed
    /// back in its final state.
    pub fn play_on<F: Playfield>(&mut self, mut field: F) -> (RoundResult, F) {
        let mut player = self.open(&mut field);
        let mut moves = usize::from(player == Player::B);
        let mut rejected_draws = 0;

        loop {
            let (x, y) = self.draw(field.span());
            if let Err(err) = field.apply(player, x, y) {
                rejected_draws += 1;
                log::trace!("{} redraws: {err}", player.name());
                continue;
            }
            moves += 1;

            if let Some(outcome) = field.outcome() {
                let result = RoundResult {
                    outcome,
                    moves,
                    rejected_draws,
                };
                return (result, field);
            }
            player = player.other();
        }
    }

    fn draw(&mut self, span: usize) -> (usize, usize) {
        if !self.config.pacing_delay.is_zero() {
            thread::sleep(self.config.pacing_delay);
        }
        self.source.next_coord(span)
    }
}
