use serde::{Deserialize, Serialize};

use super::round::RoundResult;
use crate::game::{GameOutcome, Player};

/// Aggregate counts over many rounds. Workers each keep their own and the
/// caller merges them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub player_a_wins: u64,
    pub player_b_wins: u64,
    pub draws: u64,
    pub total_moves: u64,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_outcome(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Winner(Player::A) => self.player_a_wins += 1,
            GameOutcome::Winner(Player::B) => self.player_b_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    pub fn record(&mut self, result: &RoundResult) {
        self.record_outcome(result.outcome);
        self.total_moves += result.moves as u64;
    }

    pub fn merge(&mut self, other: &Tally) {
        self.player_a_wins += other.player_a_wins;
        self.player_b_wins += other.player_b_wins;
        self.draws += other.draws;
        self.total_moves += other.total_moves;
    }

    pub fn rounds(&self) -> u64 {
        self.player_a_wins + self.player_b_wins + self.draws
    }

    pub fn count(&self, outcome: GameOutcome) -> u64 {
        match outcome {
            GameOutcome::Winner(Player::A) => self.player_a_wins,
            GameOutcome::Winner(Player::B) => self.player_b_wins,
            GameOutcome::Draw => self.draws,
        }
    }

    /// Share of rounds that ended with `outcome`.
    pub fn rate(&self, outcome: GameOutcome) -> f32 {
        let rounds = self.rounds();
        if rounds == 0 {
            return 0.0;
        }
        self.count(outcome) as f32 / rounds as f32
    }

    pub fn average_moves(&self) -> f32 {
        let rounds = self.rounds();
        if rounds == 0 {
            return 0.0;
        }
        self.total_moves as f32 / rounds as f32
    }
}
