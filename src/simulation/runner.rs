use std::thread;

use crate::agent::{mix_seed, ClockSeededSource, MoveSource, SeededSource};
use crate::error::GameError;
use crate::game::{GameOutcome, Player};

use super::round::{RoundConfig, RoundDriver};
use super::tally::Tally;

/// Simulator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub round: RoundConfig,
    pub rounds: u64,
    /// Worker threads; each owns its own driver and move source.
    pub threads: usize,
    /// Base seed for reproducible runs. `None` reseeds from the clock on
    /// every draw.
    pub seed: Option<u64>,
    /// Log progress every this many rounds per worker; 0 disables it.
    pub log_interval: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            round: RoundConfig::default(),
            rounds: 1000,
            threads: 1,
            seed: None,
            log_interval: 0,
        }
    }
}

/// Runs many independent rounds and tallies their outcomes.
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    pub fn new(config: SimulationConfig) -> Result<Self, GameError> {
        config.round.game.validate()?;
        if config.threads == 0 {
            return Err(GameError::InvalidConfiguration(
                "at least one worker thread is required".into(),
            ));
        }
        Ok(Simulator { config })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Move source for worker `worker`, per the seed setting.
    pub fn source_for(&self, worker: usize) -> Box<dyn MoveSource> {
        match self.config.seed {
            Some(seed) => Box::new(SeededSource::new(mix_seed(seed, worker as u64))),
            None => Box::new(ClockSeededSource::new()),
        }
    }

    /// Run all configured rounds.
    pub fn run(&self) -> Result<Tally, GameError> {
        self.run_with(|worker| self.source_for(worker))
    }

    /// Run all configured rounds, building each worker's move source with
    /// `make_source`.
    pub fn run_with<S>(&self, make_source: S) -> Result<Tally, GameError>
    where
        S: Fn(usize) -> Box<dyn MoveSource> + Sync,
    {
        let threads = self.config.threads;
        log::info!(
            "Simulating {} {} round(s) on {} thread(s)...",
            self.config.rounds,
            self.config.round.game.name(),
            threads
        );

        if threads == 1 {
            return self.run_worker(0, self.config.rounds, make_source(0));
        }

        let make_source = &make_source;
        let results: Vec<Result<Tally, GameError>> = thread::scope(|scope| {
            let handles: Vec<_> = (0..threads)
                .map(|worker| {
                    let rounds = self.worker_share(worker);
                    scope.spawn(move || self.run_worker(worker, rounds, make_source(worker)))
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
                .collect()
        });

        let mut tally = Tally::new();
        for worker_tally in results {
            tally.merge(&worker_tally?);
        }
        Ok(tally)
    }

    /// Rounds assigned to `worker`; shares differ by at most one.
    pub fn worker_share(&self, worker: usize) -> u64 {
        let total = self.config.rounds;
        let threads = self.config.threads as u64;
        let w = worker as u64;
        total * (w + 1) / threads - total * w / threads
    }

    fn run_worker(
        &self,
        worker: usize,
        rounds: u64,
        source: Box<dyn MoveSource>,
    ) -> Result<Tally, GameError> {
        let mut driver = RoundDriver::new(self.config.round.clone(), source)?;
        let mut tally = Tally::new();
        let interval = self.config.log_interval;

        for round in 1..=rounds {
            let result = driver.play_round_traced();
            log::debug!(
                "worker {worker} round {round}: outcome {} after {} moves ({} redraws)",
                result.outcome.code(),
                result.moves,
                result.rejected_draws
            );
            tally.record(&result);

            if interval > 0 && round % interval == 0 {
                log::info!(
                    "worker {worker}: {round}/{rounds} | p1: {:.1}% | draw: {:.1}% | p2: {:.1}% | avg_len: {:.1}",
                    tally.rate(GameOutcome::Winner(Player::A)) * 100.0,
                    tally.rate(GameOutcome::Draw) * 100.0,
                    tally.rate(GameOutcome::Winner(Player::B)) * 100.0,
                    tally.average_moves(),
                );
            }
        }

        Ok(tally)
    }
}
