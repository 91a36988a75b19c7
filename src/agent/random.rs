use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::source::MoveSource;

fn draw<R: Rng>(rng: &mut R, span: usize) -> (usize, usize) {
    (rng.random_range(0..span), rng.random_range(0..span))
}

/// Mix a base seed with an index into a well-spread seed.
pub fn mix_seed(base_seed: u64, index: u64) -> u64 {
    // FNV-1a-inspired mixing
    let mut hash = base_seed ^ 0x517cc1b727220a95;
    hash = hash.wrapping_mul(0x100000001b3);
    hash ^= index;
    hash = hash.wrapping_mul(0x100000001b3);
    hash ^= index >> 32;
    hash
}

/// Draws every coordinate from a generator freshly seeded with the wall
/// clock, so rounds run back to back are not correlated.
#[derive(Debug, Default)]
pub struct ClockSeededSource {
    draws: u64,
}

impl ClockSeededSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MoveSource for ClockSeededSource {
    fn next_coord(&mut self, span: usize) -> (usize, usize) {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        // Two draws inside one clock tick still get distinct seeds.
        self.draws = self.draws.wrapping_add(1);
        let mut rng = StdRng::seed_from_u64(mix_seed(nanos, self.draws));
        draw(&mut rng, span)
    }

    fn name(&self) -> &str {
        "Clock"
    }
}

/// Deterministic source for reproducible runs and tests.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        SeededSource {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MoveSource for SeededSource {
    fn next_coord(&mut self, span: usize) -> (usize, usize) {
        draw(&mut self.rng, span)
    }

    fn name(&self) -> &str {
        "Seeded"
    }
}

/// Replays a fixed list of coordinates, cycling when it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    coords: Vec<(usize, usize)>,
    next: usize,
}

impl ScriptedSource {
    /// Panics if `coords` is empty.
    pub fn new(coords: Vec<(usize, usize)>) -> Self {
        assert!(!coords.is_empty(), "scripted source needs at least one coordinate");
        ScriptedSource { coords, next: 0 }
    }
}

impl MoveSource for ScriptedSource {
    fn next_coord(&mut self, _span: usize) -> (usize, usize) {
        let coord = self.coords[self.next];
        self.next = (self.next + 1) % self.coords.len();
        coord
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}
