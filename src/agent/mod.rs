//! Move sources: where the round loop gets its target coordinates from.

mod random;
mod source;

pub use random::{mix_seed, ClockSeededSource, ScriptedSource, SeededSource};
pub use source::MoveSource;
