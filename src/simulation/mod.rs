//! Round loop and the simulator that runs it many times: round driver,
//! outcome tally and the (optionally parallel) runner.

pub mod round;
pub mod runner;
pub mod tally;

pub use round::{RoundConfig, RoundDriver, RoundResult};
pub use runner::{SimulationConfig, Simulator};
pub use tally::Tally;
