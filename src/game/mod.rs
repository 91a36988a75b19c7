//! Core game logic: the planar board, the gravity cube, shared line
//! detection, players and round outcomes.

mod board;
mod cube;
pub mod lines;
mod player;
mod state;

pub use board::{Board, Cell, MoveError, MIN_SIZE};
pub use cube::{Axis, Cube, CubeSlice, BOTTOM_LAYER, CUBE_SIZE, SPACE_DIRECTIONS};
pub use lines::{check_lines, Grid, LINE_LEN, PLANAR_DIRECTIONS};
pub use player::Player;
pub use state::{GameKind, GameOutcome, Playfield, SUPPORTED_SIZES};
