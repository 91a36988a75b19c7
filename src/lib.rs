//! # ttt-sim
//!
//! Random-play simulator for planar N×N tic-tac-toe (N ∈ {3, 5, 7}) and
//! 5×5×5 gravity "qubic". Two players place uniformly random legal marks,
//! optionally with player 1 forced onto the center first, and outcomes are
//! tallied over many rounds.
//!
//! ## Modules
//!
//! - [`game`] - Board, cube, shared three-in-a-row detection, outcomes
//! - [`agent`] - Move sources: clock-seeded, seeded, scripted
//! - [`simulation`] - Round driver, tally, multi-threaded runner
//! - [`report`] - Text bar chart and JSON result report
//! - [`prompt`] - Interactive setup questions
//! - [`config`] - TOML configuration loading and validation
//! - [`error`] - Structured error types

pub mod agent;
pub mod config;
pub mod error;
pub mod game;
pub mod prompt;
pub mod report;
pub mod simulation;
