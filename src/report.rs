//! Result reporting: the text bar chart printed after a run and the JSON
//! report written next to it.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ReportError;
use crate::simulation::{SimulationConfig, Tally};

/// Render the tally as horizontal bars in the order p1, draw, p2, scaled so
/// the largest count spans `width` columns.
pub fn render_bar_chart(tally: &Tally, width: usize) -> String {
    let bars = [
        ("p1", tally.player_a_wins),
        ("draw", tally.draws),
        ("p2", tally.player_b_wins),
    ];
    let max = bars.iter().map(|&(_, count)| count).max().unwrap_or(0);

    let mut chart = String::new();
    for (label, count) in bars {
        let len = if max == 0 {
            0
        } else {
            (u128::from(count) * width as u128 / u128::from(max)) as usize
        };
        let bar = "#".repeat(len);
        chart.push_str(&format!("{label:<4} | {bar:<width$} {count}\n"));
    }
    chart
}

/// Summary of one simulation run, written as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub game: String,
    pub board_size: usize,
    pub center_first: bool,
    pub rounds: u64,
    pub player_a_wins: u64,
    pub player_b_wins: u64,
    pub draws: u64,
    pub average_moves: f32,
    pub elapsed_ms: u64,
}

impl SimulationReport {
    pub fn new(config: &SimulationConfig, tally: &Tally, elapsed: Duration) -> Self {
        SimulationReport {
            game: config.round.game.name().to_string(),
            board_size: config.round.game.board_size(),
            center_first: config.round.center_first,
            rounds: tally.rounds(),
            player_a_wins: tally.player_a_wins,
            player_b_wins: tally.player_b_wins,
            draws: tally.draws,
            average_moves: tally.average_moves(),
            elapsed_ms: elapsed.as_millis() as u64,
        }
    }

    /// Counts as printed to the console.
    pub fn summary(&self) -> String {
        format!(
            "Player 1 wins: {}\nPlayer 2 wins: {}\nDraws: {}",
            self.player_a_wins, self.player_b_wins, self.draws
        )
    }

    /// Write the report as pretty JSON, creating parent directories as needed.
    pub fn write_json(&self, path: &Path) -> Result<(), ReportError> {
        let write_err = |source| ReportError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(write_err)?;
        log::debug!("report written to {}", path.display());
        Ok(())
    }
}
