//! Interactive setup: asks for scenario, board size and round count, and
//! asks again until each answer is valid.

use std::io::{self, BufRead, Write};

use crate::config::{GameName, Scenario, SimulationSettings};
use crate::game::SUPPORTED_SIZES;

/// Answers collected by [`ask_setup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupAnswers {
    pub scenario: Scenario,
    /// Only asked for planar scenarios.
    pub board_size: Option<usize>,
    pub rounds: u64,
}

impl SetupAnswers {
    pub fn apply(&self, settings: &mut SimulationSettings) {
        settings.apply_scenario(self.scenario);
        if let Some(size) = self.board_size {
            settings.board_size = size;
        }
        settings.rounds = self.rounds;
    }
}

pub fn ask_setup<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<SetupAnswers> {
    let scenario = ask(
        input,
        output,
        "Which scenario do you want to play (1/2/q1/q2)? ",
        "Incorrect scenario, try again!",
        |s| s.parse::<Scenario>().ok(),
    )?;

    let board_size = match scenario.game() {
        GameName::Planar => Some(ask(
            input,
            output,
            "How big should the board be (3/5/7)? ",
            "Incorrect board size, try again!",
            |s| s.parse::<usize>().ok().filter(|n| SUPPORTED_SIZES.contains(n)),
        )?),
        GameName::Cubic => None,
    };

    let rounds = ask(
        input,
        output,
        "How many games do you want to simulate? ",
        "Incorrect number of games, try again!",
        |s| s.parse().ok().filter(|&n: &u64| n > 0),
    )?;

    Ok(SetupAnswers {
        scenario,
        board_size,
        rounds,
    })
}

fn ask<R, W, T>(
    input: &mut R,
    output: &mut W,
    question: &str,
    retry: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> io::Result<T>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{question}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a valid answer was given",
            ));
        }
        if let Some(value) = parse(line.trim()) {
            return Ok(value);
        }
        writeln!(output, "{retry}")?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> (io::Result<SetupAnswers>, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let answers = ask_setup(&mut reader, &mut out);
        (answers, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_planar_answers() {
        let (answers, _) = run("2\n5\n100\n");
        assert_eq!(
            answers.unwrap(),
            SetupAnswers {
                scenario: Scenario::CenterFirst,
                board_size: Some(5),
                rounds: 100,
            }
        );
    }

    #[test]
    fn test_cubic_skips_board_size() {
        let (answers, out) = run("q1\n20\n");
        let answers = answers.unwrap();
        assert_eq!(answers.board_size, None);
        assert_eq!(answers.rounds, 20);
        assert!(!out.contains("How big"));
    }

    #[test]
    fn test_invalid_answers_are_asked_again() {
        let (answers, out) = run("x\n1\n4\nseven\n7\n0\n-3\n12\n");
        let answers = answers.unwrap();
        assert_eq!(answers.scenario, Scenario::Random);
        assert_eq!(answers.board_size, Some(7));
        assert_eq!(answers.rounds, 12);
        assert_eq!(out.matches("Incorrect scenario").count(), 1);
        assert_eq!(out.matches("Incorrect board size").count(), 2);
        assert_eq!(out.matches("Incorrect number of games").count(), 2);
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let (answers, _) = run("1\n");
        assert_eq!(answers.unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_apply_answers() {
        let mut settings = SimulationSettings::default();
        SetupAnswers {
            scenario: Scenario::CubicCenterFirst,
            board_size: None,
            rounds: 9,
        }
        .apply(&mut settings);
        assert_eq!(settings.game, GameName::Cubic);
        assert!(settings.center_first);
        assert_eq!(settings.rounds, 9);
        assert_eq!(settings.board_size, 3);
    }
}
