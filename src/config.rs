use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::error::{ConfigError, GameError};
use crate::game::{GameKind, SUPPORTED_SIZES};
use crate::simulation::{RoundConfig, SimulationConfig};

/// Game named in the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameName {
    Planar,
    Cubic,
}

/// Scenario codes accepted on the command line: `1` planar random, `2`
/// planar center-first, `q1` cubic random, `q2` cubic center-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    Random,
    CenterFirst,
    CubicRandom,
    CubicCenterFirst,
}

impl Scenario {
    pub fn game(self) -> GameName {
        match self {
            Scenario::Random | Scenario::CenterFirst => GameName::Planar,
            Scenario::CubicRandom | Scenario::CubicCenterFirst => GameName::Cubic,
        }
    }

    pub fn center_first(self) -> bool {
        matches!(self, Scenario::CenterFirst | Scenario::CubicCenterFirst)
    }

    pub fn code(self) -> &'static str {
        match self {
            Scenario::Random => "1",
            Scenario::CenterFirst => "2",
            Scenario::CubicRandom => "q1",
            Scenario::CubicCenterFirst => "q2",
        }
    }
}

impl FromStr for Scenario {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Scenario::Random),
            "2" => Ok(Scenario::CenterFirst),
            "q1" => Ok(Scenario::CubicRandom),
            "q2" => Ok(Scenario::CubicCenterFirst),
            other => Err(GameError::InvalidConfiguration(format!(
                "unknown scenario '{other}' (expected 1, 2, q1 or q2)"
            ))),
        }
    }
}

/// `[simulation]` section.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    pub game: GameName,
    /// Planar only; the cube is always 5x5x5.
    pub board_size: usize,
    pub center_first: bool,
    pub rounds: u64,
    pub pacing_delay_ms: u64,
    pub threads: usize,
    pub log_interval: u64,
    pub seed: Option<u64>,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        SimulationSettings {
            game: GameName::Planar,
            board_size: 3,
            center_first: false,
            rounds: 1000,
            pacing_delay_ms: 0,
            threads: 1,
            log_interval: 0,
            seed: None,
        }
    }
}

impl SimulationSettings {
    pub fn apply_scenario(&mut self, scenario: Scenario) {
        self.game = scenario.game();
        self.center_first = scenario.center_first();
    }

    pub fn game_kind(&self) -> GameKind {
        match self.game {
            GameName::Planar => GameKind::Planar {
                size: self.board_size,
            },
            GameName::Cubic => GameKind::Cubic,
        }
    }

    pub fn to_simulation_config(&self) -> SimulationConfig {
        SimulationConfig {
            round: RoundConfig {
                game: self.game_kind(),
                center_first: self.center_first,
                pacing_delay: Duration::from_millis(self.pacing_delay_ms),
            },
            rounds: self.rounds,
            threads: self.threads,
            seed: self.seed,
            log_interval: self.log_interval,
        }
    }
}

/// `[report]` section.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    pub path: PathBuf,
    pub chart_width: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        ReportSettings {
            path: PathBuf::from("result.json"),
            chart_width: 50,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub simulation: SimulationSettings,
    pub report: ReportSettings,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sim = &self.simulation;
        if sim.game == GameName::Planar && !SUPPORTED_SIZES.contains(&sim.board_size) {
            return Err(ConfigError::Validation(format!(
                "simulation.board_size must be one of {SUPPORTED_SIZES:?}"
            )));
        }
        if sim.rounds == 0 {
            return Err(ConfigError::Validation(
                "simulation.rounds must be > 0".into(),
            ));
        }
        if sim.threads == 0 {
            return Err(ConfigError::Validation(
                "simulation.threads must be >= 1".into(),
            ));
        }
        if self.report.chart_width == 0 {
            return Err(ConfigError::Validation(
                "report.chart_width must be > 0".into(),
            ));
        }
        if self.report.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "report.path must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[simulation]
game = "cubic"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.simulation.game, GameName::Cubic);
        // Other fields should be defaults
        assert_eq!(config.simulation.rounds, 1000);
        assert_eq!(config.report.chart_width, 50);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.simulation.board_size, 3);
        assert_eq!(config.simulation.seed, None);
        assert_eq!(config.report.path, PathBuf::from("result.json"));
    }

    #[test]
    fn test_validation_rejects_unsupported_board_size() {
        let mut config = AppConfig::default();
        config.simulation.board_size = 4;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cubic_ignores_board_size() {
        let mut config = AppConfig::default();
        config.simulation.game = GameName::Cubic;
        config.simulation.board_size = 4;
        config.validate().expect("cube size is fixed");
        assert_eq!(config.simulation.game_kind(), GameKind::Cubic);
    }

    #[test]
    fn test_validation_rejects_zero_rounds() {
        let mut config = AppConfig::default();
        config.simulation.rounds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_threads() {
        let mut config = AppConfig::default();
        config.simulation.threads = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_chart_width() {
        let mut config = AppConfig::default();
        config.report.chart_width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.simulation.rounds, 1000);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[simulation]
board_size = 7
rounds = 500
seed = 42
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.simulation.board_size, 7);
        assert_eq!(config.simulation.rounds, 500);
        assert_eq!(config.simulation.seed, Some(42));
        // Others are defaults
        assert!(!config.simulation.center_first);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[simulation]\nrounds = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_rejects_unknown_game() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[simulation]\ngame = \"hex\"\n").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml().unwrap();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }

    #[test]
    fn test_scenario_codes() {
        for code in ["1", "2", "q1", "q2"] {
            let scenario: Scenario = code.parse().unwrap();
            assert_eq!(scenario.code(), code);
        }
        assert!("3".parse::<Scenario>().is_err());
        assert!("q3".parse::<Scenario>().is_err());
    }

    #[test]
    fn test_apply_scenario() {
        let mut settings = SimulationSettings::default();
        settings.apply_scenario(Scenario::CubicCenterFirst);
        assert_eq!(settings.game, GameName::Cubic);
        assert!(settings.center_first);

        settings.apply_scenario(Scenario::Random);
        assert_eq!(settings.game, GameName::Planar);
        assert!(!settings.center_first);
    }

    #[test]
    fn test_to_simulation_config() {
        let settings = SimulationSettings {
            board_size: 5,
            pacing_delay_ms: 2,
            threads: 3,
            ..SimulationSettings::default()
        };
        let sim = settings.to_simulation_config();
        assert_eq!(sim.round.game, GameKind::Planar { size: 5 });
        assert_eq!(sim.round.pacing_delay, Duration::from_millis(2));
        assert_eq!(sim.threads, 3);
    }
}
