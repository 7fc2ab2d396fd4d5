//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use neo_tictactoe::{EffectDurations, PlayerProfile, Roster};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "neo_tictactoe.toml";

/// Complete front-end configuration. Every field has a default.
#[derive(Debug, Clone, Default, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Effect durations.
    timing: TimingConfig,
    /// Player names and emoji.
    players: PlayersConfig,
    /// Rendering options.
    ui: UiConfig,
}

/// Effect durations in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Bounce on a placed mark.
    bounce_ms: u64,
    /// Pulse on the restart hint.
    restart_pulse_ms: u64,
    /// Confetti after a win.
    confetti_ms: u64,
    /// Shake after a draw.
    shake_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            bounce_ms: 400,
            restart_pulse_ms: 400,
            confetti_ms: 2500,
            shake_ms: 1000,
        }
    }
}

impl TimingConfig {
    /// Converts to controller durations.
    pub fn durations(&self) -> EffectDurations {
        EffectDurations {
            bounce: Duration::from_millis(self.bounce_ms),
            restart_pulse: Duration::from_millis(self.restart_pulse_ms),
            confetti: Duration::from_millis(self.confetti_ms),
            shake: Duration::from_millis(self.shake_ms),
        }
    }
}

/// Display names and emoji for both marks.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    /// Name for the first mark.
    a_name: String,
    /// Emoji for the first mark.
    a_emoji: String,
    /// Name for the second mark.
    b_name: String,
    /// Emoji for the second mark.
    b_emoji: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        let roster = Roster::default();
        Self {
            a_name: roster.a().name().clone(),
            a_emoji: roster.a().emoji().clone(),
            b_name: roster.b().name().clone(),
            b_emoji: roster.b().emoji().clone(),
        }
    }
}

impl PlayersConfig {
    /// Builds the roster.
    pub fn roster(&self) -> Roster {
        Roster::new(
            PlayerProfile::new(&self.a_name, &self.a_emoji),
            PlayerProfile::new(&self.b_name, &self.b_emoji),
        )
    }
}

/// Rendering options.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Frame interval in milliseconds.
    tick_ms: u64,
    /// Fixed seed for the confetti layout.
    confetti_seed: Option<u64>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: 50,
            confetti_seed: None,
        }
    }
}

impl UiConfig {
    /// Frame interval.
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

impl AppConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Loads `explicit` if given, else [`DEFAULT_CONFIG_PATH`] if it exists,
    /// else defaults.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                info!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = AppConfig::from_toml("").expect("empty config parses");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.timing().durations(), EffectDurations::default());
        assert_eq!(config.players().roster(), Roster::default());
        assert_eq!(config.ui().tick(), Duration::from_millis(50));
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [timing]
            confetti_ms = 5000

            [players]
            b_name = "Stump"

            [ui]
            confetti_seed = 9
            "#,
        )
        .expect("valid config");

        let durations = config.timing().durations();
        assert_eq!(durations.confetti, Duration::from_millis(5000));
        assert_eq!(durations.bounce, Duration::from_millis(400));

        let roster = config.players().roster();
        assert_eq!(roster.b().name(), "Stump");
        assert_eq!(roster.b().emoji(), "🪵");
        assert_eq!(roster.a().name(), "Beaver");

        assert_eq!(*config.ui().confetti_seed(), Some(9));
    }

    #[test]
    fn test_malformed_config_is_error() {
        let err = AppConfig::from_toml("[timing]\nbounce_ms = \"soon\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.to_string().starts_with("Config error:"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[timing]\nshake_ms = 700").expect("write config");
        let config = AppConfig::from_file(file.path()).expect("config loads");
        assert_eq!(config.timing().durations().shake, Duration::from_millis(700));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("absent.toml");
        let err = AppConfig::load(Some(missing.as_path())).unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }
}
