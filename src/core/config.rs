//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.quizline/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::DataSource;
use crate::core::countdown::CountdownBudget;
use crate::core::question::Difficulty;
use crate::core::state::Latency;
use crate::trivia::QuizQuery;
use crate::trivia::sources::DEFAULT_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct QuizlineConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub latency: LatencyConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub source: Option<DataSource>,
    pub countdown_seconds: Option<u64>,
    pub auto_start: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RemoteConfig {
    pub base_url: Option<String>,
    pub amount: Option<u32>,
    pub category: Option<u32>,
    pub difficulty: Option<Difficulty>,
    pub question_type: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LatencyConfig {
    pub start_ms: Option<u64>,
    pub end_ms: Option<u64>,
    pub replay_ms: Option<u64>,
    pub reset_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_COUNTDOWN_SECONDS: u64 = 120;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub source: DataSource,
    pub countdown: CountdownBudget,
    pub auto_start: bool,
    pub remote_base_url: String,
    pub query: QuizQuery,
    pub request_timeout: Duration,
    pub latency: Latency,
}

/// Values taken from command-line flags. `None`/`false` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub source: Option<DataSource>,
    pub countdown_seconds: Option<u64>,
    pub no_delay: bool,
    pub auto_start: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.quizline/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".quizline").join("config.toml"))
}

/// Load config from `~/.quizline/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `QuizlineConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<QuizlineConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(QuizlineConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(QuizlineConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<QuizlineConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: QuizlineConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Quizline Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# source = "static"             # "static" or "remote" (or QUIZLINE_SOURCE)
# countdown_seconds = 120       # Time allotted for the whole quiz
# auto_start = false            # Skip the landing screen

# [remote]
# base_url = "https://opentdb.com"   # Or set QUIZLINE_API_URL
# amount = 5
# category = 0                  # 0 = any category
# difficulty = "easy"           # "easy", "medium", "hard"
# question_type = "0"           # "multiple", "boolean", "0" = any
# timeout_secs = 10

# [latency]
# start_ms = 1000
# end_ms = 2000
# replay_ms = 1000
# reset_ms = 1000
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &QuizlineConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Source: CLI → env → config → default
    let source = cli
        .source
        .or_else(|| {
            std::env::var("QUIZLINE_SOURCE")
                .ok()
                .and_then(|s| DataSource::from_str(&s, true).ok())
        })
        .or(config.general.source)
        .unwrap_or_default();

    // Countdown: CLI → config → default
    let countdown_seconds = cli
        .countdown_seconds
        .or(config.general.countdown_seconds)
        .unwrap_or(DEFAULT_COUNTDOWN_SECONDS);

    // Base URL: env → config → default
    let remote_base_url = std::env::var("QUIZLINE_API_URL")
        .ok()
        .or_else(|| config.remote.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let defaults = QuizQuery::default();
    let query = QuizQuery {
        amount: config.remote.amount.unwrap_or(defaults.amount),
        category: config.remote.category.unwrap_or(defaults.category),
        difficulty: config.remote.difficulty.unwrap_or(defaults.difficulty),
        question_type: config
            .remote
            .question_type
            .clone()
            .unwrap_or(defaults.question_type),
    };

    let latency = if cli.no_delay {
        Latency::none()
    } else {
        let base = Latency::default();
        let ms = |value: Option<u64>, fallback: Duration| {
            value.map(Duration::from_millis).unwrap_or(fallback)
        };
        Latency {
            start: ms(config.latency.start_ms, base.start),
            end: ms(config.latency.end_ms, base.end),
            replay: ms(config.latency.replay_ms, base.replay),
            reset: ms(config.latency.reset_ms, base.reset),
        }
    };

    ResolvedConfig {
        source,
        countdown: CountdownBudget::from_secs(countdown_seconds),
        auto_start: cli.auto_start || config.general.auto_start.unwrap_or(false),
        remote_base_url,
        query,
        request_timeout: Duration::from_secs(
            config.remote.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        ),
        latency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = QuizlineConfig::default();
        assert!(config.general.source.is_none());
        assert!(config.remote.base_url.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = QuizlineConfig::default();
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.countdown.total_secs(), DEFAULT_COUNTDOWN_SECONDS);
        assert_eq!(resolved.query, QuizQuery::default());
        assert_eq!(resolved.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(resolved.latency, Latency::default());
        assert!(!resolved.auto_start);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = QuizlineConfig {
            general: GeneralConfig {
                source: Some(DataSource::Remote),
                countdown_seconds: Some(300),
                auto_start: Some(true),
            },
            remote: RemoteConfig {
                amount: Some(10),
                difficulty: Some(Difficulty::Hard),
                question_type: Some("boolean".to_string()),
                timeout_secs: Some(3),
                ..Default::default()
            },
            latency: LatencyConfig {
                end_ms: Some(250),
                ..Default::default()
            },
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.countdown, CountdownBudget::new(0, 5, 0));
        assert!(resolved.auto_start);
        assert_eq!(resolved.query.amount, 10);
        assert_eq!(resolved.query.category, 0);
        assert_eq!(resolved.query.difficulty, Difficulty::Hard);
        assert_eq!(resolved.query.question_type, "boolean");
        assert_eq!(resolved.request_timeout, Duration::from_secs(3));
        assert_eq!(resolved.latency.end, Duration::from_millis(250));
        assert_eq!(resolved.latency.start, Duration::from_millis(1000));
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = QuizlineConfig {
            general: GeneralConfig {
                source: Some(DataSource::Remote),
                countdown_seconds: Some(300),
                ..Default::default()
            },
            latency: LatencyConfig {
                start_ms: Some(5000),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            source: Some(DataSource::Static),
            countdown_seconds: Some(45),
            no_delay: true,
            auto_start: true,
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.source, DataSource::Static);
        assert_eq!(resolved.countdown.total_secs(), 45);
        assert_eq!(resolved.latency, Latency::none());
        assert!(resolved.auto_start);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
source = "remote"
countdown_seconds = 90

[remote]
base_url = "http://localhost:8080"
amount = 8
category = 9
difficulty = "medium"
question_type = "multiple"

[latency]
start_ms = 0
"#;
        let config: QuizlineConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.source, Some(DataSource::Remote));
        assert_eq!(config.general.countdown_seconds, Some(90));
        assert_eq!(config.remote.base_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(config.remote.category, Some(9));
        assert_eq!(config.remote.difficulty, Some(Difficulty::Medium));
        assert_eq!(config.latency.start_ms, Some(0));
        assert!(config.latency.end_ms.is_none());
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[remote]
amount = 3
"#;
        let config: QuizlineConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.remote.amount, Some(3));
        assert!(config.general.source.is_none());
        assert!(config.latency.start_ms.is_none());
    }

    #[test]
    fn test_load_config_from_reports_parse_errors() {
        let path = std::env::temp_dir().join(format!("quizline-bad-{}.toml", std::process::id()));
        fs::write(&path, "[general\nsource = ").unwrap();
        let result = load_config_from(&path);
        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_from_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("quizline-does-not-exist.toml");
        assert!(matches!(load_config_from(&path), Err(ConfigError::Io(_))));
    }
}
