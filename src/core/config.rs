//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.tictactoe/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! Nothing is ever written back: the theme toggled during a session is
//! forgotten on exit.

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::theme::Theme;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GameConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub theme: Option<Theme>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub show_help: Option<bool>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub theme: Theme,
    pub show_help: bool,
}

pub const THEME_ENV: &str = "TICTACTOE_THEME";
pub const SHOW_HELP_ENV: &str = "TICTACTOE_SHOW_HELP";

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

/// Returns the path to `~/.tictactoe/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".tictactoe").join("config.toml"))
}

/// Load config from `~/.tictactoe/config.toml`.
///
/// Falls back to `GameConfig::default()` when the home directory is
/// unknown. See [`load_config_from`] for the rest.
pub fn load_config() -> Result<GameConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(GameConfig::default())
        }
    }
}

/// Load config from an explicit path.
///
/// If the file doesn't exist, generates a commented-out default there and
/// returns `GameConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<GameConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(GameConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: GameConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG: &str = r#"# Tic Tac Toe Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# theme = "light"          # "light" or "dark"; or TICTACTOE_THEME, or --theme

# [display]
# show_help = true         # key help line under the status bar; or TICTACTOE_SHOW_HELP
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_theme` is from the `--theme` flag (None = not specified).
pub fn resolve(config: &GameConfig, cli_theme: Option<Theme>) -> ResolvedConfig {
    resolve_with_env(config, cli_theme, |key| std::env::var(key).ok())
}

/// [`resolve`] with an injectable environment lookup.
fn resolve_with_env(
    config: &GameConfig,
    cli_theme: Option<Theme>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Theme: CLI → env → config → default
    let theme = cli_theme
        .or_else(|| {
            let raw = env(THEME_ENV)?;
            let parsed = <Theme as ValueEnum>::from_str(raw.trim(), true).ok();
            if parsed.is_none() {
                warn!("Ignoring {}={:?}: expected \"light\" or \"dark\"", THEME_ENV, raw);
            }
            parsed
        })
        .or(config.general.theme)
        .unwrap_or_default();

    // Help line: env → config → default
    let show_help = env(SHOW_HELP_ENV)
        .and_then(|raw| parse_bool(&raw))
        .or(config.display.show_help)
        .unwrap_or(true);

    ResolvedConfig { theme, show_help }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => {
            warn!("Ignoring {}={:?}: expected a boolean", SHOW_HELP_ENV, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&GameConfig::default(), None, no_env);
        assert_eq!(resolved.theme, Theme::Light);
        assert!(resolved.show_help);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = GameConfig {
            general: GeneralConfig {
                theme: Some(Theme::Dark),
            },
            display: DisplayConfig {
                show_help: Some(false),
            },
        };
        let resolved = resolve_with_env(&config, None, no_env);
        assert_eq!(resolved.theme, Theme::Dark);
        assert!(!resolved.show_help);
    }

    #[test]
    fn test_resolve_env_wins_over_config() {
        let config = GameConfig {
            general: GeneralConfig {
                theme: Some(Theme::Light),
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            THEME_ENV => Some("dark".to_string()),
            SHOW_HELP_ENV => Some("off".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&config, None, env);
        assert_eq!(resolved.theme, Theme::Dark);
        assert!(!resolved.show_help);
    }

    #[test]
    fn test_resolve_cli_theme_wins() {
        let env = |key: &str| (key == THEME_ENV).then(|| "dark".to_string());
        let config = GameConfig {
            general: GeneralConfig {
                theme: Some(Theme::Dark),
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, Some(Theme::Light), env);
        assert_eq!(resolved.theme, Theme::Light);
    }

    #[test]
    fn test_resolve_env_theme_ignores_case_and_padding() {
        let env = |key: &str| (key == THEME_ENV).then(|| " Dark ".to_string());
        let resolved = resolve_with_env(&GameConfig::default(), None, env);
        assert_eq!(resolved.theme, Theme::Dark);
    }

    #[test]
    fn test_resolve_ignores_bad_env_values() {
        let env = |key: &str| match key {
            THEME_ENV => Some("sepia".to_string()),
            SHOW_HELP_ENV => Some("maybe".to_string()),
            _ => None,
        };
        let config = GameConfig {
            general: GeneralConfig {
                theme: Some(Theme::Dark),
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, None, env);
        assert_eq!(resolved.theme, Theme::Dark);
        assert!(resolved.show_help);
    }

    #[test]
    fn test_toml_parses() {
        let toml_str = r#"
[general]
theme = "dark"

[display]
show_help = false
"#;
        let config: GameConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.theme, Some(Theme::Dark));
        assert_eq!(config.display.show_help, Some(false));
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config: GameConfig = toml::from_str("[display]\nshow_help = true\n").unwrap();
        assert!(config.general.theme.is_none());
        assert_eq!(config.display.show_help, Some(true));
    }

    #[test]
    fn test_generated_default_parses_to_defaults() {
        let config: GameConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert!(config.general.theme.is_none());
        assert!(config.display.show_help.is_none());
    }

    #[test]
    fn test_unknown_theme_is_parse_error() {
        let result: Result<GameConfig, _> = toml::from_str("[general]\ntheme = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_from_missing_file_generates_default() {
        let dir = std::env::temp_dir().join(format!("tictactoe-config-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let config = load_config_from(&path).unwrap();
        assert!(config.general.theme.is_none());
        assert!(path.exists());

        fs::write(&path, "[general]\ntheme = \"dark\"\n").unwrap();
        let config = load_config_from(&path).unwrap();
        assert_eq!(config.general.theme, Some(Theme::Dark));

        fs::write(&path, "[general\n").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));

        let _ = fs::remove_dir_all(&dir);
    }
}
