//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.hoba-navigator/config.toml`. If missing on first
//! run, a commented-out default is generated so users can discover the
//! options. There are only two of them: how the overview is presented
//! (generated diagram vs. external image) and where that image lives.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// How the overview screen is presented. Two alternative renderings of the
/// same view, not two different navigation states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverviewMode {
    /// Draw the roadmap diagram from the embedded graph description.
    #[default]
    Diagram,
    /// Point at an external roadmap image instead.
    Image,
}

impl OverviewMode {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "diagram" => Some(Self::Diagram),
            "image" => Some(Self::Image),
            _ => None,
        }
    }
}

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NavigatorConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub overview: Option<OverviewMode>,
    pub image_path: Option<String>,
}

pub const DEFAULT_IMAGE_PATH: &str = "assets/hoba-roadmap.png";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub overview: OverviewMode,
    pub image_path: PathBuf,
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

/// Returns the path to `~/.hoba-navigator/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".hoba-navigator").join("config.toml"))
}

/// Load config from `~/.hoba-navigator/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `NavigatorConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<NavigatorConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(NavigatorConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(NavigatorConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: NavigatorConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# HOBA Navigator Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# overview = "diagram"                  # "diagram" or "image"
# image_path = "assets/hoba-roadmap.png"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env
/// vars → CLI flags.
///
/// `cli_overview` and `cli_image` come from CLI flags (None = not given).
pub fn resolve(
    config: &NavigatorConfig,
    cli_overview: Option<OverviewMode>,
    cli_image: Option<&str>,
) -> ResolvedConfig {
    // Overview mode: CLI → env → config → default
    let env_overview = std::env::var("HOBA_OVERVIEW").ok().and_then(|v| {
        let parsed = OverviewMode::parse(&v);
        if parsed.is_none() {
            warn!("Ignoring HOBA_OVERVIEW={:?} (expected \"diagram\" or \"image\")", v);
        }
        parsed
    });
    let overview = cli_overview
        .or(env_overview)
        .or(config.general.overview)
        .unwrap_or_default();

    // Image path: CLI → env → config → default
    let image_path = cli_image
        .map(|s| s.to_string())
        .or_else(|| std::env::var("HOBA_IMAGE_PATH").ok())
        .or_else(|| config.general.image_path.clone())
        .unwrap_or_else(|| DEFAULT_IMAGE_PATH.to_string());

    ResolvedConfig {
        overview,
        image_path: PathBuf::from(image_path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = NavigatorConfig::default();
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.overview, OverviewMode::Diagram);
        assert_eq!(resolved.image_path, PathBuf::from(DEFAULT_IMAGE_PATH));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = NavigatorConfig {
            general: GeneralConfig {
                overview: Some(OverviewMode::Image),
                image_path: Some("roadmap.png".to_string()),
            },
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.overview, OverviewMode::Image);
        assert_eq!(resolved.image_path, PathBuf::from("roadmap.png"));
    }

    #[test]
    fn test_resolve_cli_flags_win() {
        let config = NavigatorConfig {
            general: GeneralConfig {
                overview: Some(OverviewMode::Image),
                image_path: Some("from-config.png".to_string()),
            },
        };
        let resolved = resolve(&config, Some(OverviewMode::Diagram), Some("from-cli.png"));
        assert_eq!(resolved.overview, OverviewMode::Diagram);
        assert_eq!(resolved.image_path, PathBuf::from("from-cli.png"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[general]
overview = "image"
"#;
        let config: NavigatorConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.overview, Some(OverviewMode::Image));
        assert!(config.general.image_path.is_none());
    }

    #[test]
    fn test_empty_toml_parses() {
        let config: NavigatorConfig = toml::from_str("").unwrap();
        assert!(config.general.overview.is_none());
        assert!(config.general.image_path.is_none());
    }

    #[test]
    fn test_overview_mode_parse() {
        assert_eq!(OverviewMode::parse("diagram"), Some(OverviewMode::Diagram));
        assert_eq!(OverviewMode::parse("image"), Some(OverviewMode::Image));
        assert_eq!(OverviewMode::parse("mermaid"), None);
    }
}
