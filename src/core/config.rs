//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.apogee/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::api::DEFAULT_BASE_URL;
use crate::core::store::DEFAULT_PAGE_SIZE;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApogeeConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub reader: ReaderConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ReaderConfig {
    pub page_size: Option<usize>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub page_size: usize,
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

/// Returns the path to `~/.apogee/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".apogee").join("config.toml"))
}

/// Load config from `~/.apogee/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ApogeeConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ApogeeConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ApogeeConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ApogeeConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: ApogeeConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Apogee Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults -> this file -> env vars -> CLI flags.

# [api]
# base_url = "https://api.spaceflightnewsapi.net/v3/articles"

# [reader]
# page_size = 10            # Articles per fetch, must be positive
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

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_page_size` and `cli_base_url` are from CLI flags (None = not specified).
pub fn resolve(
    config: &ApogeeConfig,
    cli_page_size: Option<usize>,
    cli_base_url: Option<&str>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli_base_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("APOGEE_BASE_URL").ok())
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Page size: CLI → env → config → default
    let env_page_size = std::env::var("APOGEE_PAGE_SIZE")
        .ok()
        .and_then(|raw| match raw.parse::<usize>() {
            Ok(n) => Some(n),
            Err(_) => {
                warn!("Ignoring non-numeric APOGEE_PAGE_SIZE: {raw}");
                None
            }
        });
    let page_size = cli_page_size
        .or(env_page_size)
        .or(config.reader.page_size)
        .unwrap_or(DEFAULT_PAGE_SIZE);

    // The store requires a positive page size; fall back rather than panic.
    let page_size = if page_size == 0 {
        warn!("page_size must be positive, using default {}", DEFAULT_PAGE_SIZE);
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    };

    ResolvedConfig { base_url, page_size }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = ApogeeConfig::default();
        assert!(config.api.base_url.is_none());
        assert!(config.reader.page_size.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = ApogeeConfig::default();
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = ApogeeConfig {
            api: ApiConfig {
                base_url: Some("http://localhost:1234/articles".to_string()),
            },
            reader: ReaderConfig { page_size: Some(25) },
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.base_url, "http://localhost:1234/articles");
        assert_eq!(resolved.page_size, 25);
    }

    #[test]
    fn test_resolve_cli_flags_win() {
        let config = ApogeeConfig {
            api: ApiConfig {
                base_url: Some("http://from-config/articles".to_string()),
            },
            reader: ReaderConfig { page_size: Some(25) },
        };
        let resolved = resolve(&config, Some(5), Some("http://from-cli/articles"));
        assert_eq!(resolved.base_url, "http://from-cli/articles");
        assert_eq!(resolved.page_size, 5);
    }

    #[test]
    fn test_resolve_rejects_zero_page_size() {
        let config = ApogeeConfig {
            reader: ReaderConfig { page_size: Some(0) },
            ..Default::default()
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[api]
base_url = "http://192.168.1.100:8080/articles"

[reader]
page_size = 20
"#;
        let config: ApogeeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("http://192.168.1.100:8080/articles")
        );
        assert_eq!(config.reader.page_size, Some(20));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing; everything else stays default
        let toml_str = r#"
[reader]
page_size = 15
"#;
        let config: ApogeeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.reader.page_size, Some(15));
        assert!(config.api.base_url.is_none());
    }
}
