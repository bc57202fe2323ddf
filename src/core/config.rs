//! # Configuration
//!
//! Settings for the API connection with a clear override hierarchy:
//! defaults → `~/.teamboard/config.toml` → env vars.
//!
//! The only tunables are the API base URL and the request timeout; when
//! nothing specifies a base URL it is derived from the host the UI is
//! served from (localhost → local dev backend, anything else →
//! same-origin `/api/`).

use std::fmt;
use std::fs;
use std::path::PathBuf;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BoardConfig {
    #[serde(default)]
    pub api: ApiSettings,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiSettings {
    pub base_url: Option<String>,
    pub timeout_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TIMEOUT_MS: u64 = 3000;
pub const DEFAULT_LOCAL_BASE_URL: &str = "http://localhost:3000/api/";

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

/// Returns the path to `~/.teamboard/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".teamboard").join("config.toml"))
}

/// Load config from `~/.teamboard/config.toml`.
///
/// A missing file is not an error — defaults apply. A malformed file is
/// `ConfigError::Parse`.
pub fn load_config() -> Result<BoardConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(BoardConfig::default());
        }
    };

    if !path.exists() {
        return Ok(BoardConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: BoardConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

// ============================================================================
// Resolution
// ============================================================================

/// Picks the API base for the host the UI is served from: hosts containing
/// `localhost` talk to the local dev backend, everything else goes
/// same-origin under `/api/`.
pub fn base_url_for_host(host: &str) -> String {
    if host.contains("localhost") {
        DEFAULT_LOCAL_BASE_URL.to_string()
    } else {
        format!("https://{host}/api/")
    }
}

/// Concrete settings after collapsing the override hierarchy.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

/// Resolve the final config: defaults → config file → env vars.
///
/// `host` only matters when neither the env nor the config file names a
/// base URL.
pub fn resolve(config: &BoardConfig, host: &str) -> ResolvedConfig {
    // Base URL: env → config → host-derived default
    let base_url = std::env::var("TEAMBOARD_API_URL")
        .ok()
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| base_url_for_host(host));

    // Timeout: env → config → default
    let timeout_ms = std::env::var("TEAMBOARD_API_TIMEOUT_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .or(config.api.timeout_ms)
        .unwrap_or(DEFAULT_TIMEOUT_MS);

    ResolvedConfig {
        base_url,
        timeout_ms,
    }
}
