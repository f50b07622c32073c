//! Configuration for the random user generator
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/randusers/config.toml)
//! 3. Built-in defaults (lowest priority)

use crate::api::DEFAULT_API_URL;
use crate::users::DateStyle;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod observability;
mod serialization;


pub use observability::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_COPY_FLASH_MS: u64 = 2000;
const MIN_COPY_FLASH_MS: u64 = 500;
const DEFAULT_THEME: &str = "dark";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Random user endpoint (without query string)
    pub api_url: String,

    /// Page requested from the API
    pub page: u32,

    /// Request timeout; an expired request counts as a transport failure
    pub request_timeout_secs: u64,

    /// How long the "copied" confirmation stays on a card
    pub copy_flash_ms: u64,

    /// Date style for the birth date in the clipboard block
    pub date_style: DateStyle,

    /// Theme name: "dark", "light", "monokai", "dracula", "nord", "solarized"
    pub theme: String,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Fallbacks applied while resolving; logged once tracing is up
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            page: DEFAULT_PAGE,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            copy_flash_ms: DEFAULT_COPY_FLASH_MS,
            date_style: DateStyle::default(),
            theme: DEFAULT_THEME.to_string(),
            logging: LoggingConfig::default(),
            warnings: Vec::new(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub api_url: Option<String>,
    pub page: Option<u32>,
    pub request_timeout_secs: Option<u64>,
    pub copy_flash_ms: Option<u64>,
    pub date_format: Option<String>,
    pub theme: Option<String>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/randusers/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("randusers").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load configuration: env > file > defaults
    ///
    /// # Errors
    /// If the config file exists but cannot be read or parsed. A broken
    /// config fails fast instead of silently falling back to defaults.
    pub fn load() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::load_file_config(&path)?,
            None => FileConfig::default(),
        };
        Ok(Self::resolve(file, |key| std::env::var(key).ok()))
    }

    /// Read and parse a config file; a missing file yields defaults
    pub(crate) fn load_file_config(path: &Path) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).with_context(|| {
                format!(
                    "Failed to parse configuration file {} (delete it to regenerate defaults)",
                    path.display()
                )
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e)
                .with_context(|| format!("Cannot read configuration file {}", path.display())),
        }
    }

    /// Merge file values with environment lookups over the defaults
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let mut warnings = Vec::new();

        // API URL: env > file > default
        let api_url = env("RANDUSERS_API_URL")
            .or(file.api_url)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(defaults.api_url);

        // Page: file > default (the API pages from 1)
        let page = match file.page {
            Some(0) => {
                warnings.push("page = 0 is invalid, using 1".to_string());
                DEFAULT_PAGE
            }
            Some(page) => page,
            None => DEFAULT_PAGE,
        };

        // Timeout: env > file > default; zero is rejected at each layer
        let env_timeout = match env("RANDUSERS_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(0) => {
                    warnings.push("RANDUSERS_TIMEOUT_SECS=0 is invalid, ignoring".to_string());
                    None
                }
                Ok(secs) => Some(secs),
                Err(_) => {
                    warnings.push(format!("RANDUSERS_TIMEOUT_SECS={:?} is not a number", raw));
                    None
                }
            },
            None => None,
        };
        let file_timeout = match file.request_timeout_secs {
            Some(0) => {
                warnings.push("request_timeout_secs = 0 is invalid, ignoring".to_string());
                None
            }
            other => other,
        };
        let request_timeout_secs = env_timeout
            .or(file_timeout)
            .unwrap_or(defaults.request_timeout_secs);

        // Copy flash: file > default, never shorter than MIN_COPY_FLASH_MS
        let copy_flash_ms = match file.copy_flash_ms {
            Some(ms) if ms < MIN_COPY_FLASH_MS => {
                warnings.push(format!(
                    "copy_flash_ms = {} is below {}, using {}",
                    ms, MIN_COPY_FLASH_MS, defaults.copy_flash_ms
                ));
                defaults.copy_flash_ms
            }
            Some(ms) => ms,
            None => defaults.copy_flash_ms,
        };

        // Date format: file > default; a pattern chrono can't format falls back
        let date_style = match file.date_format {
            Some(pattern) => DateStyle::parse(&pattern).unwrap_or_else(|| {
                warnings.push(format!(
                    "date_format {:?} is not a valid strftime pattern, using {:?}",
                    pattern,
                    defaults.date_style.pattern()
                ));
                defaults.date_style.clone()
            }),
            None => defaults.date_style,
        };

        // Theme: env > file > default
        let theme = env("RANDUSERS_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        let logging = LoggingConfig::from_file(file.logging);

        Self {
            api_url,
            page,
            request_timeout_secs,
            copy_flash_ms,
            date_style,
            theme,
            logging,
            warnings,
        }
    }
}
