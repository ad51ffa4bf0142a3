//! Configuration file support for starsearch.
//!
//! Configuration is loaded with the following precedence (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (prefixed with `STARSEARCH_`, e.g., `STARSEARCH_SEARCH__HOST`)
//! 3. Local config file (./starsearch.toml)
//! 4. XDG config file (~/.config/starsearch/config.toml)
//! 5. Built-in defaults
//!
//! Example config file:
//! ```toml
//! [search]
//! host = "https://api.github.com"
//! cooldown_ms = 2000
//! timeout_secs = 30
//! user_agent = "starsearch"
//! ```

use std::path::PathBuf;
use std::time::Duration;

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::Deserialize;
use starsearch::DEFAULT_COOLDOWN;
use starsearch::github::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, GITHUB_API_HOST};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Search client configuration.
    pub search: SearchConfig,
}

/// Search client configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// API host, including scheme.
    pub host: String,
    /// Minimum time between two requests, in milliseconds.
    pub cooldown_ms: u64,
    /// Per-request timeout, in seconds.
    pub timeout_secs: u64,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            host: GITHUB_API_HOST.to_string(),
            cooldown_ms: DEFAULT_COOLDOWN.as_millis() as u64,
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl SearchConfig {
    /// Apply CLI flag overrides.
    #[must_use]
    pub fn with_overrides(mut self, host: Option<String>, cooldown_ms: Option<u64>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(cooldown_ms) = cooldown_ms {
            self.cooldown_ms = cooldown_ms;
        }
        self
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Load configuration using the config crate's layered approach.
    ///
    /// Sources are loaded in order (later sources override earlier):
    /// 1. Built-in defaults
    /// 2. XDG config file (~/.config/starsearch/config.toml)
    /// 3. Local config file (./starsearch.toml)
    /// 4. Environment variables with STARSEARCH_ prefix
    pub fn load() -> Self {
        let mut builder = ConfigBuilder::builder();

        if let Some(xdg_config) = Self::default_config_path()
            && xdg_config.exists()
        {
            tracing::debug!("Loading config from {:?}", xdg_config);
            builder = builder.add_source(
                File::from(xdg_config)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        let local_config = PathBuf::from("starsearch.toml");
        if local_config.exists() {
            tracing::debug!("Loading config from ./starsearch.toml");
            builder = builder.add_source(
                File::from(local_config)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        // e.g., STARSEARCH_SEARCH__COOLDOWN_MS -> search.cooldown_ms
        builder = builder.add_source(
            Environment::with_prefix("STARSEARCH")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        match builder.build() {
            Ok(settings) => match settings.try_deserialize::<Config>() {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to deserialize config: {}", e);
                    Config::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to build config: {}", e);
                Config::default()
            }
        }
    }

    /// Get the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "starsearch").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
