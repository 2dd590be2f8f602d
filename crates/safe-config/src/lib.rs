//! # safe-config
//!
//! Layered configuration loading for the I Am Safe board using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`IAMSAFE_*` prefix, `__` as separator)
//! 2. The legacy `ADMIN_TOKEN` variable, mapped to `admin.token`
//! 3. Project-level `./iamsafe.toml`, or the file passed to [`SafeConfig::load_from`]
//! 4. User-level `~/.config/iamsafe/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `IAMSAFE_ADMIN__TOKEN` -> `admin.token`,
//! `IAMSAFE_BOARD__PAGE_SIZE` -> `board.page_size`, etc. Free-text fields
//! (tokens, paths, the event name) are taken verbatim, so `ADMIN_TOKEN=12345678`
//! stays the string `"12345678"`.
//!
//! # Usage
//!
//! ```no_run
//! use safe_config::SafeConfig;
//!
//! let config = SafeConfig::load_with_dotenv(None).expect("config");
//! println!("listening on {}", config.server.address());
//! ```

mod admin;
mod board;
mod database;
mod error;
mod server;

pub use admin::AdminConfig;
pub use board::BoardConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variables holding free-form text, mapped to their config keys.
/// The legacy `ADMIN_TOKEN` comes first so `IAMSAFE_ADMIN__TOKEN` overrides it.
const TEXT_ENV_KEYS: [(&str, &str); 7] = [
    ("ADMIN_TOKEN", "admin.token"),
    ("IAMSAFE_ADMIN__TOKEN", "admin.token"),
    ("IAMSAFE_ADMIN__TOKEN_FILE", "admin.token_file"),
    ("IAMSAFE_SERVER__BIND", "server.bind"),
    ("IAMSAFE_DATABASE__PATH", "database.path"),
    ("IAMSAFE_BOARD__DEFAULT_LANG", "board.default_lang"),
    ("IAMSAFE_BOARD__EVENT", "board.event"),
];

/// Maximum absolute display offset: 18 hours, the chrono `FixedOffset` bound.
const MAX_UTC_OFFSET_MINUTES: i32 = 18 * 60;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SafeConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub board: BoardConfig,
}

impl SafeConfig {
    /// Load configuration from all sources and validate it.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load_from(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(explicit).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` from the current directory first, then [`Self::load_from`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::load_from`].
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Err(error) = dotenvy::dotenv() {
            if !error.not_found() {
                tracing::warn!(%error, "failed to load .env file");
            }
        }
        Self::load_from(explicit)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect it or layer extra providers on top.
    #[must_use]
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        match explicit {
            Some(path) => figment = figment.merge(Toml::file_exact(path)),
            None => {
                let local_path = PathBuf::from("iamsafe.toml");
                if local_path.exists() {
                    figment = figment.merge(Toml::file(local_path));
                }
            }
        }

        figment = figment.merge(Env::prefixed("IAMSAFE_").split("__"));

        // `Env` parses values (`12345678`, `true`, `[a]`), so text fields are
        // re-read verbatim. Later entries win.
        for (var, key) in TEXT_ENV_KEYS {
            if let Ok(value) = std::env::var(var) {
                figment = figment.merge(Serialized::default(key, value));
            }
        }
        figment
    }

    /// Reject values the server cannot run with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.page_size == 0 {
            return Err(invalid("board.page_size", "must be at least 1"));
        }
        if self.board.default_lang().is_none() {
            return Err(invalid(
                "board.default_lang",
                &format!("unknown language code '{}'", self.board.default_lang),
            ));
        }
        if self.board.utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(invalid(
                "board.utc_offset_minutes",
                "must be within -1080..=1080",
            ));
        }
        if self.server.request_timeout_secs == 0 {
            return Err(invalid("server.request_timeout_secs", "must be at least 1"));
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("iamsafe").join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SafeConfig::default();
        config.validate().unwrap();
        assert_eq!(config.board.page_size, 20);
        assert!(config.admin.token.is_empty());
        assert_eq!(config.database.path, "iamsafe.db");
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let mut config = SafeConfig::default();
        config.board.page_size = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "board.page_size"
        ));
    }

    #[test]
    fn unknown_default_lang_is_rejected() {
        let mut config = SafeConfig::default();
        config.board.default_lang = "tlh".into();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "board.default_lang"
        ));
    }

    #[test]
    fn out_of_range_offset_is_rejected() {
        let mut config = SafeConfig::default();
        config.board.utc_offset_minutes = 19 * 60;
        assert!(config.validate().is_err());
        config.board.utc_offset_minutes = -8 * 60;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = SafeConfig::default();
        config.server.request_timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
