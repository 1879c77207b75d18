//! Layered application settings.
//!
//! Sources, lowest precedence first: built-in defaults, an optional `config.toml` in the
//! working directory, then `AURAMATCH_*` environment variables using `__` between
//! sections (`AURAMATCH_AUTH__SECRET`, `AURAMATCH_MATCHING__DELAY_MS`).

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::matching::MatchStrategy;

#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    pub addr: String,
    pub assets_dir: String,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:8080".into(),
            assets_dir: "packages/web/assets".into(),
        }
    }
}

/// Upper bound for `auth.session_days`.
pub const MAX_SESSION_DAYS: i64 = 365;

#[derive(Debug, Clone, Deserialize)]
pub struct Auth {
    pub secret: String,
    pub secure_cookies: bool,
    pub session_days: i64,
}

impl Default for Auth {
    fn default() -> Self {
        Self {
            secret: "your-secret-key".into(),
            secure_cookies: false,
            session_days: 7,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Database {
    /// Empty selects the in-memory user store.
    pub url: String,
}

impl Database {
    pub fn url(&self) -> Option<&str> {
        let url = self.url.trim();
        (!url.is_empty()).then_some(url)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Matching {
    pub strategy: MatchStrategy,
    /// Artificial latency before the match endpoint answers.
    pub delay_ms: u64,
}

impl Default for Matching {
    fn default() -> Self {
        Self {
            strategy: MatchStrategy::Catalog,
            delay_ms: 1500,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    pub server: Server,
    pub auth: Auth,
    pub database: Database,
    pub matching: Matching,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(
                File::with_name("config.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("AURAMATCH")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize::<Self>()?
            .validated()
    }

    /// Parse settings from a TOML string layered over the defaults.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?
            .try_deserialize::<Self>()?
            .validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if !(1..=MAX_SESSION_DAYS).contains(&self.auth.session_days) {
            return Err(ConfigError::Message(format!(
                "auth.session_days must be between 1 and {MAX_SESSION_DAYS}, got {}",
                self.auth.session_days
            )));
        }
        Ok(self)
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let defaults = Settings::default();
        Config::builder()
            .set_default("server.addr", defaults.server.addr)?
            .set_default("server.assets_dir", defaults.server.assets_dir)?
            .set_default("auth.secret", defaults.auth.secret)?
            .set_default("auth.secure_cookies", defaults.auth.secure_cookies)?
            .set_default("auth.session_days", defaults.auth.session_days)?
            .set_default("database.url", defaults.database.url)?
            .set_default("matching.strategy", "catalog")?
            .set_default("matching.delay_ms", defaults.matching.delay_ms)
    }
}
