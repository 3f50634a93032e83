//! # dxg-config
//!
//! Layered configuration loading for dxguide using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DXGUIDE_*` prefix, `__` as separator)
//! 2. Project-level `.dxguide/config.toml`
//! 3. User-level `~/.config/dxguide/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DXGUIDE_SOURCE__BASE_URL` -> `source.base_url`,
//! `DXGUIDE_ANIMATION__THRESHOLD` -> `animation.threshold`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use dxg_config::DxConfig;
//!
//! let config = DxConfig::load_with_dotenv().expect("config");
//! if config.source.is_remote() {
//!     println!("fetching from {}", config.source.base_url);
//! }
//! ```

mod animation;
mod error;
mod quiz;
mod source;

pub use animation::AnimationConfig;
pub use error::ConfigError;
pub use quiz::QuizConfig;
pub use source::SourceConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DxConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub quiz: QuizConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
}

impl DxConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can layer additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".dxguide/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("DXGUIDE_").split("__"))
    }

    /// Check every section for out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.source.base_url;
        let is_http = url.starts_with("http://") || url.starts_with("https://");
        if self.source.is_remote() && !is_http {
            return Err(ConfigError::InvalidValue {
                field: "source.base_url".to_string(),
                reason: format!("'{url}' is not an http(s) URL"),
            });
        }
        self.animation.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dxguide").join("config.toml"))
    }
}
