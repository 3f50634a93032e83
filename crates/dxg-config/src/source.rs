//! Content source configuration.

use serde::{Deserialize, Serialize};

fn default_data_dir() -> String {
    String::from(".")
}

fn default_user_agent() -> String {
    String::from("dxguide/0.1")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Base URL the data paths are resolved against. Empty means unset.
    #[serde(default)]
    pub base_url: String,

    /// Local site root used when `base_url` is unset.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// User agent sent with HTTP requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds. `0` disables the timeout.
    #[serde(default)]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            data_dir: default_data_dir(),
            user_agent: default_user_agent(),
            timeout_secs: 0,
        }
    }
}

impl SourceConfig {
    /// Whether content should be fetched over HTTP rather than read from disk.
    pub fn is_remote(&self) -> bool {
        !self.base_url.is_empty()
    }

    /// Request timeout, if one is configured.
    pub const fn timeout(&self) -> Option<std::time::Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(std::time::Duration::from_secs(self.timeout_secs))
        }
    }
}
