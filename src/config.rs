//! Global configuration parsing and validation.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::flags;
use crate::{AppError, Result};

fn default_http_port() -> u16 {
    3000
}

fn default_page_size() -> usize {
    50
}

/// Global configuration parsed from `config.toml`.
///
/// All values have defaults so the server can start without a
/// configuration file at all.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct GlobalConfig {
    /// HTTP port for the SSE transport.
    #[serde(default = "default_http_port")]
    pub http_port: u16,
    /// Page size for paged list operations.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Feature-flag activation values, keyed by flag name.
    ///
    /// A `--<flag-name>` token on the command line takes precedence
    /// over any value in this table.
    #[serde(default)]
    pub features: HashMap<String, bool>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            http_port: default_http_port(),
            page_size: default_page_size(),
            features: HashMap::new(),
        }
    }
}

impl GlobalConfig {
    /// Load and validate configuration from a TOML file path.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the file cannot be read or contains
    /// invalid TOML, or if validation fails.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|err| AppError::Config(format!("failed to read config: {err}")))?;
        Self::from_toml_str(&raw)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if parsing or validation fails.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(AppError::Config(
                "page_size must be greater than zero".into(),
            ));
        }

        // Unknown flag names are tolerated but flagged, since a typo here
        // silently disables the intended tool set.
        for name in self.features.keys() {
            if !flags::KNOWN_FLAGS.contains(&name.as_str()) {
                warn!(flag = %name, "unknown feature flag in [features] table");
            }
        }

        Ok(())
    }
}
