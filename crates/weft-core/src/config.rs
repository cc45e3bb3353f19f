//! Site configuration management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    route::RoutePrefix,
};

/// Main configuration structure for Weft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title, used for the generated document's `<title>`.
    pub title: String,

    /// Path segment prepended to all site-internal URLs (e.g. "/app").
    #[serde(default)]
    pub route_prefix: String,
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Path to the script the dev server builds and serves.
    #[serde(default = "default_dev_script")]
    pub dev_script: String,
}

/// Build mode affecting generated markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTarget {
    /// Development build; debug affordances are included.
    Debug,
    /// Production build.
    Release,
}

fn default_dev_script() -> String {
    "build/main.js".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            dev_script: default_dev_script(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration using the config crate for more flexibility.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("WEFT").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if !self.site.route_prefix.is_empty() && !self.site.route_prefix.starts_with('/') {
            tracing::warn!("site.route_prefix should start with a slash");
        }

        Ok(())
    }

    /// The site's normalized route prefix.
    #[must_use]
    pub fn route_prefix(&self) -> RoutePrefix {
        RoutePrefix::new(&self.site.route_prefix)
    }
}
