//! Configuration management for the console
//!
//! This module handles loading and validation of the console configuration.
//! Sources are layered: built-in defaults, then an optional YAML file, then
//! `HR_CONSOLE_*` environment variables.

pub mod env;
pub mod models;
pub mod validation;


pub use env::ENV_PREFIX;
pub use models::*;
pub use validation::Validate;

use crate::utils::error::{ConsoleError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Main configuration struct for the console
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Authorization settings
    #[serde(default)]
    pub rbac: RbacConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load the layered configuration used by the CLI.
    ///
    /// Reads the YAML file when one is given, then applies environment
    /// overrides (including a `.env` file if present) and validates the result.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::parse_file(path).await?,
            None => Self::default(),
        };

        // A missing .env file is not an error
        let _ = dotenvy::dotenv();
        config.apply_env_overrides(|name| std::env::var(name).ok())?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self::parse_file(path.as_ref()).await?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config = Self::parse_yaml(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables (and `.env` if present)
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment variables");

        let _ = dotenvy::dotenv();

        let mut config = Self::default();
        config.apply_env_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Get RBAC configuration
    pub fn rbac(&self) -> &RbacConfig {
        &self.rbac
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.rbac
            .validate()
            .map_err(|e| ConsoleError::Config(format!("RBAC config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| ConsoleError::Config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    async fn parse_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ConsoleError::Config(format!("Failed to read config file: {}", e)))?;

        Self::parse_yaml(&content)
    }

    fn parse_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| ConsoleError::Config(format!("Failed to parse config: {}", e)))
    }
}
