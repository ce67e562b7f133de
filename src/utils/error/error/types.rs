//! Error types for the console

use thiserror::Error;

/// Result type alias for the console
pub type Result<T> = std::result::Result<T, ConsoleError>;

/// Main error type for the console
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Role value outside the three enumerated roles
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Capability name that is not part of the permission set
    #[error("Unknown capability: {0}")]
    UnknownCapability(String),

    /// Page key with no visibility rule
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
