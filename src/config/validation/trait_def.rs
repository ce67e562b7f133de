//! Core validation trait definition

/// Trait for configuration validation
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
