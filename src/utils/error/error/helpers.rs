//! Helper functions for creating specific error types

use super::types::ConsoleError;

impl ConsoleError {
    pub fn unknown_role<S: Into<String>>(role: S) -> Self {
        Self::UnknownRole(role.into())
    }

    pub fn unknown_capability<S: Into<String>>(name: S) -> Self {
        Self::UnknownCapability(name.into())
    }

    pub fn unknown_page<S: Into<String>>(key: S) -> Self {
        Self::UnknownPage(key.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Whether the error comes from bad authorization input rather than I/O or config
    pub fn is_lookup_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownRole(_) | Self::UnknownCapability(_) | Self::UnknownPage(_)
        )
    }
}
