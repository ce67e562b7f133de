//! Configuration data models
//!
//! This module defines all configuration structures used throughout the console.

#![allow(missing_docs)]

pub mod auth;
pub mod logging;

// Re-export all configuration types
pub use auth::*;
pub use logging::*;
