//! Utility modules for the console
//!
//! - **error**: Error types and the crate `Result` alias
//! - **logging**: Subscriber setup and structured security events

pub mod error;
pub mod logging;
