//! Configuration validation
//!
//! - `trait_def`: Core Validate trait definition
//! - `auth_validators`: RBAC configuration validators
//! - `logging_validators`: Logging configuration validators
//! - `tests`: Test suite for all validators

mod auth_validators;
mod logging_validators;
mod trait_def;

pub use trait_def::Validate;
