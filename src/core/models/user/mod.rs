//! User models for the console
//!
//! This module defines user-related data structures.

pub mod types;


pub use types::{User, UserRole};
