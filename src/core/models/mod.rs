//! Core data models for the console

pub mod user;

pub use user::*;
