//! Integration tests for hr-console
//!
//! These tests drive the public API the way the console does: sign a user
//! in, resolve routes, render the sidebar and decide control visibility.

pub mod cli_tests;
pub mod config_tests;
pub mod role_scenario_tests;
