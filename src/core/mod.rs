//! Core domain types shared across the console

pub mod models;
