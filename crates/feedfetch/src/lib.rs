//! feedfetch library: application logic for the fetch orchestrator.

pub mod app;
pub mod config;
pub mod errors;
