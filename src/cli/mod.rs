//! CLI module for ExportDash
//!
//! Handles command-line argument parsing and configuration management.

pub mod args;
pub mod config;

pub use args::{parse_status_filter, Args, Commands, Verbosity};
pub use config::Config;
