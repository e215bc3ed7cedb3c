//! ExportDash - Digital Export Performance Dashboard
//!
//! Tracks progress through a fixed checklist of export-readiness activities,
//! computes completion and next-step suggestions, and exports the checklist
//! to an xlsx spreadsheet.
//!
//! # Architecture
//!
//! - **checklist**: task records, status edits and derived views
//! - **export**: xlsx serialization of the full checklist
//! - **repl** / **cli**: terminal dashboard, arguments and configuration
//! - **telemetry**: per-session interaction statistics

pub mod errors;

pub use errors::{ChecklistError, Result};

pub mod checklist;
pub mod export;

pub use checklist::{Checklist, Status, StatusFilter};

pub mod cli;
pub mod repl;
pub mod telemetry;
