//! Session telemetry for ExportDash
//!
//! Records dashboard interactions and keeps running statistics for the
//! `/stats` panel and the exit summary.

use colored::*;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, warn};

use crate::checklist::Status;

/// Telemetry event types
#[derive(Debug, Clone)]
pub enum TelemetryEvent {
    SessionStarted {
        anchor: chrono::NaiveDate,
    },
    StatusChanged {
        index: usize,
        from: Status,
        to: Status,
    },
    EditRejected {
        index: usize,
        reason: String,
    },
    FilterChanged {
        selected: usize,
    },
    ExportWritten {
        path: PathBuf,
        bytes: usize,
    },
}

/// Telemetry statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TelemetryStats {
    pub edits_applied: usize,
    pub edits_rejected: usize,
    /// Edits that set an item to the status it already had
    pub no_op_edits: usize,
    pub filter_changes: usize,
    pub exports_written: usize,
    pub bytes_exported: usize,
}

/// Telemetry collector
#[derive(Debug)]
pub struct TelemetryCollector {
    events: Vec<TelemetryEvent>,
    stats: TelemetryStats,
    start_time: Instant,
}

impl TelemetryCollector {
    /// Create a new telemetry collector
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            stats: TelemetryStats::default(),
            start_time: Instant::now(),
        }
    }

    /// Record an event
    pub fn record(&mut self, event: TelemetryEvent) {
        match &event {
            TelemetryEvent::SessionStarted { anchor } => {
                debug!(%anchor, "session started");
            }
            TelemetryEvent::StatusChanged { index, from, to } => {
                debug!(index, %from, %to, "edit recorded");
                self.stats.edits_applied += 1;
                if from == to {
                    self.stats.no_op_edits += 1;
                }
            }
            TelemetryEvent::EditRejected { index, reason } => {
                warn!(index, %reason, "edit rejected");
                self.stats.edits_rejected += 1;
            }
            TelemetryEvent::FilterChanged { selected } => {
                debug!(selected, "filter changed");
                self.stats.filter_changes += 1;
            }
            TelemetryEvent::ExportWritten { path, bytes } => {
                debug!(path = %path.display(), bytes, "export recorded");
                self.stats.exports_written += 1;
                self.stats.bytes_exported += bytes;
            }
        }

        self.events.push(event);
    }

    /// Get current statistics
    pub fn get_stats(&self) -> TelemetryStats {
        self.stats.clone()
    }

    /// Get elapsed time since start
    pub fn elapsed(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }

    /// Get event count
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Print summary statistics
    pub fn display_summary(&self) {
        let stats = self.get_stats();
        let elapsed = self.elapsed().as_secs();

        println!("\n{}", "Session Summary".bold().cyan());
        println!("{}", "-".repeat(40).cyan());
        println!("  Duration:         {}s", elapsed);
        println!("  Edits applied:    {}", stats.edits_applied.to_string().green());
        println!("  Edits rejected:   {}", stats.edits_rejected.to_string().red());
        println!("  Unchanged edits:  {}", stats.no_op_edits);
        println!("  Filter changes:   {}", stats.filter_changes);
        println!(
            "  Exports written:  {} ({} bytes)",
            stats.exports_written, stats.bytes_exported
        );
        println!();
    }
}

impl Default for TelemetryCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_changed(index: usize, from: Status, to: Status) -> TelemetryEvent {
        TelemetryEvent::StatusChanged {
            index,
            from,
            to,
        }
    }

    #[test]
    fn test_collector_creation() {
        let collector = TelemetryCollector::new();
        assert_eq!(collector.event_count(), 0);
        assert_eq!(collector.get_stats(), TelemetryStats::default());
    }

    #[test]
    fn test_record_status_changes() {
        let mut collector = TelemetryCollector::new();
        collector.record(status_changed(0, Status::NotStarted, Status::Done));
        collector.record(status_changed(0, Status::Done, Status::Done));

        let stats = collector.get_stats();
        assert_eq!(stats.edits_applied, 2);
        assert_eq!(stats.no_op_edits, 1);
        assert_eq!(collector.event_count(), 2);
    }

    #[test]
    fn test_record_rejected_edit() {
        let mut collector = TelemetryCollector::new();
        collector.record(TelemetryEvent::EditRejected {
            index: 20,
            reason: "out of range".to_string(),
        });
        assert_eq!(collector.get_stats().edits_rejected, 1);
        assert_eq!(collector.get_stats().edits_applied, 0);
    }

    #[test]
    fn test_record_export() {
        let mut collector = TelemetryCollector::new();
        collector.record(TelemetryEvent::ExportWritten {
            path: PathBuf::from("/tmp/out.xlsx"),
            bytes: 4096,
        });
        collector.record(TelemetryEvent::ExportWritten {
            path: PathBuf::from("/tmp/out.xlsx"),
            bytes: 1024,
        });

        let stats = collector.get_stats();
        assert_eq!(stats.exports_written, 2);
        assert_eq!(stats.bytes_exported, 5120);
    }

    #[test]
    fn test_filter_changes_and_summary() {
        let mut collector = TelemetryCollector::new();
        for i in 0..10 {
            collector.record(TelemetryEvent::FilterChanged { selected: i % 4 });
        }

        assert_eq!(collector.event_count(), 10);
        assert_eq!(collector.get_stats().filter_changes, 10);
        collector.display_summary();
    }
}
