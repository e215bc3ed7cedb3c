//! Dashboard session state
//!
//! Owns the checklist for the lifetime of one run, together with the view
//! parameters (status filter, next-steps limit) and export settings. Nothing
//! here is persisted; a new session starts from the template again.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::checklist::{AdvisorReport, Checklist, Status, StatusFilter, TaskRecord};
use crate::cli::Config;
use crate::errors::{ChecklistError, Result};
use crate::export::{export_table, ExportArtifact, ExportOptions};
use crate::telemetry::{TelemetryCollector, TelemetryEvent};

/// Single-user dashboard session
pub struct DashboardSession {
    checklist: Checklist,
    filter: StatusFilter,
    telemetry: TelemetryCollector,
    export_options: ExportOptions,
    output_dir: PathBuf,
    next_limit: usize,
}

impl DashboardSession {
    /// Start a session with a fresh checklist anchored at `anchor`
    pub fn new(anchor: NaiveDate, config: &Config) -> Self {
        let mut telemetry = TelemetryCollector::new();
        telemetry.record(TelemetryEvent::SessionStarted {
            anchor,
        });

        Self {
            checklist: Checklist::initialize(anchor),
            filter: config.default_filter(),
            telemetry,
            export_options: config.export_options(),
            output_dir: config.output_dir(),
            next_limit: config.display.next_steps_limit,
        }
    }

    pub fn checklist(&self) -> &Checklist {
        &self.checklist
    }

    pub fn filter(&self) -> &StatusFilter {
        &self.filter
    }

    pub fn telemetry(&self) -> &TelemetryCollector {
        &self.telemetry
    }

    /// Replace the active status filter
    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.telemetry.record(TelemetryEvent::FilterChanged {
            selected: filter.len(),
        });
        self.filter = filter;
    }

    /// Apply a status edit by 0-based index, returning the previous status
    pub fn apply_edit(&mut self, index: usize, status: Status) -> Result<Status> {
        match self.checklist.set_status(index, status) {
            Ok(previous) => {
                self.telemetry.record(TelemetryEvent::StatusChanged {
                    index,
                    from: previous,
                    to: status,
                });
                Ok(previous)
            }
            Err(err) => {
                self.telemetry.record(TelemetryEvent::EditRejected {
                    index,
                    reason: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Apply a status edit by the 1-based row number shown on screen
    pub fn apply_row_edit(&mut self, row: usize, status: Status) -> Result<Status> {
        match row.checked_sub(1) {
            Some(index) => self.apply_edit(index, status),
            None => {
                let err = ChecklistError::IndexOutOfRange {
                    index: row,
                    len: self.checklist.len(),
                };
                self.telemetry.record(TelemetryEvent::EditRejected {
                    index: row,
                    reason: "row numbers start at 1".to_string(),
                });
                Err(err)
            }
        }
    }

    /// Items passing the active filter, paired with their 0-based index
    pub fn visible_rows(&self) -> Vec<(usize, &TaskRecord)> {
        self.checklist
            .records()
            .iter()
            .enumerate()
            .filter(|(_, r)| self.filter.contains(r.status))
            .collect()
    }

    /// Summary and next steps using the configured limit
    pub fn advise(&self, limit: Option<usize>) -> AdvisorReport {
        self.checklist.advise(limit.unwrap_or(self.next_limit))
    }

    /// Serialize the full checklist
    pub fn build_artifact(&self) -> Result<ExportArtifact> {
        export_table(&self.checklist, &self.export_options)
    }

    /// Export the checklist into `dir`, or the configured output directory
    pub fn export(&mut self, dir: Option<&Path>) -> Result<(PathBuf, usize)> {
        let artifact = self.build_artifact()?;
        let target = dir.unwrap_or(&self.output_dir);
        let path = artifact.write_to(target)?;

        self.telemetry.record(TelemetryEvent::ExportWritten {
            path: path.clone(),
            bytes: artifact.len(),
        });

        Ok((path, artifact.len()))
    }
}
