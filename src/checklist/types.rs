//! Core types for the export-readiness checklist

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::errors::ChecklistError;

/// Progress state of a single checklist item
///
/// Transitions between variants are unrestricted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    NotStarted,
    InProgress,
    Done,
}

impl Status {
    /// All variants in display order
    pub const ALL: [Status; 3] = [Status::NotStarted, Status::InProgress, Status::Done];

    /// Canonical text form, also written to exported spreadsheets
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::NotStarted => "NotStarted",
            Status::InProgress => "InProgress",
            Status::Done => "Done",
        }
    }

    /// Human-friendly label for terminal output
    pub fn label(&self) -> &'static str {
        match self {
            Status::NotStarted => "Not started",
            Status::InProgress => "In progress",
            Status::Done => "Done",
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Status::Done)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ChecklistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        // Labels used by the Korean edition of the dashboard
        match trimmed {
            "미완료" => return Ok(Status::NotStarted),
            "진행 중" | "진행중" => return Ok(Status::InProgress),
            "완료" => return Ok(Status::Done),
            _ => {}
        }

        let normalized: String = trimmed
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "notstarted" | "todo" | "new" => Ok(Status::NotStarted),
            "inprogress" | "doing" | "wip" | "started" => Ok(Status::InProgress),
            "done" | "complete" | "completed" => Ok(Status::Done),
            _ => Err(ChecklistError::InvalidStatus(trimmed.to_string())),
        }
    }
}

/// One checklist line item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub label: String,
    pub status: Status,
    pub due_date: NaiveDate,
}

/// Completion summary over the whole checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionStats {
    pub completed: usize,
    pub total: usize,
    /// Truncated toward zero: 2 of 15 is 13, not 13.33
    pub percentage: u8,
}

impl CompletionStats {
    pub fn new(completed: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            (completed * 100 / total) as u8
        };

        Self {
            completed,
            total,
            percentage,
        }
    }
}

/// Per-status tallies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub not_started: usize,
    pub in_progress: usize,
    pub done: usize,
}

/// Row of the upcoming-schedule view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry<'a> {
    pub label: &'a str,
    pub due_date: NaiveDate,
    pub status: Status,
}

/// Deterministic "summary and next steps" report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorReport {
    pub summary: String,
    pub next_steps: Vec<String>,
}

impl AdvisorReport {
    /// True when nothing is left to suggest
    pub fn all_complete(&self) -> bool {
        self.next_steps.is_empty()
    }
}

/// Set of statuses selected for display
///
/// An empty selection shows nothing; it does not mean "show all".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusFilter {
    selected: BTreeSet<Status>,
}

impl StatusFilter {
    /// Selection containing every status
    pub fn all() -> Self {
        Status::ALL.into_iter().collect()
    }

    /// Empty selection
    pub fn none() -> Self {
        Self {
            selected: BTreeSet::new(),
        }
    }

    pub fn contains(&self, status: Status) -> bool {
        self.selected.contains(&status)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_all(&self) -> bool {
        self.selected.len() == Status::ALL.len()
    }

    /// Selected statuses in display order
    pub fn iter(&self) -> impl Iterator<Item = Status> + '_ {
        self.selected.iter().copied()
    }
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<Status> for StatusFilter {
    fn from_iter<I: IntoIterator<Item = Status>>(iter: I) -> Self {
        Self {
            selected: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("(none)");
        }
        let names: Vec<&str> = self.iter().map(|s| s.as_str()).collect();
        f.write_str(&names.join(", "))
    }
}
