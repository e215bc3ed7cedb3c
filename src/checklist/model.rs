//! Checklist state model and derived views
//!
//! The record sequence is fixed at construction; `set_status` is the only
//! mutator and touches nothing but the targeted item's status.

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::checklist::template::{CHECKLIST_LEN, TEMPLATE};
use crate::checklist::types::{
    AdvisorReport, CompletionStats, ScheduleEntry, Status, StatusCounts, StatusFilter, TaskRecord,
};
use crate::errors::{ChecklistError, Result};

/// Default number of suggestions returned by `next_priorities`
pub const DEFAULT_NEXT_LIMIT: usize = 3;

/// Due date of the last template item for a schedule anchored at `today`,
/// or `None` if it falls past `NaiveDate::MAX`
pub fn last_due_date(today: NaiveDate) -> Option<NaiveDate> {
    due_date(today, TEMPLATE[CHECKLIST_LEN - 1].day_offset)
}

fn due_date(today: NaiveDate, day_offset: i64) -> Option<NaiveDate> {
    today.checked_add_signed(Duration::days(day_offset))
}

/// Ordered collection of all task records for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checklist {
    records: Vec<TaskRecord>,
    anchor: NaiveDate,
}

impl Checklist {
    /// Build the checklist from the fixed template, anchoring item `i` to
    /// `today + 2i` days. Due dates past `NaiveDate::MAX` saturate.
    pub fn initialize(today: NaiveDate) -> Self {
        let records = TEMPLATE
            .iter()
            .map(|entry| TaskRecord {
                label: entry.label.to_string(),
                status: Status::default(),
                due_date: due_date(today, entry.day_offset).unwrap_or(NaiveDate::MAX),
            })
            .collect();

        Self {
            records,
            anchor: today,
        }
    }

    /// Date the schedule was anchored to
    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// Full unfiltered record sequence
    pub fn records(&self) -> &[TaskRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&TaskRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replace the status of the item at `index`, returning the previous one
    pub fn set_status(&mut self, index: usize, status: Status) -> Result<Status> {
        let len = self.records.len();
        let record = self
            .records
            .get_mut(index)
            .ok_or(ChecklistError::IndexOutOfRange { index, len })?;

        let previous = std::mem::replace(&mut record.status, status);
        debug!(index, from = %previous, to = %status, "status updated");
        Ok(previous)
    }

    /// Items whose status is selected, in original order
    pub fn filter_by_status(&self, selected: &StatusFilter) -> Vec<&TaskRecord> {
        self.records
            .iter()
            .filter(|r| selected.contains(r.status))
            .collect()
    }

    pub fn completion_stats(&self) -> CompletionStats {
        let completed = self.records.iter().filter(|r| r.status.is_done()).count();
        CompletionStats::new(completed, CHECKLIST_LEN)
    }

    pub fn status_counts(&self) -> StatusCounts {
        self.records
            .iter()
            .fold(StatusCounts::default(), |mut counts, r| {
                match r.status {
                    Status::NotStarted => counts.not_started += 1,
                    Status::InProgress => counts.in_progress += 1,
                    Status::Done => counts.done += 1,
                }
                counts
            })
    }

    /// Labels of the first `limit` items that are not done
    pub fn next_priorities(&self, limit: usize) -> Vec<&str> {
        self.records
            .iter()
            .filter(|r| !r.status.is_done())
            .take(limit)
            .map(|r| r.label.as_str())
            .collect()
    }

    pub fn summarize(&self) -> String {
        let stats = self.completion_stats();
        format!(
            "Out of {} items, {} are complete.",
            stats.total, stats.completed
        )
    }

    /// Summary plus next-step suggestions
    pub fn advise(&self, limit: usize) -> AdvisorReport {
        AdvisorReport {
            summary: self.summarize(),
            next_steps: self
                .next_priorities(limit)
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    /// Upcoming-schedule view: label, due date and status for every item
    pub fn schedule(&self) -> Vec<ScheduleEntry<'_>> {
        self.records
            .iter()
            .map(|r| ScheduleEntry {
                label: &r.label,
                due_date: r.due_date,
                status: r.status,
            })
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.records.iter().all(|r| r.status.is_done())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_initialize_shape() {
        let checklist = Checklist::initialize(today());
        assert_eq!(checklist.len(), 15);
        assert_eq!(checklist.anchor(), today());
        assert!(checklist
            .records()
            .iter()
            .all(|r| r.status == Status::NotStarted));
    }

    #[test]
    fn test_initialize_due_dates() {
        let checklist = Checklist::initialize(today());
        for (i, record) in checklist.records().iter().enumerate() {
            assert_eq!(record.due_date, today() + Duration::days(2 * i as i64));
        }
        // Crosses the month boundary
        assert_eq!(
            checklist.records()[14].due_date,
            NaiveDate::from_ymd_opt(2024, 3, 29).unwrap()
        );
    }

    #[test]
    fn test_initialize_saturates_at_max_date() {
        let checklist = Checklist::initialize(NaiveDate::MAX);
        assert_eq!(checklist.len(), 15);
        assert!(checklist
            .records()
            .iter()
            .all(|r| r.due_date == NaiveDate::MAX));
        assert_eq!(last_due_date(NaiveDate::MAX), None);
    }

    #[test]
    fn test_last_due_date() {
        assert_eq!(
            last_due_date(today()),
            Some(NaiveDate::from_ymd_opt(2024, 3, 29).unwrap())
        );
    }

    #[test]
    fn test_set_status_returns_previous() {
        let mut checklist = Checklist::initialize(today());
        let prev = checklist.set_status(4, Status::InProgress).unwrap();
        assert_eq!(prev, Status::NotStarted);
        let prev = checklist.set_status(4, Status::Done).unwrap();
        assert_eq!(prev, Status::InProgress);
        assert_eq!(checklist.get(4).unwrap().status, Status::Done);
    }

    #[test]
    fn test_set_status_out_of_range() {
        let mut checklist = Checklist::initialize(today());
        let before = checklist.clone();

        let err = checklist.set_status(15, Status::Done).unwrap_err();
        assert!(matches!(
            err,
            ChecklistError::IndexOutOfRange { index: 15, len: 15 }
        ));
        assert_eq!(checklist, before);
    }

    #[test]
    fn test_set_status_any_transition() {
        let mut checklist = Checklist::initialize(today());
        checklist.set_status(0, Status::Done).unwrap();
        checklist.set_status(0, Status::NotStarted).unwrap();
        assert_eq!(checklist.get(0).unwrap().status, Status::NotStarted);
    }

    #[test]
    fn test_completion_single_done() {
        let mut checklist = Checklist::initialize(today());
        checklist.set_status(0, Status::Done).unwrap();
        assert_eq!(checklist.completion_stats(), CompletionStats::new(1, 15));
        assert_eq!(checklist.completion_stats().percentage, 6);
    }

    #[test]
    fn test_in_progress_not_counted() {
        let mut checklist = Checklist::initialize(today());
        checklist.set_status(0, Status::InProgress).unwrap();
        assert_eq!(checklist.completion_stats().completed, 0);
    }

    #[test]
    fn test_filter_by_status() {
        let mut checklist = Checklist::initialize(today());
        checklist.set_status(2, Status::Done).unwrap();
        checklist.set_status(7, Status::Done).unwrap();

        let done_only: StatusFilter = [Status::Done].into_iter().collect();
        let filtered = checklist.filter_by_status(&done_only);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].label, TEMPLATE[2].label);
        assert_eq!(filtered[1].label, TEMPLATE[7].label);

        assert_eq!(checklist.filter_by_status(&StatusFilter::all()).len(), 15);
        assert!(checklist.filter_by_status(&StatusFilter::none()).is_empty());
    }

    #[test]
    fn test_next_priorities_skips_done() {
        let mut checklist = Checklist::initialize(today());
        checklist.set_status(1, Status::Done).unwrap();
        checklist.set_status(2, Status::InProgress).unwrap();

        let next = checklist.next_priorities(DEFAULT_NEXT_LIMIT);
        assert_eq!(next, vec![TEMPLATE[0].label, TEMPLATE[2].label, TEMPLATE[3].label]);
    }

    #[test]
    fn test_next_priorities_fewer_than_limit() {
        let mut checklist = Checklist::initialize(today());
        for i in 0..14 {
            checklist.set_status(i, Status::Done).unwrap();
        }
        assert_eq!(checklist.next_priorities(3), vec![TEMPLATE[14].label]);

        checklist.set_status(14, Status::Done).unwrap();
        assert!(checklist.next_priorities(3).is_empty());
        assert!(checklist.is_complete());
    }

    #[test]
    fn test_summarize() {
        let mut checklist = Checklist::initialize(today());
        assert_eq!(checklist.summarize(), "Out of 15 items, 0 are complete.");
        checklist.set_status(3, Status::Done).unwrap();
        checklist.set_status(9, Status::Done).unwrap();
        assert_eq!(checklist.summarize(), "Out of 15 items, 2 are complete.");
    }

    #[test]
    fn test_advise_all_complete() {
        let mut checklist = Checklist::initialize(today());
        assert!(!checklist.advise(3).all_complete());
        for i in 0..15 {
            checklist.set_status(i, Status::Done).unwrap();
        }
        let report = checklist.advise(3);
        assert!(report.all_complete());
        assert_eq!(report.summary, "Out of 15 items, 15 are complete.");
    }

    #[test]
    fn test_status_counts() {
        let mut checklist = Checklist::initialize(today());
        checklist.set_status(0, Status::Done).unwrap();
        checklist.set_status(1, Status::InProgress).unwrap();
        checklist.set_status(2, Status::InProgress).unwrap();

        let counts = checklist.status_counts();
        assert_eq!(counts.done, 1);
        assert_eq!(counts.in_progress, 2);
        assert_eq!(counts.not_started, 12);
        assert_eq!(counts.not_started + counts.in_progress + counts.done, 15);
    }

    #[test]
    fn test_schedule_view() {
        let mut checklist = Checklist::initialize(today());
        checklist.set_status(5, Status::InProgress).unwrap();

        let schedule = checklist.schedule();
        assert_eq!(schedule.len(), 15);
        assert_eq!(schedule[5].status, Status::InProgress);
        assert_eq!(schedule[5].due_date, today() + Duration::days(10));
        assert_eq!(schedule[5].label, TEMPLATE[5].label);
    }
}
