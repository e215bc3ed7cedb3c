//! Export-readiness checklist model
//!
//! Holds the fixed 15-item task sequence, applies status edits and computes
//! the derived views the dashboard renders.

pub mod model;
pub mod template;
pub mod types;

pub use model::{last_due_date, Checklist, DEFAULT_NEXT_LIMIT};
pub use template::{TemplateItem, CHECKLIST_LEN, TEMPLATE};
pub use types::{
    AdvisorReport, CompletionStats, ScheduleEntry, Status, StatusCounts, StatusFilter, TaskRecord,
};
