//! Task checklist record.
//!
//! # Invariants
//! - `text` is trimmed and non-empty.
//! - `id` is generated once and never reused.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type TaskId = Uuid;

const DATE_DISPLAY_FORMAT: &str = "%d-%m-%Y";
const TIME_DISPLAY_FORMAT: &str = "%I:%M %p";

/// One checklist item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub created_date: NaiveDate,
    pub created_time: NaiveTime,
}

impl Task {
    /// Creates a pending task stamped with `created_at`.
    ///
    /// Returns `None` when `text` is blank after trim.
    pub fn new(text: &str, created_at: NaiveDateTime) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            id: Uuid::new_v4(),
            text: trimmed.to_string(),
            completed: false,
            created_date: created_at.date(),
            created_time: created_at.time(),
        })
    }

    /// Creation date as shown on the checklist, e.g. `07-03-2024`.
    pub fn display_date(&self) -> String {
        self.created_date.format(DATE_DISPLAY_FORMAT).to_string()
    }

    /// Creation time as shown on the checklist, e.g. `04:05 PM`.
    pub fn display_time(&self) -> String {
        self.created_time.format(TIME_DISPLAY_FORMAT).to_string()
    }
}

/// Completion aggregate over the current task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskSummary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

/// Progress banner state derived from a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum TaskProgress {
    /// No tasks yet.
    Empty,
    /// Tasks exist but none is done.
    NotStarted { pending: usize },
    /// Some but not all tasks are done.
    InProgress { completed: usize, total: usize },
    /// Every task is done.
    AllDone { total: usize },
}

impl TaskSummary {
    pub fn progress(&self) -> TaskProgress {
        if self.total == 0 {
            TaskProgress::Empty
        } else if self.completed == self.total {
            TaskProgress::AllDone { total: self.total }
        } else if self.completed == 0 {
            TaskProgress::NotStarted {
                pending: self.pending,
            }
        } else {
            TaskProgress::InProgress {
                completed: self.completed,
                total: self.total,
            }
        }
    }
}
