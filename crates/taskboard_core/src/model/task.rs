//! Standalone task model.
//!
//! # Responsibility
//! - Define the canonical record shown on the main task board.
//! - Provide patch helpers used by edit operations.
//!
//! # Invariants
//! - `id` is unique within the task collection and never reused.
//! - `text` is non-empty after trimming.
//! - `status` drives columns, progress and the calendar; the `done` flag
//!   drives the daily agenda.

use crate::model::due_date::DueDate;
use crate::model::ids::TaskId;
use crate::model::status::{Priority, PriorityValue, Status, StatusValue};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One standalone task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    #[serde(default, skip_serializing_if = "PriorityValue::is_missing")]
    pub priority: PriorityValue,
    #[serde(rename = "dueDate", default)]
    pub due_date: DueDate,
    #[serde(default, skip_serializing_if = "StatusValue::is_missing")]
    pub status: StatusValue,
    #[serde(default)]
    pub done: bool,
}

impl Task {
    /// Creates a task in the default `todo` column.
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            priority: PriorityValue::Known(Priority::default()),
            due_date: DueDate::Unset,
            status: StatusValue::Known(Status::Todo),
            done: false,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = PriorityValue::Known(priority);
        self
    }

    pub fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date.into();
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = StatusValue::Known(status);
        self
    }

    /// Column this task is grouped under.
    pub fn effective_status(&self) -> Status {
        self.status.effective()
    }

    pub fn effective_priority(&self) -> Priority {
        self.priority.effective()
    }

    /// Calendar day the task is scheduled on, if any.
    pub fn due(&self) -> Option<NaiveDate> {
        self.due_date.date()
    }

    /// Applies an edit in place. Position in the flat sequence is untouched.
    pub fn apply(&mut self, patch: &TaskPatch) {
        if let Some(text) = &patch.text {
            self.text = text.clone();
        }
        if let Some(priority) = patch.priority {
            self.priority = PriorityValue::Known(priority);
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date.into();
        }
        if let Some(status) = patch.status {
            self.status = StatusValue::Known(status);
        }
    }
}

/// Input for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub text: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub status: Status,
}

impl NewTask {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            priority: Priority::default(),
            due_date: None,
            status: Status::Todo,
        }
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn due(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }
}

/// Field-wise edit of a task. `None` leaves a field unchanged.
///
/// `due_date: Some(None)` clears the due date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub text: Option<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<Option<NaiveDate>>,
    pub status: Option<Status>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.text.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
            && self.status.is_none()
    }
}
