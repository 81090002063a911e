//! Project and subtask models.
//!
//! # Invariants
//! - A project's `tasks` order is insertion/drag order, never derived.
//! - Subtasks share an order space only with siblings of the same project.
//! - A missing `color` is resolved through the default table at read time.

use crate::model::defaults;
use crate::model::due_date::DueDate;
use crate::model::ids::{ProjectId, SubtaskId};
use crate::model::status::{Status, StatusValue};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One step of a project. Subtasks carry no priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub id: SubtaskId,
    pub text: String,
    #[serde(rename = "dueDate", default)]
    pub due_date: DueDate,
    #[serde(default, skip_serializing_if = "StatusValue::is_missing")]
    pub status: StatusValue,
    #[serde(default)]
    pub done: bool,
}

impl Subtask {
    pub fn new(id: SubtaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            due_date: DueDate::Unset,
            status: StatusValue::Known(Status::Todo),
            done: false,
        }
    }

    pub fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date.into();
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = StatusValue::Known(status);
        self
    }

    pub fn effective_status(&self) -> Status {
        self.status.effective()
    }

    pub fn due(&self) -> Option<NaiveDate> {
        self.due_date.date()
    }

    pub fn apply(&mut self, patch: &SubtaskPatch) {
        if let Some(text) = &patch.text {
            self.text = text.clone();
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date.into();
        }
        if let Some(status) = patch.status {
            self.status = StatusValue::Known(status);
        }
    }
}

/// Field-wise edit of a subtask.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubtaskPatch {
    pub text: Option<String>,
    pub due_date: Option<Option<NaiveDate>>,
    pub status: Option<Status>,
}

/// A named group of ordered subtasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub desc: String,
    #[serde(rename = "dueDate", default)]
    pub due_date: DueDate,
    #[serde(default)]
    pub tasks: Vec<Subtask>,
}

impl Project {
    pub fn new(id: ProjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: None,
            desc: String::new(),
            due_date: DueDate::Unset,
            tasks: Vec::new(),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Color used for calendar entries of this project.
    pub fn display_color(&self) -> &str {
        match self.color.as_deref() {
            Some(color) if !color.trim().is_empty() => color,
            _ => defaults::PROJECT_FALLBACK_COLOR,
        }
    }

    /// Number of subtasks not flagged `done`.
    pub fn pending_count(&self) -> usize {
        self.tasks.iter().filter(|task| !task.done).count()
    }

    pub fn subtask(&self, id: SubtaskId) -> Option<&Subtask> {
        self.tasks.iter().find(|task| task.id == id)
    }
}

/// Input for creating a project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub desc: String,
    pub due_date: Option<NaiveDate>,
}

impl NewProject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }

    pub fn due(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{Project, Subtask};
    use crate::model::defaults::PROJECT_FALLBACK_COLOR;

    #[test]
    fn display_color_falls_back_without_writing() {
        let mut project = Project::new(1, "Garden");
        assert_eq!(project.display_color(), PROJECT_FALLBACK_COLOR);
        assert_eq!(project.color, None);

        project.color = Some("  ".to_string());
        assert_eq!(project.display_color(), PROJECT_FALLBACK_COLOR);

        project.color = Some("#5C9DFF".to_string());
        assert_eq!(project.display_color(), "#5C9DFF");
    }

    #[test]
    fn pending_count_uses_done_flag() {
        let mut project = Project::new(1, "Move house");
        project.tasks.push(Subtask::new(1, "pack"));
        let mut finished = Subtask::new(2, "book van");
        finished.done = true;
        project.tasks.push(finished);
        assert_eq!(project.pending_count(), 1);
    }
}
