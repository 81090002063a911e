//! Daily triage of due and overdue work.
//!
//! # Responsibility
//! - Collect items that are actionable on a given day using the triage
//!   classifier.
//! - Produce the context payload sent to the assistant for day planning.
//!
//! # Invariants
//! - Items flagged `done` are skipped; undated items are never actionable.
//! - Standalone tasks precede project subtasks, both in stored order.

use crate::model::due_date::DATE_FORMAT;
use crate::model::project::Project;
use crate::model::task::Task;
use crate::schedule::due::{triage_status, TriageStatus};
use chrono::NaiveDate;
use serde::Serialize;

/// One item due on the agenda day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgendaItem {
    pub text: String,
    /// Owning project name; `None` for standalone tasks.
    pub project: Option<String>,
}

/// Work that is due or overdue on one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayAgenda {
    pub today: NaiveDate,
    pub due_today: Vec<AgendaItem>,
    /// Overdue labels; project items read `[project] text`.
    pub overdue: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AgendaRequestInput<'a> {
    tasks_due_today: &'a [AgendaItem],
    overdue_tasks: &'a [String],
    today: String,
}

impl DayAgenda {
    /// Whether there is nothing due or overdue.
    pub fn is_empty(&self) -> bool {
        self.due_today.is_empty() && self.overdue.is_empty()
    }

    /// Serialized context for a day-plan request.
    pub fn to_request_input(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&AgendaRequestInput {
            tasks_due_today: &self.due_today,
            overdue_tasks: &self.overdue,
            today: self.today.format(DATE_FORMAT).to_string(),
        })
    }

    fn classify(&mut self, text: &str, project: Option<&str>, due: Option<NaiveDate>, done: bool) {
        let Some(due) = due else {
            return;
        };
        if done {
            return;
        }
        match triage_status(self.today, due) {
            TriageStatus::DueToday => self.due_today.push(AgendaItem {
                text: text.to_string(),
                project: project.map(str::to_string),
            }),
            TriageStatus::Overdue => self.overdue.push(match project {
                Some(name) => format!("[{name}] {text}"),
                None => text.to_string(),
            }),
            TriageStatus::Future => {}
        }
    }
}

/// Builds the agenda for `today` from both collections.
pub fn build_agenda(today: NaiveDate, tasks: &[Task], projects: &[Project]) -> DayAgenda {
    let mut agenda = DayAgenda {
        today,
        due_today: Vec::new(),
        overdue: Vec::new(),
    };

    for task in tasks {
        agenda.classify(&task.text, None, task.due(), task.done);
    }
    for project in projects {
        for subtask in &project.tasks {
            agenda.classify(
                &subtask.text,
                Some(project.name.as_str()),
                subtask.due(),
                subtask.done,
            );
        }
    }

    agenda
}
