//! Assistant capability contract.
//!
//! # Responsibility
//! - Describe the requests the board sends to an external text-generation
//!   assistant and the typed results it gets back.
//! - Normalize loosely shaped assistant payloads into those results.
//!
//! # Invariants
//! - Assistant calls never read or write board state; results are transient
//!   values handed back to the caller.
//! - Every failure maps to an [`AssistError`] with a recoverable user
//!   message.

pub mod client;
pub mod payload;

use crate::model::due_date::DATE_FORMAT;
use crate::model::status::Status;
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{json, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use client::AssistClient;

pub type AssistResult<T> = Result<T, AssistError>;

/// Assistant call failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistError {
    /// The transport could not reach the assistant or timed out.
    Transport(String),
    /// The assistant answered with an explicit error.
    Rejected(String),
    /// The answer could not be interpreted.
    MalformedPayload(String),
    /// A project plan was answered without usable dated subtasks.
    InvalidSubtasks(String),
    /// Project planning needs a project due date.
    MissingProjectDueDate,
    /// Request text is blank.
    EmptyRequest,
}

impl AssistError {
    /// Stable code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Rejected(_) => "rejected",
            Self::MalformedPayload(_) => "malformed_payload",
            Self::InvalidSubtasks(_) => "invalid_subtasks",
            Self::MissingProjectDueDate => "missing_project_due_date",
            Self::EmptyRequest => "empty_request",
        }
    }

    /// Message shown to the user; the board remains usable.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Transport(_) | Self::Rejected(_) => {
                "The assistant could not be reached. Try again."
            }
            Self::MalformedPayload(_) => {
                "The assistant returned an invalid response. Try again or rephrase."
            }
            Self::InvalidSubtasks(_) => "The assistant did not return valid subtasks with due dates.",
            Self::MissingProjectDueDate => {
                "Please set a due date for the project before asking for a plan."
            }
            Self::EmptyRequest => "Describe the task or idea first.",
        }
    }
}

impl Display for AssistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(message) => write!(f, "assistant transport failed: {message}"),
            Self::Rejected(message) => write!(f, "assistant rejected request: {message}"),
            Self::MalformedPayload(message) => write!(f, "malformed assistant payload: {message}"),
            Self::InvalidSubtasks(message) => write!(f, "invalid plan subtasks: {message}"),
            Self::MissingProjectDueDate => write!(f, "project due date is required for planning"),
            Self::EmptyRequest => write!(f, "assistant request text is empty"),
        }
    }
}

impl Error for AssistError {}

/// One request to the assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssistRequest {
    /// Break one task into small starter steps.
    StarterSteps { task: String },
    /// Break a project into dated subtasks.
    ProjectPlan { prompt: String },
    /// Plan today's work from an agenda payload.
    DayPlan { input: String },
}

impl AssistRequest {
    /// Path of the assistant endpoint serving this request.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::StarterSteps { .. } => "/gemma_steps",
            Self::ProjectPlan { .. } => "/gemma",
            Self::DayPlan { .. } => "/generate",
        }
    }

    /// JSON body expected by the endpoint.
    pub fn body(&self) -> Value {
        match self {
            Self::StarterSteps { task } => json!({ "task": task }),
            Self::ProjectPlan { prompt } => json!({ "prompt": prompt }),
            Self::DayPlan { input } => json!({ "mode": "planner_day", "input": input }),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::StarterSteps { .. } => "starter_steps",
            Self::ProjectPlan { .. } => "project_plan",
            Self::DayPlan { .. } => "day_plan",
        }
    }
}

/// Externally provided request/response function.
///
/// Calls block until the assistant answers or fails.
pub trait AssistTransport {
    fn call(&self, request: &AssistRequest) -> AssistResult<Value>;
}

impl<T: AssistTransport + ?Sized> AssistTransport for &T {
    fn call(&self, request: &AssistRequest) -> AssistResult<Value> {
        (**self).call(request)
    }
}

/// One dated subtask proposed by a project plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtaskDraft {
    pub text: String,
    pub due_date: NaiveDate,
    pub status: Status,
}

/// One step of a day plan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanStep {
    pub task: String,
    /// Source project, when the step comes from a project.
    pub project: Option<String>,
    pub reason: Option<String>,
}

/// Structured day plan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayPlan {
    pub wellness: Option<String>,
    pub plan: Vec<PlanStep>,
    pub overdue: Vec<String>,
    pub advice: Option<String>,
    /// Free text returned instead of, or alongside, structured fields.
    pub narrative: Option<String>,
}

impl DayPlan {
    pub fn is_empty(&self) -> bool {
        self.wellness.is_none()
            && self.plan.is_empty()
            && self.overdue.is_empty()
            && self.advice.is_none()
            && self.narrative.is_none()
    }
}

/// Result of asking for a day plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayPlanOutcome {
    /// Nothing is due or overdue; the assistant was not called.
    NothingDue,
    Planned(DayPlan),
}

/// Builds the project breakdown prompt.
pub fn project_plan_prompt(name: &str, desc: &str, start: NaiveDate, end: NaiveDate) -> String {
    let desc = if desc.trim().is_empty() {
        "(none provided)"
    } else {
        desc.trim()
    };
    format!(
        "Break down the project \"{name}\" into 4-8 practical, beginner-friendly subtasks.\n\
         - The project starts on {start} and must be finished by {end}.\n\
         - Distribute subtask due dates evenly or logically between these dates (format: YYYY-MM-DD).\n\
         - Each subtask should have a \"text\" and a \"dueDate\" field. The last subtask must be due on or before the project deadline.\n\
         - Respond only as a JSON array: [{{\"text\": \"...\", \"dueDate\": \"YYYY-MM-DD\", \"status\": \"todo\"}}].\n\
         Project Description: {desc}.",
        name = name.trim(),
        start = start.format(DATE_FORMAT),
        end = end.format(DATE_FORMAT),
    )
}
