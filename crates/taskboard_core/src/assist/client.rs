//! Typed assistant operations over an [`AssistTransport`].
//!
//! # Invariants
//! - Each operation issues at most one transport call.
//! - Every call emits one `assist_call` event with duration and status.

use crate::assist::payload::{parse_day_plan, parse_project_plan, parse_steps};
use crate::assist::{
    project_plan_prompt, AssistError, AssistRequest, AssistResult, AssistTransport,
    DayPlanOutcome, SubtaskDraft,
};
use crate::model::project::NewProject;
use crate::schedule::agenda::DayAgenda;
use chrono::NaiveDate;
use log::{info, warn};
use serde_json::Value;
use std::time::Instant;

/// Assistant facade; holds no board state.
#[derive(Debug, Clone)]
pub struct AssistClient<T> {
    transport: T,
}

impl<T: AssistTransport> AssistClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Asks for small starter steps for one task.
    pub fn suggest_steps(&self, task: &str) -> AssistResult<Vec<String>> {
        let task = task.trim();
        if task.is_empty() {
            return Err(AssistError::EmptyRequest);
        }
        let request = AssistRequest::StarterSteps {
            task: task.to_string(),
        };
        self.exchange(&request, parse_steps)
    }

    /// Asks for dated subtasks between `today` and the project's due date.
    pub fn plan_project(
        &self,
        project: &NewProject,
        today: NaiveDate,
    ) -> AssistResult<Vec<SubtaskDraft>> {
        if project.name.trim().is_empty() {
            return Err(AssistError::EmptyRequest);
        }
        let due_date = project
            .due_date
            .ok_or(AssistError::MissingProjectDueDate)?;
        let request = AssistRequest::ProjectPlan {
            prompt: project_plan_prompt(&project.name, &project.desc, today, due_date),
        };
        self.exchange(&request, parse_project_plan)
    }

    /// Asks for a plan of the day; skips the call when nothing is due.
    pub fn plan_day(&self, agenda: &DayAgenda) -> AssistResult<DayPlanOutcome> {
        if agenda.is_empty() {
            info!("event=assist_call module=assist status=skip kind=day_plan reason=nothing_due");
            return Ok(DayPlanOutcome::NothingDue);
        }
        let input = agenda
            .to_request_input()
            .map_err(|err| AssistError::MalformedPayload(err.to_string()))?;
        let request = AssistRequest::DayPlan { input };
        self.exchange(&request, parse_day_plan)
            .map(DayPlanOutcome::Planned)
    }

    fn exchange<R>(
        &self,
        request: &AssistRequest,
        parse: impl FnOnce(&Value) -> AssistResult<R>,
    ) -> AssistResult<R> {
        let started_at = Instant::now();
        let kind = request.kind();
        let result = self
            .transport
            .call(request)
            .and_then(|payload| parse(&payload));

        match &result {
            Ok(_) => info!(
                "event=assist_call module=assist status=ok kind={kind} endpoint={} duration_ms={}",
                request.endpoint(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => warn!(
                "event=assist_call module=assist status=error kind={kind} endpoint={} duration_ms={} error_code={} error={err}",
                request.endpoint(),
                started_at.elapsed().as_millis(),
                err.code()
            ),
        }
        result
    }
}
