//! Session facade combining both boards with the derived views.
//!
//! # Responsibility
//! - Open both collections over one store handle.
//! - Build schedule and agenda projections on demand.
//! - Route assistant requests without letting results touch the boards.

use crate::assist::{AssistClient, AssistResult, AssistTransport, DayPlanOutcome, SubtaskDraft};
use crate::config::StorageKeys;
use crate::model::project::NewProject;
use crate::repo::board_store::BoardStore;
use crate::repo::kv_store::KeyValueStore;
use crate::schedule::agenda::{build_agenda, DayAgenda};
use crate::schedule::map::{build_schedule, ScheduleMap};
use crate::service::project_service::ProjectService;
use crate::service::task_service::TaskService;
use chrono::NaiveDate;

/// Both boards of one session.
pub struct Organizer<S> {
    tasks: TaskService<S>,
    projects: ProjectService<S>,
}

impl<S: KeyValueStore + Clone> Organizer<S> {
    /// Opens both collections under the default storage keys.
    pub fn open(store: S) -> Self {
        Self::with_keys(store, StorageKeys::default())
    }

    pub fn with_keys(store: S, keys: StorageKeys) -> Self {
        Self {
            tasks: TaskService::open(BoardStore::with_keys(store.clone(), keys.clone())),
            projects: ProjectService::open(BoardStore::with_keys(store, keys)),
        }
    }

    pub fn tasks(&self) -> &TaskService<S> {
        &self.tasks
    }

    pub fn tasks_mut(&mut self) -> &mut TaskService<S> {
        &mut self.tasks
    }

    pub fn projects(&self) -> &ProjectService<S> {
        &self.projects
    }

    pub fn projects_mut(&mut self) -> &mut ProjectService<S> {
        &mut self.projects
    }

    /// Calendar view of open work across both collections.
    pub fn schedule(&self) -> ScheduleMap {
        build_schedule(self.tasks.tasks(), self.projects.projects())
    }

    pub fn agenda(&self, today: NaiveDate) -> DayAgenda {
        build_agenda(today, self.tasks.tasks(), self.projects.projects())
    }

    pub fn suggest_steps<T: AssistTransport>(
        &self,
        assistant: &AssistClient<T>,
        text: &str,
    ) -> AssistResult<Vec<String>> {
        assistant.suggest_steps(text)
    }

    /// Proposes subtasks for a project that is not created yet.
    ///
    /// Accepted drafts are applied with
    /// [`ProjectService::create_project_from_plan`].
    pub fn plan_project<T: AssistTransport>(
        &self,
        assistant: &AssistClient<T>,
        request: &NewProject,
        today: NaiveDate,
    ) -> AssistResult<Vec<SubtaskDraft>> {
        assistant.plan_project(request, today)
    }

    pub fn plan_day<T: AssistTransport>(
        &self,
        assistant: &AssistClient<T>,
        today: NaiveDate,
    ) -> AssistResult<DayPlanOutcome> {
        assistant.plan_day(&self.agenda(today))
    }
}
