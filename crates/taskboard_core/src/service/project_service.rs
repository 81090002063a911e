//! Project and subtask use-cases.
//!
//! # Responsibility
//! - Own the project collection for one session.
//! - Run each project's subtasks as an insertion-ordered board.
//! - Persist the whole collection after every successful mutation.
//!
//! # Invariants
//! - Subtask moves never cross project boundaries.
//! - A failed save restores the collection to its state before the mutation.
//! - Assistant plans are applied only through
//!   [`ProjectService::create_project_from_plan`].

use crate::assist::SubtaskDraft;
use crate::board::ordered::{column_of, InsertionOrder, MoveOutcome, OrderedBoard};
use crate::board::progress::BoardProgress;
use crate::model::defaults::palette_color;
use crate::model::ids::{IdAllocator, ProjectId, SubtaskId};
use crate::model::project::{NewProject, Project, Subtask, SubtaskPatch};
use crate::model::status::Status;
use crate::repo::board_store::BoardStore;
use crate::repo::kv_store::KeyValueStore;
use crate::service::error::{non_blank, ServiceError, ServiceResult};
use chrono::NaiveDate;
use log::{debug, warn};
use std::mem;

/// Project collection bound to one store.
pub struct ProjectService<S> {
    store: BoardStore<S>,
    projects: Vec<Project>,
    ids: IdAllocator,
}

impl<S: KeyValueStore> ProjectService<S> {
    /// Loads the project collection; unreadable data yields no projects.
    pub fn open(store: BoardStore<S>) -> Self {
        let projects = store.load_projects();
        let ids = IdAllocator::seeded(projects.iter().flat_map(|project| {
            std::iter::once(project.id).chain(project.tasks.iter().map(|task| task.id))
        }));
        Self {
            store,
            projects,
            ids,
        }
    }

    /// Projects in stored order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn create_project(&mut self, request: NewProject) -> ServiceResult<ProjectId> {
        self.create_project_from_plan(request, Vec::new())
    }

    /// Creates a project together with accepted plan subtasks, in plan order.
    pub fn create_project_from_plan(
        &mut self,
        request: NewProject,
        drafts: Vec<SubtaskDraft>,
    ) -> ServiceResult<ProjectId> {
        let name = non_blank(&request.name, ServiceError::EmptyName)?;
        let snapshot = self.projects.clone();
        let id = self.ids.next_id();
        let mut project =
            Project::new(id, name).with_color(palette_color(self.projects.len()));
        project.desc = request.desc.trim().to_string();
        project.due_date = request.due_date.into();
        for draft in drafts {
            let subtask = Subtask::new(self.ids.next_id(), draft.text)
                .with_due_date(Some(draft.due_date))
                .with_status(draft.status);
            project.tasks.push(subtask);
        }
        self.projects.push(project);
        self.write_through(snapshot, "create_project")?;
        Ok(id)
    }

    pub fn rename_project(&mut self, id: ProjectId, name: &str) -> ServiceResult<()> {
        let name = non_blank(name, ServiceError::EmptyName)?;
        self.update_project(id, "rename_project", |project| project.name = name)
    }

    pub fn update_description(&mut self, id: ProjectId, desc: &str) -> ServiceResult<()> {
        let desc = desc.trim().to_string();
        self.update_project(id, "update_description", |project| project.desc = desc)
    }

    pub fn set_project_due_date(
        &mut self,
        id: ProjectId,
        due_date: Option<NaiveDate>,
    ) -> ServiceResult<()> {
        self.update_project(id, "set_due_date", |project| project.due_date = due_date.into())
    }

    /// Removes a project with all of its subtasks.
    pub fn delete_project(&mut self, id: ProjectId) -> ServiceResult<Project> {
        let index = self.project_index(id)?;
        let snapshot = self.projects.clone();
        let removed = self.projects.remove(index);
        self.write_through(snapshot, "delete_project")?;
        Ok(removed)
    }

    /// Appends a `todo` subtask to a project and returns its id.
    pub fn add_subtask(
        &mut self,
        project_id: ProjectId,
        text: &str,
        due_date: Option<NaiveDate>,
    ) -> ServiceResult<SubtaskId> {
        let text = non_blank(text, ServiceError::EmptyText)?;
        let index = self.project_index(project_id)?;
        let snapshot = self.projects.clone();
        let id = self.ids.next_id();
        self.projects[index]
            .tasks
            .push(Subtask::new(id, text).with_due_date(due_date));
        self.write_through(snapshot, "add_subtask")?;
        Ok(id)
    }

    pub fn edit_subtask(
        &mut self,
        project_id: ProjectId,
        subtask_id: SubtaskId,
        mut patch: SubtaskPatch,
    ) -> ServiceResult<()> {
        if let Some(text) = patch.text.take() {
            patch.text = Some(non_blank(&text, ServiceError::EmptyText)?);
        }
        self.update_subtask(project_id, subtask_id, "edit_subtask", |subtask| {
            subtask.apply(&patch)
        })
    }

    /// Flips the `done` flag; returns the new value.
    pub fn toggle_subtask_done(
        &mut self,
        project_id: ProjectId,
        subtask_id: SubtaskId,
    ) -> ServiceResult<bool> {
        let mut done = false;
        self.update_subtask(project_id, subtask_id, "toggle_done", |subtask| {
            subtask.done = !subtask.done;
            done = subtask.done;
        })?;
        Ok(done)
    }

    pub fn delete_subtask(
        &mut self,
        project_id: ProjectId,
        subtask_id: SubtaskId,
    ) -> ServiceResult<Subtask> {
        let index = self.project_index(project_id)?;
        let position = self.projects[index]
            .tasks
            .iter()
            .position(|subtask| subtask.id == subtask_id)
            .ok_or(ServiceError::SubtaskNotFound {
                project_id,
                subtask_id,
            })?;
        let snapshot = self.projects.clone();
        let removed = self.projects[index].tasks.remove(position);
        self.write_through(snapshot, "delete_subtask")?;
        Ok(removed)
    }

    /// Drags a subtask between columns of its own project.
    pub fn move_subtask(
        &mut self,
        project_id: ProjectId,
        source_status: Status,
        source_index: usize,
        dest_status: Status,
        dest_index: usize,
    ) -> ServiceResult<MoveOutcome<SubtaskId>> {
        let index = self.project_index(project_id)?;
        let snapshot = self.projects.clone();
        let project = &mut self.projects[index];
        let mut board = OrderedBoard::new(mem::take(&mut project.tasks), InsertionOrder);
        let outcome = board.move_item(source_status, source_index, dest_status, dest_index);
        project.tasks = board.into_items();

        debug!(
            "event=board_move module=service status={} collection=subtasks project_id={project_id} from={source_status}:{source_index} to={dest_status}:{dest_index} outcome={}",
            if outcome.is_moved() { "ok" } else { "skip" },
            outcome.label()
        );
        if outcome.is_moved() {
            self.write_through(snapshot, "move_subtask")?;
        }
        Ok(outcome)
    }

    /// One subtask column of a project, in stored order.
    pub fn subtask_column(
        &self,
        project_id: ProjectId,
        status: Status,
    ) -> ServiceResult<Vec<&Subtask>> {
        let project = self
            .project(project_id)
            .ok_or(ServiceError::ProjectNotFound(project_id))?;
        Ok(column_of(&project.tasks, status, &InsertionOrder))
    }

    pub fn subtask_progress(&self, project_id: ProjectId) -> ServiceResult<BoardProgress> {
        let project = self
            .project(project_id)
            .ok_or(ServiceError::ProjectNotFound(project_id))?;
        Ok(BoardProgress::of(&project.tasks))
    }

    fn project_index(&self, id: ProjectId) -> ServiceResult<usize> {
        self.projects
            .iter()
            .position(|project| project.id == id)
            .ok_or(ServiceError::ProjectNotFound(id))
    }

    fn update_project(
        &mut self,
        id: ProjectId,
        op: &str,
        apply: impl FnOnce(&mut Project),
    ) -> ServiceResult<()> {
        let index = self.project_index(id)?;
        let snapshot = self.projects.clone();
        apply(&mut self.projects[index]);
        self.write_through(snapshot, op)
    }

    fn update_subtask(
        &mut self,
        project_id: ProjectId,
        subtask_id: SubtaskId,
        op: &str,
        apply: impl FnOnce(&mut Subtask),
    ) -> ServiceResult<()> {
        let index = self.project_index(project_id)?;
        let snapshot = self.projects.clone();
        let subtask = self.projects[index]
            .tasks
            .iter_mut()
            .find(|subtask| subtask.id == subtask_id)
            .ok_or(ServiceError::SubtaskNotFound {
                project_id,
                subtask_id,
            })?;
        apply(subtask);
        self.write_through(snapshot, op)
    }

    fn write_through(&mut self, snapshot: Vec<Project>, op: &str) -> ServiceResult<()> {
        if let Err(err) = self.store.save_projects(&self.projects) {
            self.projects = snapshot;
            warn!("event=board_rollback module=service status=ok collection=projects op={op}");
            return Err(err.into());
        }
        Ok(())
    }
}
