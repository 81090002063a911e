//! Standalone task board use-cases.
//!
//! # Responsibility
//! - Own the task collection for one session and expose its columns.
//! - Persist the whole collection after every successful mutation.
//!
//! # Invariants
//! - The collection is loaded once, in [`TaskService::open`].
//! - A failed save restores the board to its state before the mutation.
//! - No-op and aborted moves never write.

use crate::board::ordered::{MoveOutcome, OrderedBoard, PriorityOrder};
use crate::board::progress::BoardProgress;
use crate::model::ids::{IdAllocator, TaskId};
use crate::model::status::{Status, StatusValue};
use crate::model::task::{NewTask, Task, TaskPatch};
use crate::repo::board_store::BoardStore;
use crate::repo::kv_store::KeyValueStore;
use crate::service::error::{non_blank, ServiceError, ServiceResult};
use log::{debug, warn};

type TaskBoard = OrderedBoard<Task, PriorityOrder>;

/// Task board bound to one store.
pub struct TaskService<S> {
    store: BoardStore<S>,
    board: TaskBoard,
    ids: IdAllocator,
}

impl<S: KeyValueStore> TaskService<S> {
    /// Loads the task collection; unreadable data yields an empty board.
    pub fn open(store: BoardStore<S>) -> Self {
        let tasks = store.load_tasks();
        let ids = IdAllocator::seeded(tasks.iter().map(|task| task.id));
        Self {
            store,
            board: OrderedBoard::new(tasks, PriorityOrder),
            ids,
        }
    }

    /// Tasks in stored order.
    pub fn tasks(&self) -> &[Task] {
        self.board.items()
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.board.get(id)
    }

    /// One column sorted by priority, then due date.
    pub fn column(&self, status: Status) -> Vec<&Task> {
        self.board.column(status)
    }

    pub fn columns(&self) -> Vec<(Status, Vec<&Task>)> {
        self.board.columns()
    }

    pub fn progress(&self) -> BoardProgress {
        BoardProgress::of(self.board.items())
    }

    /// Appends a new task and returns its id.
    pub fn create_task(&mut self, request: NewTask) -> ServiceResult<TaskId> {
        let text = non_blank(&request.text, ServiceError::EmptyText)?;
        let snapshot = self.board.clone();
        let id = self.ids.next_id();
        let task = Task {
            id,
            text,
            priority: request.priority.into(),
            due_date: request.due_date.into(),
            status: StatusValue::Known(request.status),
            done: false,
        };
        self.board.insert(task);
        self.write_through(snapshot, "create")?;
        Ok(id)
    }

    /// Applies a field-wise edit; the task keeps its place in the sequence.
    pub fn edit_task(&mut self, id: TaskId, mut patch: TaskPatch) -> ServiceResult<()> {
        if let Some(text) = patch.text.take() {
            patch.text = Some(non_blank(&text, ServiceError::EmptyText)?);
        }
        let snapshot = self.board.clone();
        if !self.board.edit(id, |task| task.apply(&patch)) {
            return Err(ServiceError::TaskNotFound(id));
        }
        self.write_through(snapshot, "edit")
    }

    pub fn delete_task(&mut self, id: TaskId) -> ServiceResult<Task> {
        let snapshot = self.board.clone();
        let removed = self
            .board
            .delete(id)
            .ok_or(ServiceError::TaskNotFound(id))?;
        self.write_through(snapshot, "delete")?;
        Ok(removed)
    }

    /// Drags the task shown at `source_index` of `source_status` to
    /// `dest_index` of `dest_status`.
    pub fn move_task(
        &mut self,
        source_status: Status,
        source_index: usize,
        dest_status: Status,
        dest_index: usize,
    ) -> ServiceResult<MoveOutcome<TaskId>> {
        let snapshot = self.board.clone();
        let outcome = self
            .board
            .move_item(source_status, source_index, dest_status, dest_index);
        debug!(
            "event=board_move module=service status={} collection=tasks from={source_status}:{source_index} to={dest_status}:{dest_index} outcome={}",
            if outcome.is_moved() { "ok" } else { "skip" },
            outcome.label()
        );
        if outcome.is_moved() {
            self.write_through(snapshot, "move")?;
        }
        Ok(outcome)
    }

    fn write_through(&mut self, snapshot: TaskBoard, op: &str) -> ServiceResult<()> {
        if let Err(err) = self.store.save_tasks(self.board.items()) {
            self.board = snapshot;
            warn!("event=board_rollback module=service status=ok collection=tasks op={op}");
            return Err(err.into());
        }
        Ok(())
    }
}
