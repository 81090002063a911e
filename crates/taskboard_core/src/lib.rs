//! Core logic of a personal task organizer.
//!
//! A standalone task board and per-project subtask boards share one workflow
//! vocabulary. Calendar and agenda views are derived from both. Collections
//! are persisted whole through a key-value store, and an external
//! text-generation assistant can be consulted for plans.

pub mod assist;
pub mod board;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod schedule;
pub mod service;

pub use assist::{
    AssistClient, AssistError, AssistRequest, AssistResult, AssistTransport, DayPlan,
    DayPlanOutcome, PlanStep, SubtaskDraft,
};
pub use board::ordered::{
    BoardItem, ColumnOrdering, InsertionOrder, MoveOutcome, OrderedBoard, PriorityOrder,
};
pub use board::progress::BoardProgress;
pub use config::{CoreConfig, StorageKeys};
pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_from_config, init_logging, logging_status};
pub use model::due_date::DueDate;
pub use model::ids::{ProjectId, SubtaskId, TaskId};
pub use model::project::{NewProject, Project, Subtask, SubtaskPatch};
pub use model::status::{Priority, PriorityValue, Status, StatusValue};
pub use model::task::{NewTask, Task, TaskPatch};
pub use repo::board_store::BoardStore;
pub use repo::kv_store::{
    KeyValueStore, MemoryKeyValueStore, RepoError, RepoResult, SqliteKeyValueStore,
};
pub use schedule::agenda::{build_agenda, AgendaItem, DayAgenda};
pub use schedule::due::{countdown_status, triage_status, CountdownStatus, TriageStatus};
pub use schedule::map::{build_schedule, EntrySource, ScheduleEntry, ScheduleMap};
pub use service::{Organizer, ProjectService, ServiceError, ServiceResult, TaskService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
