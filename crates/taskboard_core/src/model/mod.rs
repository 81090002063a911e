//! Entity model for tasks, projects and subtasks.
//!
//! # Responsibility
//! - Define the persisted shapes shared by boards and projections.
//! - Centralize read-time defaults (status, priority, colors).
//!
//! # Invariants
//! - Every entity is identified by a creation-time id that is never reused.
//! - Read-time coercions never mutate stored values.

pub mod defaults;
pub mod due_date;
pub mod ids;
pub mod project;
pub mod status;
pub mod task;
