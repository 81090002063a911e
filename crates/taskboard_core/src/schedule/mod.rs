//! Read-side date projections.
//!
//! # Responsibility
//! - Classify due dates by urgency.
//! - Project tasks and subtasks onto a calendar and a daily agenda.
//!
//! # Invariants
//! - Every projection is pure and recomputed from current state on demand.

pub mod agenda;
pub mod due;
pub mod map;
