//! Creation-time identifiers.
//!
//! # Invariants
//! - Allocated ids are strictly increasing within one allocator.
//! - An allocator seeded from a collection never returns an id already in it.

use chrono::Utc;

/// Identifier of a standalone task.
pub type TaskId = i64;
/// Identifier of a project.
pub type ProjectId = i64;
/// Identifier of a project subtask.
pub type SubtaskId = i64;

/// Monotonic id source derived from the wall clock in epoch milliseconds.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    last: i64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an allocator that will never return any of `existing`.
    pub fn seeded(existing: impl IntoIterator<Item = i64>) -> Self {
        let last = existing.into_iter().max().unwrap_or(0);
        Self { last }
    }

    /// Returns a fresh id for an item created now.
    pub fn next_id(&mut self) -> i64 {
        self.next_at(Utc::now().timestamp_millis())
    }

    /// Returns a fresh id for an item created at `now_ms`.
    ///
    /// Several items created within the same millisecond get consecutive ids.
    pub fn next_at(&mut self, now_ms: i64) -> i64 {
        let id = now_ms.max(self.last + 1);
        self.last = id;
        id
    }

    /// Records ids that entered the collection from elsewhere.
    pub fn observe(&mut self, id: i64) {
        self.last = self.last.max(id);
    }
}
