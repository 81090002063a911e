//! Flat ordered item sequence with per-status column projections.
//!
//! # Responsibility
//! - Own the single ordered sequence of one collection.
//! - Derive every column on demand; columns are never stored.
//! - Relocate items between columns at an exact visual slot.
//!
//! # Invariants
//! - Insert appends; delete never reorders the remaining items.
//! - Edits never change an item's position in the flat sequence.
//! - A move that targets its own slot, or whose source slot is empty, leaves
//!   the sequence untouched.

use crate::board::sort::{sort_by_priority, Prioritized};
use crate::model::ids::{SubtaskId, TaskId};
use crate::model::project::Subtask;
use crate::model::status::{Status, StatusValue};
use crate::model::task::Task;
use std::fmt::Debug;

/// An entry that can live on an ordered board.
pub trait BoardItem {
    type Id: Copy + Eq + Debug;

    fn id(&self) -> Self::Id;
    /// Column the item is displayed in.
    fn status(&self) -> Status;
    fn set_status(&mut self, status: Status);
}

impl BoardItem for Task {
    type Id = TaskId;

    fn id(&self) -> TaskId {
        self.id
    }

    fn status(&self) -> Status {
        self.effective_status()
    }

    fn set_status(&mut self, status: Status) {
        self.status = StatusValue::Known(status);
    }
}

impl BoardItem for Subtask {
    type Id = SubtaskId;

    fn id(&self) -> SubtaskId {
        self.id
    }

    fn status(&self) -> Status {
        self.effective_status()
    }

    fn set_status(&mut self, status: Status) {
        self.status = StatusValue::Known(status);
    }
}

/// Display order of one column, chosen per board instance.
pub trait ColumnOrdering<T> {
    /// Reorders a column that arrives in flat-sequence order.
    fn arrange(&self, column: &mut Vec<&T>);
}

/// Columns follow the flat sequence directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertionOrder;

impl<T> ColumnOrdering<T> for InsertionOrder {
    fn arrange(&self, _column: &mut Vec<&T>) {}
}

/// Columns are sorted by priority, then due date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriorityOrder;

impl<T: Prioritized> ColumnOrdering<T> for PriorityOrder {
    fn arrange(&self, column: &mut Vec<&T>) {
        sort_by_priority(column);
    }
}

/// Projects one column out of a flat sequence.
pub fn column_of<'a, T: BoardItem, O: ColumnOrdering<T>>(
    items: &'a [T],
    status: Status,
    ordering: &O,
) -> Vec<&'a T> {
    let mut column: Vec<&T> = items.iter().filter(|item| item.status() == status).collect();
    ordering.arrange(&mut column);
    column
}

/// Result of [`OrderedBoard::move_item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome<Id> {
    /// Source and destination slot are the same.
    Unchanged,
    /// No item occupies the source slot.
    MissingSource,
    /// The item with this id was relocated.
    Moved(Id),
}

impl<Id> MoveOutcome<Id> {
    /// Whether the sequence was mutated and must be persisted.
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unchanged => "unchanged",
            Self::MissingSource => "missing_source",
            Self::Moved(_) => "moved",
        }
    }
}

/// One collection's flat sequence plus its column ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedBoard<T, O> {
    items: Vec<T>,
    ordering: O,
}

impl<T: BoardItem, O: ColumnOrdering<T>> OrderedBoard<T, O> {
    pub fn new(items: Vec<T>, ordering: O) -> Self {
        Self { items, ordering }
    }

    /// The flat sequence.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Index of `id` in the flat sequence.
    pub fn position(&self, id: T::Id) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Column projection in the column's display order.
    pub fn column(&self, status: Status) -> Vec<&T> {
        column_of(&self.items, status, &self.ordering)
    }

    pub fn column_ids(&self, status: Status) -> Vec<T::Id> {
        self.column(status).into_iter().map(|item| item.id()).collect()
    }

    /// All four columns in workflow order.
    pub fn columns(&self) -> Vec<(Status, Vec<&T>)> {
        Status::ALL
            .iter()
            .map(|status| (*status, self.column(*status)))
            .collect()
    }

    /// Appends an item to the end of the flat sequence.
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
    }

    /// Mutates one item in place. Returns `false` when `id` is unknown.
    pub fn edit(&mut self, id: T::Id, apply: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                apply(item);
                true
            }
            None => false,
        }
    }

    /// Removes one item, leaving the others in place.
    pub fn delete(&mut self, id: T::Id) -> Option<T> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }

    /// Moves the item shown at `source_index` of `source_status` so that it
    /// is shown at `dest_index` of `dest_status`.
    ///
    /// The item is inserted in front of the item currently occupying the
    /// destination slot, or appended when the slot is at or past the end of
    /// the destination column.
    pub fn move_item(
        &mut self,
        source_status: Status,
        source_index: usize,
        dest_status: Status,
        dest_index: usize,
    ) -> MoveOutcome<T::Id> {
        if source_status == dest_status && source_index == dest_index {
            return MoveOutcome::Unchanged;
        }

        let Some(moving_id) = self.column_ids(source_status).get(source_index).copied() else {
            return MoveOutcome::MissingSource;
        };
        let Some(from) = self.position(moving_id) else {
            return MoveOutcome::MissingSource;
        };

        let mut moving = self.items.remove(from);
        moving.set_status(dest_status);

        let insert_at = self
            .column_ids(dest_status)
            .get(dest_index)
            .and_then(|anchor| self.position(*anchor))
            .unwrap_or(self.items.len());
        self.items.insert(insert_at, moving);

        MoveOutcome::Moved(moving_id)
    }
}

#[cfg(test)]
mod tests {
    use super::{InsertionOrder, MoveOutcome, OrderedBoard};
    use crate::model::project::Subtask;
    use crate::model::status::Status;

    fn ids(board: &OrderedBoard<Subtask, InsertionOrder>) -> Vec<i64> {
        board.items().iter().map(|item| item.id).collect()
    }

    #[test]
    fn same_slot_is_unchanged() {
        let mut board = OrderedBoard::new(vec![Subtask::new(1, "a")], InsertionOrder);
        assert_eq!(
            board.move_item(Status::Todo, 0, Status::Todo, 0),
            MoveOutcome::Unchanged
        );
        assert_eq!(ids(&board), vec![1]);
    }

    #[test]
    fn reorder_within_column_uses_anchor_after_removal() {
        let mut board = OrderedBoard::new(
            vec![Subtask::new(1, "a"), Subtask::new(2, "b"), Subtask::new(3, "c")],
            InsertionOrder,
        );
        assert_eq!(
            board.move_item(Status::Todo, 0, Status::Todo, 2),
            MoveOutcome::Moved(1)
        );
        assert_eq!(ids(&board), vec![2, 3, 1]);

        assert_eq!(
            board.move_item(Status::Todo, 2, Status::Todo, 0),
            MoveOutcome::Moved(1)
        );
        assert_eq!(ids(&board), vec![1, 2, 3]);
    }
}
