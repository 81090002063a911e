//! Priority/due-date column order.
//!
//! # Invariants
//! - Primary key: priority rank ascending (`high`, `medium`, `low`).
//! - Secondary key: due date ascending; dated items precede undated ones.
//! - Items equal on both keys keep their input order (stable sort).

use crate::model::status::Priority;
use crate::model::task::Task;
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Items that can be placed by [`priority_cmp`].
pub trait Prioritized {
    fn priority(&self) -> Priority;
    fn due_date(&self) -> Option<NaiveDate>;
}

impl Prioritized for Task {
    fn priority(&self) -> Priority {
        self.effective_priority()
    }

    fn due_date(&self) -> Option<NaiveDate> {
        self.due()
    }
}

/// Total order used to present a task column.
pub fn priority_cmp<T: Prioritized + ?Sized>(a: &T, b: &T) -> Ordering {
    a.priority()
        .rank()
        .cmp(&b.priority().rank())
        .then_with(|| match (a.due_date(), b.due_date()) {
            (Some(left), Some(right)) => left.cmp(&right),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}

/// Sorts references in place. Stable.
pub fn sort_by_priority<T: Prioritized + ?Sized>(items: &mut [&T]) {
    items.sort_by(|left, right| priority_cmp(*left, *right));
}

/// Returns the items in priority order without touching the input.
pub fn sorted_by_priority<T: Prioritized>(items: &[T]) -> Vec<&T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    sort_by_priority(&mut sorted);
    sorted
}

#[cfg(test)]
mod tests {
    use super::priority_cmp;
    use crate::model::status::Priority;
    use crate::model::task::Task;
    use chrono::NaiveDate;
    use std::cmp::Ordering;

    fn date(day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2025, 6, day)
    }

    #[test]
    fn priority_dominates_due_date() {
        let urgent = Task::new(1, "a")
            .with_priority(Priority::High)
            .with_due_date(date(30));
        let relaxed = Task::new(2, "b")
            .with_priority(Priority::Low)
            .with_due_date(date(1));
        assert_eq!(priority_cmp(&urgent, &relaxed), Ordering::Less);
    }

    #[test]
    fn undated_pair_is_equal() {
        let left = Task::new(1, "a");
        let right = Task::new(2, "b");
        assert_eq!(priority_cmp(&left, &right), Ordering::Equal);
    }
}
