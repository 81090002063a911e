//! Completion summaries for board headers.

use crate::board::ordered::BoardItem;
use crate::model::status::Status;
use std::fmt::{Display, Formatter};

/// Count of completed items over all items of one board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardProgress {
    pub done: usize,
    pub total: usize,
}

impl BoardProgress {
    /// Counts items whose column is `done`.
    pub fn of<'a, T: BoardItem + 'a>(items: impl IntoIterator<Item = &'a T>) -> Self {
        items
            .into_iter()
            .fold(Self::default(), |mut progress, item| {
                progress.total += 1;
                if item.status() == Status::Done {
                    progress.done += 1;
                }
                progress
            })
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.done == self.total
    }
}

impl Display for BoardProgress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {} tasks complete", self.done, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::BoardProgress;
    use crate::model::status::{Status, StatusValue};
    use crate::model::task::Task;

    #[test]
    fn counts_done_column_only() {
        let mut flagged = Task::new(3, "flag only");
        flagged.done = true;
        let mut unknown = Task::new(4, "odd status");
        unknown.status = StatusValue::Other("archived".to_string());
        let tasks = vec![
            Task::new(1, "a").with_status(Status::Done),
            Task::new(2, "b").with_status(Status::Review),
            flagged,
            unknown,
        ];

        let progress = BoardProgress::of(&tasks);
        assert_eq!(progress, BoardProgress { done: 1, total: 4 });
        assert_eq!(progress.to_string(), "1 of 4 tasks complete");
        assert!(!progress.is_complete());
    }
}
