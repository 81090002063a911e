//! Date-keyed schedule projection for calendar display.
//!
//! # Invariants
//! - Standalone tasks are visited first, then projects in stored order and
//!   each project's subtasks in stored order.
//! - Items in the `done` column never produce an entry, dated or not.
//! - Entries are appended as visited; nothing is merged or deduplicated.

use crate::model::defaults;
use crate::model::project::Project;
use crate::model::status::{Priority, Status};
use crate::model::task::Task;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// Origin of one calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EntrySource {
    /// A standalone task.
    Solo { priority: Priority },
    /// A subtask of the named project.
    Project { project: String },
}

/// One item shown on a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    pub text: String,
    #[serde(flatten)]
    pub source: EntrySource,
    pub color: String,
}

/// Calendar projection keyed by due date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScheduleMap {
    days: BTreeMap<NaiveDate, Vec<ScheduleEntry>>,
}

impl ScheduleMap {
    /// Entries due on `date`, in construction order.
    pub fn entries_on(&self, date: NaiveDate) -> &[ScheduleEntry] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Dates that carry at least one entry, ascending.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &Vec<ScheduleEntry>)> {
        self.days.iter()
    }

    /// Entry count per day-of-month for one calendar page.
    pub fn month_counts(&self, year: i32, month: u32) -> BTreeMap<u32, usize> {
        self.days
            .iter()
            .filter(|(date, _)| date.year() == year && date.month() == month)
            .map(|(date, entries)| (date.day(), entries.len()))
            .collect()
    }

    /// Number of days with entries.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total entries across all days.
    pub fn entry_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    fn push(&mut self, date: NaiveDate, entry: ScheduleEntry) {
        self.days.entry(date).or_default().push(entry);
    }
}

/// Builds the schedule from the current collections.
pub fn build_schedule(tasks: &[Task], projects: &[Project]) -> ScheduleMap {
    let mut schedule = ScheduleMap::default();

    for task in tasks {
        let Some(due) = task.due() else {
            continue;
        };
        if task.effective_status() == Status::Done {
            continue;
        }
        schedule.push(
            due,
            ScheduleEntry {
                text: task.text.clone(),
                source: EntrySource::Solo {
                    priority: task.effective_priority(),
                },
                color: defaults::SOLO_COLOR.to_string(),
            },
        );
    }

    for project in projects {
        for subtask in &project.tasks {
            let Some(due) = subtask.due() else {
                continue;
            };
            if subtask.effective_status() == Status::Done {
                continue;
            }
            schedule.push(
                due,
                ScheduleEntry {
                    text: subtask.text.clone(),
                    source: EntrySource::Project {
                        project: project.name.clone(),
                    },
                    color: project.display_color().to_string(),
                },
            );
        }
    }

    schedule
}
