//! Due-date urgency classifiers.
//!
//! Two independent functions over `(today, due)` on calendar-day granularity.
//! Each has its own call sites, so they are kept separate:
//! - countdown labels cards (`N days left`, `1 day left`, `Due today`,
//!   `Overdue`);
//! - triage decides what is actionable today (`Future`, `Due today`,
//!   `Overdue`).
//!
//! Dates are plain calendar days, so daylight-saving shifts cannot skew the
//! difference.

use chrono::{Local, NaiveDate};
use std::fmt::{Display, Formatter};

/// Today's calendar date in the local time zone.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

fn day_difference(today: NaiveDate, due: NaiveDate) -> i64 {
    due.signed_duration_since(today).num_days()
}

/// Card label for a due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStatus {
    /// More than one day left; carries the day count.
    DaysLeft(i64),
    OneDayLeft,
    DueToday,
    Overdue,
}

impl CountdownStatus {
    pub fn is_overdue(&self) -> bool {
        matches!(self, Self::Overdue)
    }
}

impl Display for CountdownStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DaysLeft(days) => write!(f, "{days} days left"),
            Self::OneDayLeft => f.write_str("1 day left"),
            Self::DueToday => f.write_str("Due today"),
            Self::Overdue => f.write_str("Overdue"),
        }
    }
}

/// Countdown classifier for card labels.
///
/// The due day itself reads `Due today`, the day before reads `1 day left`
/// and anything further out counts whole calendar days.
pub fn countdown_status(today: NaiveDate, due: NaiveDate) -> CountdownStatus {
    let diff_days = day_difference(today, due);
    match diff_days {
        days if days > 1 => CountdownStatus::DaysLeft(days),
        1 => CountdownStatus::OneDayLeft,
        0 => CountdownStatus::DueToday,
        _ => CountdownStatus::Overdue,
    }
}

/// Countdown classifier over an optional due date; `None` means unscheduled.
pub fn countdown_status_for(today: NaiveDate, due: Option<NaiveDate>) -> Option<CountdownStatus> {
    due.map(|due| countdown_status(today, due))
}

/// Actionability of a due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriageStatus {
    Future,
    DueToday,
    Overdue,
}

impl TriageStatus {
    pub fn is_overdue(&self) -> bool {
        matches!(self, Self::Overdue)
    }
}

impl Display for TriageStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Future => f.write_str("Future"),
            Self::DueToday => f.write_str("Due today"),
            Self::Overdue => f.write_str("Overdue"),
        }
    }
}

/// Triage classifier: only the due day itself is `Due today`.
pub fn triage_status(today: NaiveDate, due: NaiveDate) -> TriageStatus {
    let diff_days = day_difference(today, due);
    if diff_days > 0 {
        TriageStatus::Future
    } else if diff_days == 0 {
        TriageStatus::DueToday
    } else {
        TriageStatus::Overdue
    }
}

/// Triage classifier over an optional due date; `None` means unscheduled.
pub fn triage_status_for(today: NaiveDate, due: Option<NaiveDate>) -> Option<TriageStatus> {
    due.map(|due| triage_status(today, due))
}
