use chrono::{Days, NaiveDate};
use taskboard_core::schedule::due::{countdown_status_for, triage_status_for};
use taskboard_core::{countdown_status, triage_status, CountdownStatus, TriageStatus};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

#[test]
fn countdown_labels_around_today() {
    let today = today();
    let tomorrow = today.checked_add_days(Days::new(1)).unwrap();
    let yesterday = today.checked_sub_days(Days::new(1)).unwrap();

    assert_eq!(countdown_status(today, today).to_string(), "Due today");
    assert_eq!(countdown_status(today, tomorrow).to_string(), "1 day left");
    assert_eq!(countdown_status(today, yesterday).to_string(), "Overdue");
}

#[test]
fn countdown_counts_whole_days_further_out() {
    let today = today();
    let due = today.checked_add_days(Days::new(5)).unwrap();
    assert_eq!(countdown_status(today, due), CountdownStatus::DaysLeft(5));
    assert_eq!(countdown_status(today, due).to_string(), "5 days left");

    let long_overdue = today.checked_sub_days(Days::new(40)).unwrap();
    assert!(countdown_status(today, long_overdue).is_overdue());
}

#[test]
fn triage_labels_around_today() {
    let today = today();
    let tomorrow = today.checked_add_days(Days::new(1)).unwrap();
    let yesterday = today.checked_sub_days(Days::new(1)).unwrap();

    assert_eq!(triage_status(today, tomorrow).to_string(), "Future");
    assert_eq!(triage_status(today, today).to_string(), "Due today");
    assert_eq!(triage_status(today, yesterday).to_string(), "Overdue");
}

#[test]
fn classifiers_differ_only_on_the_day_before() {
    let today = today();
    let tomorrow = today.checked_add_days(Days::new(1)).unwrap();

    assert_eq!(countdown_status(today, tomorrow), CountdownStatus::OneDayLeft);
    assert_eq!(triage_status(today, tomorrow), TriageStatus::Future);
}

#[test]
fn year_boundary_uses_calendar_days() {
    let today = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
    let due = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    assert_eq!(countdown_status(today, due), CountdownStatus::OneDayLeft);
    assert_eq!(triage_status(due, today), TriageStatus::Overdue);
}

#[test]
fn missing_due_date_is_unscheduled() {
    assert_eq!(countdown_status_for(today(), None), None);
    assert_eq!(triage_status_for(today(), None), None);
    assert_eq!(
        triage_status_for(today(), Some(today())),
        Some(TriageStatus::DueToday)
    );
}
