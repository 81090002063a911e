use chrono::NaiveDate;
use serde_json::json;
use taskboard_core::model::defaults::{PROJECT_FALLBACK_COLOR, SOLO_COLOR};
use taskboard_core::{
    build_schedule, EntrySource, Priority, Project, Status, StatusValue, Subtask, Task,
};

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).unwrap()
}

#[test]
fn done_items_never_produce_entries() {
    let tasks = vec![
        Task::new(1, "finished")
            .with_status(Status::Done)
            .with_due_date(Some(date(5, 1))),
        Task::new(2, "open").with_due_date(Some(date(5, 1))),
    ];
    let mut project = Project::new(10, "Trip");
    project.tasks.push(
        Subtask::new(11, "booked")
            .with_status(Status::Done)
            .with_due_date(Some(date(5, 2))),
    );

    let schedule = build_schedule(&tasks, &[project]);

    assert_eq!(schedule.entry_count(), 1);
    assert_eq!(schedule.entries_on(date(5, 1))[0].text, "open");
    assert!(schedule.entries_on(date(5, 2)).is_empty());
}

#[test]
fn undated_items_are_skipped() {
    let tasks = vec![Task::new(1, "someday")];
    let mut project = Project::new(2, "Ideas");
    project.tasks.push(Subtask::new(3, "brainstorm"));

    assert!(build_schedule(&tasks, &[project]).is_empty());
}

#[test]
fn entries_follow_construction_order_without_merging() {
    let day = date(7, 4);
    let tasks = vec![
        Task::new(1, "solo a").with_due_date(Some(day)),
        Task::new(2, "solo b")
            .with_priority(Priority::High)
            .with_due_date(Some(day)),
    ];
    let mut first = Project::new(10, "First").with_color("#5C9DFF");
    first
        .tasks
        .push(Subtask::new(11, "solo a").with_due_date(Some(day)));
    let mut second = Project::new(20, "Second");
    second
        .tasks
        .push(Subtask::new(21, "second step").with_due_date(Some(day)));

    let schedule = build_schedule(&tasks, &[first, second]);
    let entries = schedule.entries_on(day);

    let texts: Vec<&str> = entries.iter().map(|entry| entry.text.as_str()).collect();
    assert_eq!(texts, vec!["solo a", "solo b", "solo a", "second step"]);
    assert_eq!(
        entries[1].source,
        EntrySource::Solo {
            priority: Priority::High
        }
    );
    assert_eq!(entries[0].color, SOLO_COLOR);
    assert_eq!(entries[2].color, "#5C9DFF");
    assert_eq!(entries[3].color, PROJECT_FALLBACK_COLOR);
}

#[test]
fn unknown_status_counts_as_open_work() {
    let mut task = Task::new(1, "legacy").with_due_date(Some(date(1, 9)));
    task.status = StatusValue::Other("archived".to_string());

    let schedule = build_schedule(&[task], &[]);
    assert_eq!(schedule.entry_count(), 1);
}

#[test]
fn month_counts_cover_one_calendar_page() {
    let tasks = vec![
        Task::new(1, "a").with_due_date(Some(date(3, 3))),
        Task::new(2, "b").with_due_date(Some(date(3, 3))),
        Task::new(3, "c").with_due_date(Some(date(3, 28))),
        Task::new(4, "d").with_due_date(Some(date(4, 1))),
    ];
    let counts = build_schedule(&tasks, &[]).month_counts(2025, 3);

    assert_eq!(counts.into_iter().collect::<Vec<_>>(), vec![(3, 2), (28, 1)]);
}

#[test]
fn serialized_form_is_keyed_by_iso_date() {
    let mut project = Project::new(1, "Home").with_color("#FF96CF");
    project
        .tasks
        .push(Subtask::new(2, "paint").with_due_date(Some(date(8, 9))));
    let schedule = build_schedule(&[], &[project]);

    assert_eq!(
        serde_json::to_value(&schedule).unwrap(),
        json!({
            "2025-08-09": [{
                "text": "paint",
                "type": "project",
                "project": "Home",
                "color": "#FF96CF"
            }]
        })
    );
}
