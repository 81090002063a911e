use std::cell::Cell;
use std::rc::Rc;

use chrono::NaiveDate;
use taskboard_core::{
    BoardStore, KeyValueStore, MemoryKeyValueStore, MoveOutcome, NewTask, Priority, RepoError,
    RepoResult, ServiceError, Status, TaskPatch, TaskService,
};

#[derive(Clone, Default)]
struct FlakyStore {
    inner: MemoryKeyValueStore,
    fail_writes: Rc<Cell<bool>>,
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> RepoResult<Option<String>> {
        self.inner.get(key)
    }

    fn put(&self, key: &str, value: &str) -> RepoResult<()> {
        if self.fail_writes.get() {
            return Err(RepoError::InvalidData("disk full".to_string()));
        }
        self.inner.put(key, value)
    }
}

fn open(store: &FlakyStore) -> TaskService<FlakyStore> {
    TaskService::open(BoardStore::new(store.clone()))
}

fn stored_tasks(store: &FlakyStore) -> Option<String> {
    store.inner.raw("organizeMeTasks")
}

#[test]
fn create_writes_through_and_reloads() {
    let store = FlakyStore::default();
    let mut service = open(&store);

    let due = NaiveDate::from_ymd_opt(2025, 2, 14).unwrap();
    let first = service
        .create_task(NewTask::new("  buy flowers ").priority(Priority::High).due(due))
        .unwrap();
    let second = service.create_task(NewTask::new("book table")).unwrap();
    assert!(second > first);

    let reloaded = open(&store);
    assert_eq!(reloaded.tasks(), service.tasks());
    let task = reloaded.task(first).unwrap();
    assert_eq!(task.text, "buy flowers");
    assert_eq!(task.effective_status(), Status::Todo);
    assert_eq!(task.due(), Some(due));
    assert_eq!(task.effective_priority(), Priority::High);
}

#[test]
fn blank_text_is_rejected_without_writing() {
    let store = FlakyStore::default();
    let mut service = open(&store);

    assert!(matches!(
        service.create_task(NewTask::new("   ")),
        Err(ServiceError::EmptyText)
    ));
    assert!(stored_tasks(&store).is_none());

    let id = service.create_task(NewTask::new("real")).unwrap();
    let patch = TaskPatch {
        text: Some(" ".to_string()),
        ..TaskPatch::default()
    };
    assert!(matches!(
        service.edit_task(id, patch),
        Err(ServiceError::EmptyText)
    ));
    assert_eq!(service.task(id).unwrap().text, "real");
}

#[test]
fn edit_changes_fields_but_not_position() {
    let store = FlakyStore::default();
    let mut service = open(&store);
    let a = service.create_task(NewTask::new("a")).unwrap();
    let b = service.create_task(NewTask::new("b")).unwrap();
    let c = service.create_task(NewTask::new("c")).unwrap();

    service
        .edit_task(
            b,
            TaskPatch {
                status: Some(Status::Review),
                priority: Some(Priority::Low),
                ..TaskPatch::default()
            },
        )
        .unwrap();

    let ids: Vec<i64> = service.tasks().iter().map(|task| task.id).collect();
    assert_eq!(ids, vec![a, b, c]);
    assert_eq!(service.column(Status::Review)[0].id, b);
    assert!(matches!(
        service.edit_task(-1, TaskPatch::default()),
        Err(ServiceError::TaskNotFound(-1))
    ));
}

#[test]
fn move_persists_and_reports_outcome() {
    let store = FlakyStore::default();
    let mut service = open(&store);
    let a = service.create_task(NewTask::new("a")).unwrap();
    let b = service.create_task(NewTask::new("b")).unwrap();

    let outcome = service
        .move_task(Status::Todo, 0, Status::InProgress, 0)
        .unwrap();
    assert_eq!(outcome, MoveOutcome::Moved(a));

    let reloaded = open(&store);
    let in_progress: Vec<i64> = reloaded
        .column(Status::InProgress)
        .iter()
        .map(|task| task.id)
        .collect();
    assert_eq!(in_progress, vec![a]);
    assert_eq!(reloaded.column(Status::Todo)[0].id, b);
}

#[test]
fn same_slot_move_leaves_payload_byte_identical() {
    let store = FlakyStore::default();
    let mut service = open(&store);
    service.create_task(NewTask::new("a")).unwrap();
    service
        .create_task(NewTask::new("b").status(Status::Review))
        .unwrap();
    let before = stored_tasks(&store).unwrap();

    // Any write attempt would now fail, so `Ok` proves nothing was written.
    store.fail_writes.set(true);
    for status in Status::ALL {
        let outcome = service.move_task(status, 0, status, 0).unwrap();
        assert_eq!(outcome, MoveOutcome::Unchanged);
    }
    assert_eq!(
        service.move_task(Status::Done, 0, Status::Todo, 0).unwrap(),
        MoveOutcome::MissingSource
    );

    assert_eq!(stored_tasks(&store).unwrap(), before);
}

#[test]
fn failed_save_rolls_back_every_mutation() {
    let store = FlakyStore::default();
    let mut service = open(&store);
    let id = service.create_task(NewTask::new("keep me")).unwrap();
    let snapshot = service.tasks().to_vec();

    store.fail_writes.set(true);
    assert!(matches!(
        service.create_task(NewTask::new("lost")),
        Err(ServiceError::Repo(_))
    ));
    assert!(service.delete_task(id).is_err());
    assert!(service
        .move_task(Status::Todo, 0, Status::Done, 0)
        .is_err());
    assert!(service
        .edit_task(
            id,
            TaskPatch {
                text: Some("changed".to_string()),
                ..TaskPatch::default()
            }
        )
        .is_err());

    assert_eq!(service.tasks(), snapshot.as_slice());
}

#[test]
fn delete_and_progress() {
    let store = FlakyStore::default();
    let mut service = open(&store);
    let a = service.create_task(NewTask::new("a")).unwrap();
    service
        .create_task(NewTask::new("b").status(Status::Done))
        .unwrap();
    assert_eq!(service.progress().to_string(), "1 of 2 tasks complete");

    assert_eq!(service.delete_task(a).unwrap().text, "a");
    assert!(matches!(
        service.delete_task(a),
        Err(ServiceError::TaskNotFound(_))
    ));
    assert!(open(&store).progress().is_complete());
}
