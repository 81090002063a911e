//! Whole-collection persistence of tasks and projects.
//!
//! # Responsibility
//! - Encode each collection as one JSON array under its storage key.
//! - Load collections once, degrading to empty on any failure.
//!
//! # Invariants
//! - Loads never return an error; absent, unreadable or malformed values
//!   yield an empty collection and a `warn` event.
//! - Items decode one at a time; an undecodable item is skipped without
//!   discarding its siblings.
//! - Saves overwrite the whole collection.
//! - Encoding preserves ids, stored statuses and flat order.

use crate::config::StorageKeys;
use crate::model::project::Project;
use crate::model::task::Task;
use crate::repo::kv_store::{KeyValueStore, RepoResult};
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Typed facade over a key-value store for the two collections.
#[derive(Debug, Clone)]
pub struct BoardStore<S> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> BoardStore<S> {
    /// Uses the default storage keys.
    pub fn new(store: S) -> Self {
        Self::with_keys(store, StorageKeys::default())
    }

    pub fn with_keys(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    pub fn load_tasks(&self) -> Vec<Task> {
        load_collection(&self.store, &self.keys.tasks, "tasks")
    }

    pub fn load_projects(&self) -> Vec<Project> {
        load_collection(&self.store, &self.keys.projects, "projects")
    }

    pub fn save_tasks(&self, tasks: &[Task]) -> RepoResult<()> {
        save_collection(&self.store, &self.keys.tasks, "tasks", tasks)
    }

    pub fn save_projects(&self, projects: &[Project]) -> RepoResult<()> {
        save_collection(&self.store, &self.keys.projects, "projects", projects)
    }
}

fn load_collection<T: DeserializeOwned>(
    store: &impl KeyValueStore,
    key: &str,
    collection: &str,
) -> Vec<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("event=board_load module=repo status=skip collection={collection} reason=absent");
            return Vec::new();
        }
        Err(err) => {
            warn!(
                "event=board_load module=repo status=error collection={collection} error_code=store_read_failed error={err}"
            );
            return Vec::new();
        }
    };

    let values = match serde_json::from_str::<Vec<Value>>(&raw) {
        Ok(values) => values,
        Err(err) => {
            // Payload text may contain user content; log only position info.
            warn!(
                "event=board_load module=repo status=error collection={collection} error_code=malformed_payload line={} column={}",
                err.line(),
                err.column()
            );
            return Vec::new();
        }
    };

    let total = values.len();
    let items: Vec<T> = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(item) => Some(item),
            Err(_) => {
                warn!(
                    "event=board_load module=repo status=skip collection={collection} error_code=malformed_item index={index}"
                );
                None
            }
        })
        .collect();
    info!(
        "event=board_load module=repo status=ok collection={collection} count={} skipped={}",
        items.len(),
        total - items.len()
    );
    items
}

fn save_collection<T: Serialize>(
    store: &impl KeyValueStore,
    key: &str,
    collection: &str,
    items: &[T],
) -> RepoResult<()> {
    let encoded = serde_json::to_string(items)?;
    match store.put(key, &encoded) {
        Ok(()) => {
            debug!(
                "event=board_save module=repo status=ok collection={collection} count={} bytes={}",
                items.len(),
                encoded.len()
            );
            Ok(())
        }
        Err(err) => {
            warn!(
                "event=board_save module=repo status=error collection={collection} error={err}"
            );
            Err(err)
        }
    }
}
