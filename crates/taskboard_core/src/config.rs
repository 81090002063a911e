//! Runtime configuration for core callers.
//!
//! # Responsibility
//! - Resolve database and logging locations from the environment.
//! - Name the fixed storage keys of the two persisted collections.
//!
//! # Invariants
//! - Blank environment values are treated as unset.
//! - Storage keys are stable across releases; renaming one orphans data.

use crate::logging::default_log_level;
use std::path::PathBuf;

/// Environment variable overriding the database file path.
pub const ENV_DB_PATH: &str = "TASKBOARD_DB_PATH";
/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "TASKBOARD_LOG_LEVEL";
/// Environment variable enabling file logging under a directory.
pub const ENV_LOG_DIR: &str = "TASKBOARD_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "taskboard.sqlite3";

/// Storage key of the standalone task collection.
pub const TASKS_KEY: &str = "organizeMeTasks";
/// Storage key of the project collection.
pub const PROJECTS_KEY: &str = "organizeMeProjects";

/// Keys under which the two collections are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub tasks: String,
    pub projects: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            tasks: TASKS_KEY.to_string(),
            projects: PROJECTS_KEY.to_string(),
        }
    }
}

/// Resolved core settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    /// File logging stays off when `None`.
    pub log_dir: Option<PathBuf>,
    pub storage_keys: StorageKeys,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: None,
            storage_keys: StorageKeys::default(),
        }
    }
}

impl CoreConfig {
    /// Reads overrides from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads overrides through `lookup`, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(path) = non_blank(ENV_DB_PATH) {
            config.db_path = PathBuf::from(path);
        }
        if let Some(level) = non_blank(ENV_LOG_LEVEL) {
            config.log_level = level;
        }
        config.log_dir = non_blank(ENV_LOG_DIR).map(PathBuf::from);
        config
    }
}
