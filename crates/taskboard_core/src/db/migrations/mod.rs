//! Schema steps for the board database.
//!
//! Step `n` (1-based) upgrades a database from `user_version = n - 1` to `n`.
//! Pending steps run inside one transaction together with the version bump.

use crate::db::{DbError, DbResult};
use log::{debug, info};
use rusqlite::Connection;
use std::cmp::Ordering;

const STEPS: &[&str] = &[include_str!("0001_kv_entries.sql")];

/// Schema version produced by this build.
pub fn latest_version() -> u32 {
    STEPS.len() as u32
}

/// Current `PRAGMA user_version` of `conn`.
pub fn schema_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    Ok(version)
}

/// Brings `conn` up to [`latest_version`].
///
/// # Errors
/// - [`DbError::UnsupportedSchemaVersion`] when the file is newer than this
///   build; nothing is changed in that case.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let from = schema_version(conn)?;
    let to = latest_version();

    match from.cmp(&to) {
        Ordering::Greater => Err(DbError::UnsupportedSchemaVersion {
            db_version: from,
            latest_supported: to,
        }),
        Ordering::Equal => {
            debug!("event=db_migrate module=db status=skip version={to}");
            Ok(())
        }
        Ordering::Less => {
            let tx = conn.transaction()?;
            for sql in STEPS.iter().skip(from as usize) {
                tx.execute_batch(sql)?;
            }
            tx.pragma_update(None, "user_version", to)?;
            tx.commit()?;
            info!("event=db_migrate module=db status=ok from_version={from} to_version={to}");
            Ok(())
        }
    }
}
