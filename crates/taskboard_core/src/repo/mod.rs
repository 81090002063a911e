//! Persistence boundary for board collections.
//!
//! # Responsibility
//! - Define the key-value read/write contract.
//! - Encode and decode whole collections under fixed keys.
//!
//! # Invariants
//! - Store failures on read degrade to empty collections.
//! - Store failures on write are returned to the caller unchanged.

pub mod board_store;
pub mod kv_store;
