//! Ordered boards and their read-side projections.
//!
//! # Responsibility
//! - Keep one flat ordered sequence per collection.
//! - Derive column views and progress from that sequence on every read.
//!
//! # Invariants
//! - Column lists are never stored as independent state.

pub mod ordered;
pub mod progress;
pub mod sort;
