//! Structured-section synchronization.
//!
//! # Responsibility
//! - Resolve which level-2 sections receive characters, locations and
//!   outline entries.
//! - Merge a [`SyncPayload`](crate::model::payload::SyncPayload) into a
//!   document without disturbing unrelated content.
//!
//! # Invariants
//! - `smart_insert(smart_insert(d, p), p) == smart_insert(d, p)`.
//! - Every input line survives, in order, in the output.
//! - All operations are total; silent no-ops are surfaced through
//!   [`SyncReport`](smart_insert::SyncReport) instead of errors.

pub mod bullets;
pub mod headings;
pub mod section;
pub mod smart_insert;
