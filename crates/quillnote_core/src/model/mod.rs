//! Domain model for project documents and sync payloads.
//!
//! # Responsibility
//! - Define the parsed document shape used by section sync.
//! - Define the structured fact set produced by chapter extraction.
//!
//! # Invariants
//! - Parsing is lossless; serialization of an unmodified parse returns the
//!   original text byte-for-byte.

pub mod document;
pub mod payload;
