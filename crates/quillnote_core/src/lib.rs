//! Core document logic for QuillNote.
//! This crate is the single source of truth for normalization and section
//! sync invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod stats;
pub mod sync;
pub mod text;

pub use config::{load_sync_config, Category, ConfigError, HeadingRule, SyncConfig};
pub use logging::{
    default_log_level, init_logging, logging_status, parse_log_level, LoggingError,
};
pub use model::document::{AnnotateOutcome, Block, MarkdownDocument, Section};
pub use model::payload::SyncPayload;
pub use stats::{chapter_stats, ChapterStats};
pub use sync::bullets::{annotate_summary, upsert_bullets};
pub use sync::headings::{resolve_heading, resolve_or_default};
pub use sync::section::{locate_section, LocatedSection};
pub use sync::smart_insert::{
    smart_insert, smart_insert_with_config, smart_insert_with_report, SummaryStatus, SyncOutcome,
    SyncReport,
};
pub use text::escape::escape_pattern;
pub use text::html::clean_html_artifacts;
pub use text::normalize::{normalize, normalize_markdown};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Level-2 heading texts of `document`, in document order.
pub fn level_two_headings(document: &str) -> Vec<String> {
    MarkdownDocument::parse(document)
        .headings()
        .into_iter()
        .map(str::to_string)
        .collect()
}
