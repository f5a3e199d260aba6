//! Sync orchestrator: merges one extraction payload into a project document.
//!
//! # Responsibility
//! - Resolve the characters/setting/outline sections once per call.
//! - Upsert character and location bullets, the outline bullet, then attach
//!   the chapter summary beneath the outline bullet.
//!
//! # Invariants
//! - Pure and deterministic: same `(document, payload, config)` always yields
//!   the same output.
//! - Idempotent: re-applying the same payload changes nothing.
//! - The input document is parsed once and serialized once.

use crate::config::{Category, SyncConfig};
use crate::model::document::{collapse_whitespace, AnnotateOutcome, MarkdownDocument};
use crate::model::payload::SyncPayload;
use crate::sync::headings::resolve_or_default;
use log::{debug, warn};

/// Separator between bold title and summary in outline bullets.
pub const OUTLINE_SEPARATOR: &str = " – ";
/// Prefix of the nested summary line under an outline bullet.
pub const SUMMARY_PREFIX: &str = "  * _Summary_: ";

/// What happened to the chapter summary during one sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryStatus {
    /// Summary line inserted under the outline bullet.
    Attached,
    /// Outline bullet already carries a nested summary.
    AlreadyPresent,
    /// Outline bullet could not be found; summary dropped.
    Dropped,
    /// Payload had no summary or no outline entry.
    Skipped,
}

impl From<AnnotateOutcome> for SummaryStatus {
    fn from(value: AnnotateOutcome) -> Self {
        match value {
            AnnotateOutcome::Attached => Self::Attached,
            AnnotateOutcome::AlreadyPresent => Self::AlreadyPresent,
            AnnotateOutcome::SectionMissing | AnnotateOutcome::BulletNotFound => Self::Dropped,
        }
    }
}

/// Per-call summary of the merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub characters_heading: String,
    pub setting_heading: String,
    pub outline_heading: String,
    /// Characters newly added, in payload order.
    pub added_characters: Vec<String>,
    /// Locations newly added, in payload order.
    pub added_locations: Vec<String>,
    /// Whether a new outline bullet was written.
    pub outline_added: bool,
    pub summary: SummaryStatus,
}

impl SyncReport {
    /// Whether the merge modified the document.
    pub fn changed(&self) -> bool {
        !self.added_characters.is_empty()
            || !self.added_locations.is_empty()
            || self.outline_added
            || self.summary == SummaryStatus::Attached
    }
}

/// Updated document plus its merge report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    pub document: String,
    pub report: SyncReport,
}

/// Outline bullet text for a chapter: `**<title>** – <summary>`.
pub fn outline_bullet(title: &str, summary: &str) -> String {
    collapse_whitespace(&format!("**{}**{OUTLINE_SEPARATOR}{}", title.trim(), summary))
}

/// Nested summary line: `  * _Summary_: <summary>`.
pub fn summary_bullet(summary: &str) -> String {
    format!("{SUMMARY_PREFIX}{}", collapse_whitespace(summary))
}

/// Merges `payload` into `document` with the default heading rules.
pub fn smart_insert(document: &str, payload: &SyncPayload) -> String {
    smart_insert_with_report(document, payload).document
}

/// Same as [`smart_insert`], also returning a [`SyncReport`].
pub fn smart_insert_with_report(document: &str, payload: &SyncPayload) -> SyncOutcome {
    smart_insert_with_config(document, payload, &SyncConfig::default())
}

/// Merges `payload` into `document` using custom heading rules.
pub fn smart_insert_with_config(
    document: &str,
    payload: &SyncPayload,
    config: &SyncConfig,
) -> SyncOutcome {
    let mut parsed = MarkdownDocument::parse(document);

    let (characters_heading, setting_heading, outline_heading) = {
        let headings = parsed.headings();
        (
            resolve_or_default(&headings, config.rule(Category::Characters)),
            resolve_or_default(&headings, config.rule(Category::Setting)),
            resolve_or_default(&headings, config.rule(Category::Outline)),
        )
    };

    let added_characters = parsed.upsert_bullets(&characters_heading, &payload.characters);
    let added_locations = parsed.upsert_bullets(&setting_heading, &payload.locations);

    let title = collapse_whitespace(&payload.title);
    let summary = collapse_whitespace(&payload.summary);
    let mut outline_added = false;
    let mut summary_status = SummaryStatus::Skipped;

    if !(title.is_empty() && summary.is_empty()) {
        let bullet = outline_bullet(&title, &summary);
        outline_added = !parsed
            .upsert_bullets(&outline_heading, &[bullet.as_str()])
            .is_empty();

        if !summary.is_empty() {
            summary_status = parsed
                .annotate_summary(&outline_heading, &bullet, &summary_bullet(&summary))
                .into();
        }
    }

    if summary_status == SummaryStatus::Dropped {
        warn!(
            "event=summary_dropped module=sync status=warn heading={} reason=outline_bullet_not_found",
            outline_heading
        );
    }

    let report = SyncReport {
        characters_heading,
        setting_heading,
        outline_heading,
        added_characters,
        added_locations,
        outline_added,
        summary: summary_status,
    };
    debug!(
        "event=smart_insert module=sync status=ok characters_added={} locations_added={} outline_added={} summary={:?}",
        report.added_characters.len(),
        report.added_locations.len(),
        report.outline_added,
        report.summary
    );

    let document = if report.changed() {
        parsed.to_markdown()
    } else {
        document.to_string()
    };
    SyncOutcome { document, report }
}

#[cfg(test)]
mod tests {
    use super::{outline_bullet, smart_insert_with_report, summary_bullet, SummaryStatus};
    use crate::model::payload::SyncPayload;

    #[test]
    fn outline_and_summary_text_collapse_whitespace() {
        assert_eq!(outline_bullet(" Ch 1 ", "A\nquest"), "**Ch 1** – A quest");
        assert_eq!(summary_bullet("A  quest"), "  * _Summary_: A quest");
    }

    #[test]
    fn blank_title_and_summary_skip_outline() {
        let outcome = smart_insert_with_report("# T\n", &SyncPayload::default());
        assert_eq!(outcome.document, "# T\n");
        assert_eq!(outcome.report.summary, SummaryStatus::Skipped);
        assert!(!outcome.report.changed());
    }

    #[test]
    fn blank_summary_writes_outline_without_annotation() {
        let outcome = smart_insert_with_report("", &SyncPayload::new("Ch1", ""));
        assert_eq!(outcome.document, "## Full Outline\n* **Ch1** –\n");
        assert_eq!(outcome.report.summary, SummaryStatus::Skipped);
    }
}
