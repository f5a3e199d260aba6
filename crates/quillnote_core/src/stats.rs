//! Deterministic chapter metadata derived from an extraction payload.

use crate::model::payload::SyncPayload;
use serde::{Deserialize, Serialize};

const WORDS_PER_MINUTE: usize = 200;

/// Basic chapter statistics attached to ingestion results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterStats {
    /// `chapter_<title_snake>_<text char count>`.
    pub chapter_id: String,
    pub word_count: usize,
    pub character_count: usize,
    pub location_count: usize,
    /// Estimated at 200 words per minute, never below one minute.
    pub reading_time_minutes: usize,
}

/// Computes [`ChapterStats`] for `payload`.
pub fn chapter_stats(payload: &SyncPayload) -> ChapterStats {
    let word_count = payload.text.split_whitespace().count();
    ChapterStats {
        chapter_id: chapter_id(&payload.title, &payload.text),
        word_count,
        character_count: payload.characters.len(),
        location_count: payload.locations.len(),
        reading_time_minutes: (word_count / WORDS_PER_MINUTE).max(1),
    }
}

/// Stable chapter identifier from title and text length.
pub fn chapter_id(title: &str, text: &str) -> String {
    format!(
        "chapter_{}_{}",
        title.to_lowercase().replace(' ', "_"),
        text.chars().count()
    )
}

#[cfg(test)]
mod tests {
    use super::{chapter_id, chapter_stats};
    use crate::model::payload::SyncPayload;

    #[test]
    fn id_uses_snake_title_and_char_length() {
        assert_eq!(chapter_id("The Lighthouse", "héllo"), "chapter_the_lighthouse_5");
    }

    #[test]
    fn reading_time_has_one_minute_floor() {
        let payload = SyncPayload::new("Ch1", "").with_text("a few words only");
        let stats = chapter_stats(&payload);
        assert_eq!(stats.word_count, 4);
        assert_eq!(stats.reading_time_minutes, 1);
    }

    #[test]
    fn reading_time_scales_with_words() {
        let text = "word ".repeat(650);
        let payload = SyncPayload::new("Ch1", "")
            .with_text(text)
            .with_characters(["Kane", "Esau"]);
        let stats = chapter_stats(&payload);
        assert_eq!(stats.reading_time_minutes, 3);
        assert_eq!(stats.character_count, 2);
    }
}
