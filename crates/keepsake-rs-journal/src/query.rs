//! Query filters for browsing the journal.

use crate::model::MemoryRecord;

/// Filter for [`crate::JournalStore::query`]. The default filter matches
/// every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryFilter {
    /// Search text, matched case-insensitively against title and
    /// description. Empty or whitespace-only text matches everything.
    pub text: String,
    /// Exact emotion label to require. `None` matches everything.
    pub emotion: Option<String>,
}

impl MemoryFilter {
    /// Set the search text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Require an exact emotion label.
    pub fn with_emotion(mut self, emotion: impl Into<String>) -> Self {
        self.emotion = Some(emotion.into());
        self
    }

    /// A record is included iff it passes both the text and the emotion
    /// filter.
    pub fn matches(&self, record: &MemoryRecord) -> bool {
        self.matches_text(record) && self.matches_emotion(record)
    }

    fn matches_text(&self, record: &MemoryRecord) -> bool {
        let needle = self.text.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        record.title.to_lowercase().contains(&needle)
            || record.description.to_lowercase().contains(&needle)
    }

    fn matches_emotion(&self, record: &MemoryRecord) -> bool {
        match &self.emotion {
            Some(emotion) if !emotion.is_empty() => record.emotion == *emotion,
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryFilter;
    use crate::model::MemoryRecord;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn record(title: &str, description: &str, emotion: &str) -> MemoryRecord {
        MemoryRecord {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: description.to_string(),
            emotion: emotion.to_string(),
            tags: Vec::new(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("date"),
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = MemoryFilter::default();
        assert!(filter.matches(&record("Beach trip", "Sand everywhere", "happy")));
    }

    #[test]
    fn text_matches_title_or_description_case_insensitively() {
        let beach = record("Beach trip", "Sand everywhere", "happy");
        let meeting = record("Work meeting", "Quarterly review", "sad");

        let filter = MemoryFilter::default().with_text("beach");
        assert!(filter.matches(&beach));
        assert!(!filter.matches(&meeting));

        let filter = MemoryFilter::default().with_text("QUARTERLY");
        assert!(filter.matches(&meeting));
    }

    #[test]
    fn whitespace_text_matches_everything() {
        let filter = MemoryFilter::default().with_text("   ");
        assert!(filter.matches(&record("Beach trip", "Sand", "happy")));
    }

    #[test]
    fn emotion_requires_exact_label() {
        let filter = MemoryFilter::default().with_emotion("happy");
        assert!(filter.matches(&record("Beach trip", "Sand", "happy")));
        assert!(!filter.matches(&record("Beach trip", "Sand", "nostalgic")));
    }

    #[test]
    fn text_and_emotion_combine_with_and() {
        let filter = MemoryFilter::default()
            .with_text("beach")
            .with_emotion("happy");
        assert!(filter.matches(&record("Beach trip", "Sand", "happy")));
        assert!(!filter.matches(&record("Beach trip", "Sand", "sad")));
        assert!(!filter.matches(&record("Work meeting", "Review", "happy")));
        assert!(!filter.matches(&record("Work meeting", "Review", "sad")));
    }
}
