//! Memory record model and the shared emotion vocabulary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Persisted memory record. Immutable after creation; records are only ever
/// created and deleted, never edited in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemoryRecord {
    /// Record identifier, generated at creation and never reused.
    pub id: Uuid,
    /// Short title, non-empty after trimming.
    pub title: String,
    /// Free-form description, non-empty after trimming.
    pub description: String,
    /// Raw emotion label. Any label is stored; unknown labels fold to
    /// [`Emotion::Unset`] at the reading boundary.
    pub emotion: String,
    /// Display labels in entry order. Trimmed, empties dropped, duplicates
    /// left to the caller.
    pub tags: Vec<String>,
    /// Calendar date the memory occurred on. There is no creation timestamp.
    pub date: NaiveDate,
}

/// Input to [`crate::JournalStore::add`]: a record before validation,
/// normalization, and id assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryDraft {
    /// Title text, validated non-empty after trimming.
    pub title: String,
    /// Description text, validated non-empty after trimming.
    pub description: String,
    /// Emotion label; never validated against the vocabulary.
    pub emotion: String,
    /// Candidate tags; normalized during `add`.
    pub tags: Vec<String>,
    /// Calendar date for the memory.
    pub date: NaiveDate,
}

impl MemoryDraft {
    /// Split a comma-separated tag string into candidate tags, trimming each
    /// entry and dropping empties. Convenience for form-style input.
    pub fn split_tags(input: &str) -> Vec<String> {
        input
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Trim tags and drop entries that are empty after trimming, preserving
/// entry order.
pub(crate) fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Fixed emotion vocabulary shared with the presentation layer.
///
/// The store accepts any label for persistence; this enum is how readers map
/// labels back to the known set, with [`Emotion::Unset`] standing in for
/// missing or unrecognized values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emotion {
    /// "happy"
    Happy,
    /// "sad"
    Sad,
    /// "surprised"
    Surprised,
    /// "angry"
    Angry,
    /// "nostalgic"
    Nostalgic,
    /// Default when no emotion or an unrecognized label is present.
    #[default]
    Unset,
}

impl Emotion {
    /// Canonical labels for the known vocabulary, excluding [`Emotion::Unset`].
    pub const KNOWN_LABELS: [&'static str; 5] =
        ["happy", "sad", "surprised", "angry", "nostalgic"];

    /// Map a raw label to the vocabulary. Unknown or empty labels become
    /// [`Emotion::Unset`].
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "happy" => Self::Happy,
            "sad" => Self::Sad,
            "surprised" => Self::Surprised,
            "angry" => Self::Angry,
            "nostalgic" => Self::Nostalgic,
            _ => Self::Unset,
        }
    }

    /// Canonical lowercase label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Surprised => "surprised",
            Self::Angry => "angry",
            Self::Nostalgic => "nostalgic",
            Self::Unset => "unset",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
