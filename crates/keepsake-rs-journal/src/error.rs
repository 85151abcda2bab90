//! Error types for journal operations.

/// Errors returned by the journal store and storage adapters.
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    /// A required field was empty after trimming.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    /// IO error from the storage backend.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization error for the persisted collection.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl JournalError {
    /// True for input validation failures, false for storage failures.
    ///
    /// Callers use this to distinguish "re-prompt the user" from "the entry
    /// is in the visible list but may not survive a restart".
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingField(_))
    }
}

#[cfg(test)]
mod tests {
    use super::JournalError;

    #[test]
    fn validation_channel_is_distinct_from_storage() {
        assert!(JournalError::MissingField("title").is_validation());
        let io = JournalError::Io(std::io::Error::other("disk full"));
        assert!(!io.is_validation());
    }
}
