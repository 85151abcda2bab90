//! Public SDK surface for Keepsake.
//!
//! This crate re-exports the journal building blocks and provides a small
//! initialization helper to keep consumer setup consistent.

/// Re-export for convenience.
pub use keepsake_rs_journal as journal;

/// Re-export of the most commonly used journal types.
pub use keepsake_rs_journal::{
    Emotion, FileJournalStorage, JournalError, JournalStore, MemoryDraft, MemoryFilter,
    MemoryRecord, default_journal_dir,
};

#[inline]
/// Initialize logging using env_logger if the "logging" feature is enabled.
///
/// This is a no-op if the feature is not enabled. Binaries are still expected
/// to call this early in startup to ensure log output is wired up.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::try_init();
    }
}
