//! Memory journal store and query engine for Keepsake.
//!
//! This crate owns the journal data model, the durable storage adapter, and
//! the in-memory store that answers filter/search/sort queries. Presentation
//! concerns (forms, glyph rendering) live with the consumer.

pub mod error;
pub mod model;
pub mod query;
pub mod storage;
pub mod store;

/// Journal error type.
pub use error::JournalError;
/// Memory record model, drafts, and the emotion vocabulary.
pub use model::{Emotion, MemoryDraft, MemoryRecord};
/// Query filter for text search and emotion filtering.
pub use query::MemoryFilter;
/// Storage adapter interface and default file implementation.
pub use storage::{FileJournalStorage, JOURNAL_FILENAME, JournalStorage, default_journal_dir};
/// The authoritative in-memory store.
pub use store::JournalStore;
