//! The authoritative in-memory journal store.

use crate::error::JournalError;
use crate::model::{Emotion, MemoryDraft, MemoryRecord, normalize_tags};
use crate::query::MemoryFilter;
use crate::storage::JournalStorage;
use log::{debug, info};
use uuid::Uuid;

/// In-memory collection of memory records with write-through persistence.
///
/// The store is the single writer: mutations take `&mut self`, update the
/// in-memory collection first, then overwrite the persisted blob. Queries
/// always observe the in-memory state, whether or not the last durable write
/// succeeded.
pub struct JournalStore {
    storage: Box<dyn JournalStorage>,
    records: Vec<MemoryRecord>,
}

impl JournalStore {
    /// Open the store by loading the persisted collection from `storage`.
    ///
    /// Opening again later adopts whatever is currently persisted; there is
    /// no merging across store lifetimes.
    pub fn open(storage: Box<dyn JournalStorage>) -> Result<Self, JournalError> {
        let records = storage.load()?;
        info!("journal store ready (records={})", records.len());
        Ok(Self { storage, records })
    }

    /// Validate and append a new memory, then write the collection through
    /// to storage.
    ///
    /// Title and description must be non-empty after trimming; otherwise
    /// [`JournalError::MissingField`] is returned and nothing changes — no id
    /// is generated and nothing is written. Tags are trimmed and empty
    /// entries dropped.
    ///
    /// If the durable write fails, the storage error is returned but the
    /// record remains in the in-memory collection and is visible to
    /// subsequent queries. Callers should warn that the change may not
    /// survive a restart.
    pub fn add(&mut self, draft: MemoryDraft) -> Result<MemoryRecord, JournalError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(JournalError::MissingField("title"));
        }
        let description = draft.description.trim();
        if description.is_empty() {
            return Err(JournalError::MissingField("description"));
        }

        let record = MemoryRecord {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: description.to_string(),
            emotion: draft.emotion,
            tags: normalize_tags(draft.tags),
            date: draft.date,
        };
        self.records.push(record.clone());
        debug!("memory added (id={}, date={})", record.id, record.date);
        self.storage.save(&self.records)?;
        Ok(record)
    }

    /// Remove the record with the given id, writing the collection through
    /// on success.
    ///
    /// An unknown id is not an error: nothing changes and `Ok(false)` is
    /// returned. As with [`JournalStore::add`], a failed durable write leaves
    /// the in-memory removal in place.
    pub fn remove(&mut self, id: Uuid) -> Result<bool, JournalError> {
        let Some(index) = self.records.iter().position(|record| record.id == id) else {
            debug!("remove of unknown memory ignored (id={id})");
            return Ok(false);
        };
        self.records.remove(index);
        debug!("memory removed (id={id})");
        self.storage.save(&self.records)?;
        Ok(true)
    }

    /// Return the records matching `filter`, newest calendar date first.
    ///
    /// Records sharing a date keep their relative insertion order (stable
    /// sort), so repeated calls with the same filter yield identical output.
    /// The result is an owned snapshot; mutating it does not touch the
    /// store. Queries never write to storage.
    pub fn query(&self, filter: &MemoryFilter) -> Vec<MemoryRecord> {
        let mut matches: Vec<MemoryRecord> = self
            .records
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.date.cmp(&a.date));
        matches
    }

    /// Emotion of the most recently appended record, folded through the
    /// vocabulary, or [`Emotion::Unset`] for an empty journal.
    ///
    /// This follows insertion order, not query order, and drives the
    /// caller's "current mood" display.
    pub fn current_emotion(&self) -> Emotion {
        self.records
            .last()
            .map(|record| Emotion::from_label(&record.emotion))
            .unwrap_or_default()
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[MemoryRecord] {
        &self.records
    }

    /// Number of records in the journal.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the journal holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
