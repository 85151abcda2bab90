//! Cross-session persistence integration tests.

use chrono::NaiveDate;
use keepsake_rs_journal::{
    Emotion, FileJournalStorage, JOURNAL_FILENAME, JournalStore, MemoryDraft, MemoryFilter,
};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn draft(title: &str, emotion: &str, date: NaiveDate) -> MemoryDraft {
    MemoryDraft {
        title: title.to_string(),
        description: format!("{title} description"),
        emotion: emotion.to_string(),
        tags: MemoryDraft::split_tags("journal, test"),
        date,
    }
}

fn open_store(root: &std::path::Path) -> JournalStore {
    let storage = FileJournalStorage::new(root).expect("storage");
    JournalStore::open(Box::new(storage)).expect("store")
}

/// The journal should resume from disk with every field intact and insertion
/// order preserved.
#[test]
fn resumes_journal_across_store_lifetimes() {
    let temp = tempdir().expect("tempdir");
    let date = NaiveDate::from_ymd_opt(2024, 6, 1).expect("date");

    let mut store = open_store(temp.path());
    let first = store.add(draft("Beach trip", "happy", date)).expect("add");
    let second = store
        .add(draft("Rainy afternoon", "nostalgic", date))
        .expect("add");
    let expected = vec![first, second];
    drop(store);

    let store = open_store(temp.path());
    assert_eq!(store.records(), expected.as_slice());
    assert_eq!(store.current_emotion(), Emotion::Nostalgic);
}

/// Deletions must also survive a restart.
#[test]
fn deletions_survive_restart() {
    let temp = tempdir().expect("tempdir");
    let date = NaiveDate::from_ymd_opt(2024, 6, 1).expect("date");

    let mut store = open_store(temp.path());
    let kept = store.add(draft("kept", "happy", date)).expect("add");
    let removed = store.add(draft("removed", "sad", date)).expect("add");
    assert!(store.remove(removed.id).expect("remove"));
    drop(store);

    let store = open_store(temp.path());
    assert_eq!(store.records(), &[kept]);
}

/// A corrupted journal file starts the store empty instead of failing.
#[test]
fn corrupt_journal_file_starts_empty() {
    let temp = tempdir().expect("tempdir");
    std::fs::write(temp.path().join(JOURNAL_FILENAME), "[{\"id\": 12").expect("write");

    let store = open_store(temp.path());
    assert!(store.is_empty());
    assert!(store.query(&MemoryFilter::default()).is_empty());
}
