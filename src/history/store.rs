//! Bounded, persisted calculation history.

use tracing::{debug, warn};

use super::entry::HistoryEntry;
use super::storage::KeyValueStore;
use crate::calculator::CalcError;

/// Key the log is stored under.
pub const HISTORY_KEY: &str = "calculatorHistory";

/// Default number of entries kept.
pub const DEFAULT_CAPACITY: usize = 50;

/// Ordered log of past calculations, newest first.
///
/// The whole log is written back to storage on every change. Storage
/// failures are logged and otherwise ignored; the in-memory log stays
/// authoritative for the session.
pub struct HistoryStore<S: KeyValueStore> {
    storage: S,
    key: String,
    capacity: usize,
    entries: Vec<HistoryEntry>,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Load the persisted log with the default key and capacity.
    pub fn load(storage: S) -> Self {
        Self::load_with(storage, HISTORY_KEY, DEFAULT_CAPACITY)
    }

    /// Load the persisted log stored under `key`.
    ///
    /// Missing, unreadable or corrupt data yields an empty log.
    pub fn load_with(storage: S, key: impl Into<String>, capacity: usize) -> Self {
        let key = key.into();
        let mut entries = read_entries(&storage, &key);
        entries.truncate(capacity);

        debug!(key = %key, count = entries.len(), "Loaded calculation history");

        Self {
            storage,
            key,
            capacity,
            entries,
        }
    }

    /// Record `entry` as the most recent calculation and return the log.
    pub fn append(&mut self, entry: HistoryEntry) -> &[HistoryEntry] {
        self.entries.insert(0, entry);
        self.entries.truncate(self.capacity);
        self.persist();
        &self.entries
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    /// Render the log as text, one `"{expression} = {result} ({timestamp})"`
    /// line per entry, newest first.
    pub fn export(&self) -> Result<String, CalcError> {
        if self.entries.is_empty() {
            return Err(CalcError::EmptyHistory);
        }

        Ok(self
            .entries
            .iter()
            .map(HistoryEntry::export_line)
            .collect::<Vec<_>>()
            .join("\n"))
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.entries) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "Failed to serialize history");
                return;
            }
        };

        if let Err(e) = self.storage.set(&self.key, &json) {
            warn!(error = %e, "Failed to save history");
        }
    }
}

fn read_entries<S: KeyValueStore>(storage: &S, key: &str) -> Vec<HistoryEntry> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(error = %e, "Failed to read history, starting empty");
            return Vec::new();
        }
    };

    serde_json::from_str(&raw).unwrap_or_else(|e| {
        warn!(error = %e, "Stored history is corrupt, starting empty");
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::storage::{MemoryStore, StorageError};

    fn entry(i: usize) -> HistoryEntry {
        HistoryEntry::with_timestamp(format!("{} + 0", i), i as f64, "T")
    }

    /// Store whose writes always fail.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::InvalidKey(key.to_string()))
        }
    }

    #[test]
    fn test_append_newest_first() {
        let mut history = HistoryStore::load(MemoryStore::new());
        history.append(entry(1));
        let view = history.append(entry(2));
        assert_eq!(view[0].expression, "2 + 0");
        assert_eq!(view[1].expression, "1 + 0");
    }

    #[test]
    fn test_history_is_bounded() {
        let mut history = HistoryStore::load(MemoryStore::new());
        for i in 0..51 {
            history.append(entry(i));
        }
        assert_eq!(history.len(), 50);
        assert!(history.entries().iter().all(|e| e.expression != "0 + 0"));
        assert_eq!(history.entries()[0].expression, "50 + 0");
    }

    #[test]
    fn test_persists_and_reloads() {
        let mut history = HistoryStore::load(MemoryStore::new());
        history.append(entry(1));
        history.append(entry(2));

        let storage = history.storage().clone();
        let reloaded = HistoryStore::load(storage);
        assert_eq!(reloaded.entries(), history.entries());
    }

    #[test]
    fn test_clear_persists_empty_log() {
        let mut history = HistoryStore::load(MemoryStore::new());
        history.append(entry(1));
        history.clear();
        assert!(history.is_empty());
        assert_eq!(
            history.storage().get(HISTORY_KEY).unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn test_corrupt_data_loads_empty() {
        let mut storage = MemoryStore::new();
        storage.set(HISTORY_KEY, "{not json").unwrap();
        let history = HistoryStore::load(storage);
        assert!(history.is_empty());
    }

    #[test]
    fn test_loads_browser_style_numbers() {
        let mut storage = MemoryStore::new();
        storage
            .set(
                HISTORY_KEY,
                r#"[{"expression":"2 + 2","result":4,"timestamp":"T"}]"#,
            )
            .unwrap();
        let history = HistoryStore::load(storage);
        assert_eq!(history.get(0).map(|e| e.result), Some(4.0));
    }

    #[test]
    fn test_oversized_log_truncated_on_load() {
        let entries: Vec<_> = (0..10).map(entry).collect();
        let mut storage = MemoryStore::new();
        storage
            .set(HISTORY_KEY, &serde_json::to_string(&entries).unwrap())
            .unwrap();
        let history = HistoryStore::load_with(storage, HISTORY_KEY, 3);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_write_failure_keeps_memory_log() {
        let mut history = HistoryStore::load(ReadOnlyStore);
        history.append(entry(1));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_export() {
        let mut history = HistoryStore::load(MemoryStore::new());
        assert_eq!(history.export(), Err(CalcError::EmptyHistory));

        history.append(HistoryEntry::with_timestamp("2 + 2", 4.0, "T"));
        assert_eq!(history.export().as_deref(), Ok("2 + 2 = 4 (T)"));

        history.append(HistoryEntry::with_timestamp("sqrt(9)", 3.0, "U"));
        assert_eq!(
            history.export().as_deref(),
            Ok("sqrt(9) = 3 (U)\n2 + 2 = 4 (T)")
        );
    }
}
