//! Calculation history.
//!
//! This module provides:
//! - The [`HistoryEntry`] record
//! - A bounded [`HistoryStore`] that persists itself on every change
//! - The [`KeyValueStore`] boundary with memory and file-backed stores

mod entry;
mod storage;
mod store;

pub use entry::HistoryEntry;
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use store::{DEFAULT_CAPACITY, HISTORY_KEY, HistoryStore};
