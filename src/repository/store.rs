//! Generic in-memory record store

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::models::Record;

#[derive(Debug)]
struct StoreState<T> {
    records: Vec<T>,
    next_id: i64,
}

/// In-memory collection of records plus its identity counter.
///
/// Every operation holds the single store lock for its whole duration, so
/// all operations on one store are mutually exclusive. Reads hand out copies;
/// the lock is never held while a response is encoded. Clones share state.
#[derive(Debug, Clone)]
pub struct MemoryStore<T> {
    state: Arc<Mutex<StoreState<T>>>,
}

impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> MemoryStore<T> {
    /// Creates an empty store whose first id will be 1.
    pub fn new() -> Self {
        Self::with_seed(Vec::new())
    }

    /// Creates a store holding `records`, in order.
    ///
    /// The identity counter starts right above the highest seed id.
    pub fn with_seed(records: Vec<T>) -> Self {
        let next_id = records.iter().map(Record::id).max().map_or(1, |max| max + 1);
        Self {
            state: Arc::new(Mutex::new(StoreState { records, next_id })),
        }
    }

    /// Snapshot of all records in insertion order
    pub async fn list(&self) -> Vec<T> {
        self.state.lock().await.records.clone()
    }

    /// Copy of the first record with the given id, if any
    pub async fn get_by_id(&self, id: i64) -> Option<T> {
        let state = self.state.lock().await;
        state.records.iter().find(|record| record.id() == id).cloned()
    }

    /// Stores `record` under a fresh id, ignoring whatever id it carries.
    pub async fn create(&self, mut record: T) -> T {
        let mut state = self.state.lock().await;
        record.set_id(state.next_id);
        state.next_id += 1;
        state.records.push(record.clone());
        record
    }

    /// Replaces the record with the given id in place, forcing its id to `id`.
    ///
    /// Returns `None` and leaves the store untouched when no such record exists.
    pub async fn update(&self, id: i64, mut record: T) -> Option<T> {
        let mut state = self.state.lock().await;
        let slot = state.records.iter_mut().find(|existing| existing.id() == id)?;
        record.set_id(id);
        *slot = record.clone();
        Some(record)
    }

    /// Removes the record with the given id, keeping the order of the others.
    ///
    /// Returns whether a record was removed.
    pub async fn delete(&self, id: i64) -> bool {
        let mut state = self.state.lock().await;
        match state.records.iter().position(|record| record.id() == id) {
            Some(index) => {
                state.records.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of records currently stored
    pub async fn len(&self) -> usize {
        self.state.lock().await.records.len()
    }
}
