//! Nullable store — thread-safe in-memory row storage for testing.

use iou_state::{PersistentState, SchemaMarker};
use iou_store::{RowStore, StoreError};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/// An in-memory row store for testing.
/// Thread-safe so it can be shared across test threads.
pub struct NullRowStore {
    rows: Mutex<HashMap<(SchemaMarker, Uuid), PersistentState>>,
}

impl NullRowStore {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(HashMap::new()),
        }
    }

    /// Snapshot of every stored row, in no particular order.
    pub fn all_rows(&self) -> Vec<PersistentState> {
        self.rows.lock().unwrap().values().cloned().collect()
    }
}

impl Default for NullRowStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RowStore for NullRowStore {
    fn put_row(&self, row: &PersistentState) -> Result<(), StoreError> {
        self.rows
            .lock()
            .unwrap()
            .insert((row.marker(), row.linear_id()), row.clone());
        Ok(())
    }

    fn get_row(
        &self,
        marker: SchemaMarker,
        linear_id: &Uuid,
    ) -> Result<PersistentState, StoreError> {
        self.rows
            .lock()
            .unwrap()
            .get(&(marker, *linear_id))
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("{marker} {linear_id}")))
    }

    fn rows_for_party(
        &self,
        marker: SchemaMarker,
        party_name: &str,
    ) -> Result<Vec<PersistentState>, StoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|((m, _), row)| *m == marker && row.involves(party_name))
            .map(|(_, row)| row.clone())
            .collect())
    }

    fn row_count(&self, marker: SchemaMarker) -> Result<u64, StoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .keys()
            .filter(|(m, _)| *m == marker)
            .count() as u64)
    }
}
