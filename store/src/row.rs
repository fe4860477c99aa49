//! Projected-row storage trait.

use crate::StoreError;
use iou_state::{IouState, PersistentState, SchemaMarker};
use uuid::Uuid;

/// Trait for storing the rows IOU states project into.
///
/// Rows are keyed by `(schema marker, linear id token)`. Every version of a
/// logical IOU shares one key, so storing an amended state's row replaces
/// the row of the version it superseded.
pub trait RowStore {
    /// Insert or replace a row.
    fn put_row(&self, row: &PersistentState) -> Result<(), StoreError>;

    /// Fetch the row for one IOU under one schema.
    fn get_row(&self, marker: SchemaMarker, linear_id: &Uuid)
        -> Result<PersistentState, StoreError>;

    /// All rows under `marker` in which `party_name` is lender or borrower.
    fn rows_for_party(
        &self,
        marker: SchemaMarker,
        party_name: &str,
    ) -> Result<Vec<PersistentState>, StoreError>;

    /// Number of rows stored under `marker`.
    fn row_count(&self, marker: SchemaMarker) -> Result<u64, StoreError>;

    /// Project `state` into every schema it supports and store each row.
    ///
    /// Returns the number of rows written.
    fn record_state(&self, state: &IouState) -> Result<usize, StoreError> {
        let mut written = 0;
        for marker in state.supported_schemas() {
            let row = state.project_to(marker)?;
            self.put_row(&row)?;
            tracing::debug!(schema = %marker, linear_id = %state.linear_id(), "recorded IOU row");
            written += 1;
        }
        Ok(written)
    }
}
