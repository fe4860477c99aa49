//! Abstract row-store traits for off-ledger IOU indexing.
//!
//! Every storage backend (SQL, embedded KV, in-memory for testing) implements
//! these traits. Callers depend only on the traits.

pub mod error;
pub mod row;

pub use error::StoreError;
pub use row::RowStore;
