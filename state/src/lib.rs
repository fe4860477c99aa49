//! The IOU linear state.
//!
//! An [`IouState`] records one obligation between a lender and a borrower.
//! States are immutable: an amendment produces a new state that keeps the
//! original [`UniqueIdentifier`](iou_types::UniqueIdentifier). Each state can
//! project itself into the persistence schemas it supports so an off-ledger
//! indexer can store and query it.

pub mod iou;
pub mod schema;

pub use iou::IouState;
pub use schema::{
    descriptor, supported_descriptors, PersistentIou, PersistentState, SchemaDescriptor,
    SchemaMarker, IOU_SCHEMA_V1,
};
