//! Top-level error type shared across crates.

use thiserror::Error;

/// Common error type for IOU states.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IouError {
    /// A projection was requested for a schema the state does not support.
    ///
    /// Callers are expected to draw markers from `supported_schemas()`, so
    /// this always indicates a defect at the call site.
    #[error("unsupported schema: {family} v{version}")]
    UnsupportedSchema { family: String, version: u32 },
}
