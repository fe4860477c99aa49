use iou_types::IouError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("row not found: {0}")]
    NotFound(String),

    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("schema error: {0}")]
    Schema(#[from] IouError),
}
