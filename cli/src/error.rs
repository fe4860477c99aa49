use iou_types::IouError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(String),

    #[error("invalid linear id {input:?}: {reason}")]
    InvalidLinearId { input: String, reason: String },

    #[error(transparent)]
    Iou(#[from] IouError),

    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}
