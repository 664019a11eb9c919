use super::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}
