use axum::http::StatusCode;

/// Covers every malformed or incomplete submission. Unknown device lookups
/// are not errors; they yield empty results at the query layer.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required fields ({0})")]
    MissingFields(String),

    #[error("Position must include latitude and longitude")]
    InvalidPosition,
}

impl ValidationError {
    pub fn missing(fields: &[&str]) -> Self {
        ValidationError::MissingFields(fields.join(", "))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ValidationError::MissingFields(_) => StatusCode::BAD_REQUEST,
            ValidationError::InvalidPosition => StatusCode::BAD_REQUEST,
        }
    }
}
