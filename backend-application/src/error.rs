use thiserror::Error;

use backend_domain::NormalizeError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<NormalizeError> for AppError {
    fn from(value: NormalizeError) -> Self {
        AppError::BadRequest(value.to_string())
    }
}
