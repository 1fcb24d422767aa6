use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Internal(String),
    Unavailable(&'static str),
}

impl From<backend_application::AppError> for HttpError {
    fn from(value: backend_application::AppError) -> Self {
        match value {
            backend_application::AppError::BadRequest(msg) => HttpError::BadRequest(msg),
            backend_application::AppError::Internal(err) => HttpError::Internal(err.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, format!("bad request: {}", msg))
            }
            HttpError::Internal(detail) => {
                error!("request failed: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
            HttpError::Unavailable(status) => (StatusCode::SERVICE_UNAVAILABLE, status.to_string()),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
