use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tagstore_core::StoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Body returned for unsupported or missing query actions.
pub const BAD_REQUEST_BODY: &str = "Bad request";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request")]
    BadRequest,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest => StatusCode::BAD_REQUEST,
            AppError::Store(StoreError::DuplicateId(_)) => StatusCode::CONFLICT,
        };
        (status, self.to_string()).into_response()
    }
}
