use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::errors::{FormatError, TrackerError, ValidationError};

/// Error returned by every handler, rendered as `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Internal(anyhow::Error),
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        if let Some(tracker) = err.downcast_ref::<TrackerError>() {
            return match tracker {
                TrackerError::Format(_) | TrackerError::Validation(_) => {
                    ApiError::BadRequest(tracker.to_string())
                }
                TrackerError::NotFound { .. } => ApiError::NotFound(tracker.to_string()),
                TrackerError::DeckInUse { .. }
                | TrackerError::AlreadyInTeam { .. }
                | TrackerError::NotInTeam { .. } => ApiError::Conflict(tracker.to_string()),
            };
        }
        if let Some(format) = err.downcast_ref::<FormatError>() {
            return ApiError::BadRequest(format.to_string());
        }
        if let Some(validation) = err.downcast_ref::<ValidationError>() {
            return ApiError::BadRequest(validation.to_string());
        }
        if is_constraint_violation(&err) {
            return ApiError::Conflict(format!("{:#}", err));
        }
        ApiError::Internal(err)
    }
}

impl From<FormatError> for ApiError {
    fn from(err: FormatError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<TrackerError> for ApiError {
    fn from(err: TrackerError) -> Self {
        ApiError::from(anyhow::Error::from(err))
    }
}

fn is_constraint_violation(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<rusqlite::Error>(),
        Some(rusqlite::Error::SqliteFailure(e, _))
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Internal(err) => {
                log::error!("Request failed: {:?}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
