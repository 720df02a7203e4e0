//! API error envelope and request extraction helpers.
//!
//! Success responses are the entity (or array) as plain JSON with no
//! wrapper. Failures use `{"error": ..., "details"?: ..., "message"?: ...}`
//! with 400 (validation), 404 (not found) or 500 (unexpected).

use axum::Json;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use utoipa::ToSchema;

/// Error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    /// Human-readable validation detail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Generic message carried on unexpected errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// API error taxonomy.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed request surface (e.g. a non-integer id): 400, bare error.
    #[error("{0}")]
    BadRequest(String),
    /// Payload failed schema or field validation: 400 with details.
    #[error("validation failed: {0}")]
    Validation(String),
    /// Well-formed identifier with no matching record: 404.
    #[error("{0}")]
    NotFound(String),
    /// Anything else: 500 with a generic message, full detail in the log.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        ApiError::BadRequest(msg.into())
    }

    pub fn validation(details: impl Into<String>) -> Self {
        ApiError::Validation(details.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        ApiError::NotFound(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        ApiError::Internal(msg.into())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::Validation(errors.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(error) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error,
                    details: None,
                    message: None,
                },
            ),
            ApiError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "Validation Error".to_string(),
                    details: Some(details),
                    message: None,
                },
            ),
            ApiError::NotFound(error) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error,
                    details: None,
                    message: None,
                },
            ),
            ApiError::Internal(message) => {
                tracing::error!(%message, "unexpected API error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "Internal Server Error".to_string(),
                        details: None,
                        message: Some(message),
                    },
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

/// Handler result: plain entity JSON on success, envelope on failure.
pub type ApiResult<T> = Result<Json<T>, ApiError>;

/// JSON extractor whose rejection is the validation envelope instead of
/// axum's plain-text default.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(ApiError::validation(rejection.body_text())),
        }
    }
}

/// Parse a path identifier; anything but a positive integer is a 400.
pub fn parse_id(raw: &str) -> Result<u32, ApiError> {
    raw.parse::<u32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ApiError::bad_request("Invalid ID"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_positive_integers_only() {
        assert_eq!(parse_id("7").unwrap(), 7);
        assert!(parse_id("0").is_err());
        assert!(parse_id("-3").is_err());
        assert!(parse_id("abc").is_err());
        assert!(parse_id("1.5").is_err());
    }

    #[test]
    fn validation_error_carries_details() {
        let body = match ApiError::validation("title too short") {
            ApiError::Validation(details) => ErrorBody {
                error: "Validation Error".to_string(),
                details: Some(details),
                message: None,
            },
            _ => unreachable!(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], "Validation Error");
        assert_eq!(json["details"], "title too short");
        assert!(json.get("message").is_none());
    }
}
