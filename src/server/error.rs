use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::core::{ErrorKind, FieldError, RenderError, ValidationError};

/// Error type for the HTTP handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Body is not JSON at all.
    BadRequest(String),
    /// Body decoded but its fields are unusable.
    Unprocessable(Vec<FieldError>),
    /// Anything the client cannot fix. The message is logged, never returned.
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: Vec<FieldError>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: msg,
                    details: Vec::new(),
                },
            ),
            ApiError::Unprocessable(details) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorBody {
                    error: "validation failed".to_string(),
                    details,
                },
            ),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "internal server error".to_string(),
                        details: Vec::new(),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::Unprocessable(e.errors)
    }
}

impl From<RenderError> for ApiError {
    fn from(e: RenderError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        // Fields of the wrong type are kept by the decoder, so a data error
        // means the body itself is not an object.
        if e.is_data() {
            ApiError::Unprocessable(vec![FieldError::new(
                "body",
                ErrorKind::InvalidFormat,
                "request body must be a JSON object",
            )])
        } else {
            ApiError::BadRequest(format!("malformed JSON body: {e}"))
        }
    }
}
