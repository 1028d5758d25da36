use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Maps request problems to HTTP status codes and renders them as JSON
/// `ErrorResponse` bodies.
#[derive(Debug)]
pub enum ApiError {
    /// Path id that is not a 32-bit integer
    InvalidId(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidId(id) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid id: expected a 32-bit integer, got '{}'", id),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

/// Parse a raw path segment into a resource id.
pub fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>().map_err(|_| {
        tracing::info!("Rejected resource id: {}", raw);
        ApiError::InvalidId(raw.to_string())
    })
}
