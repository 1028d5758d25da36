use axum::http::StatusCode;

/// GET /health handler - Liveness probe for the deployment platform
pub async fn health_handler() -> (StatusCode, &'static str) {
    (StatusCode::OK, "Ok")
}
