use axum::http::StatusCode;

pub const GREETING: &str = "Hello! this is a temporal image. Waiting for the proper image.";

/// GET / handler - Placeholder greeting for the temporary image
pub async fn root_handler() -> (StatusCode, &'static str) {
    (StatusCode::OK, GREETING)
}
