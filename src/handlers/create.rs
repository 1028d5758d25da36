use crate::models::ResourceQuery;
use crate::routes;
use axum::{extract::Query, http::StatusCode};

/// POST /api/Process handler - Create a resource from query parameters
#[utoipa::path(
    post,
    path = routes::PROCESS,
    params(ResourceQuery),
    responses(
        (
            status = 200,
            description = "Resource created",
            content_type = "text/plain",
            body = String
        ),
        (status = 400, description = "Malformed query string")
    ),
    tag = "Process"
)]
pub async fn create_handler(Query(pairs): Query<Vec<(String, String)>>) -> (StatusCode, String) {
    let query = ResourceQuery::from_pairs(pairs);

    tracing::debug!("Create resource: name={}, value={}", query.name, query.value);

    (
        StatusCode::OK,
        format!("Resource created: Name={}, Value={}", query.name, query.value),
    )
}
