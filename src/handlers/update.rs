use crate::error::{parse_id, ApiError, ErrorResponse};
use crate::models::ResourceQuery;
use crate::routes;
use axum::{
    extract::{Path, Query},
    http::StatusCode,
};

/// PUT /api/Process/{id} handler - Update a resource with new name and value
#[utoipa::path(
    put,
    path = routes::PROCESS_ITEM,
    params(
        ("id" = i32, Path, description = "Identifier of the resource"),
        ResourceQuery
    ),
    responses(
        (
            status = 200,
            description = "Resource updated",
            content_type = "text/plain",
            body = String
        ),
        (status = 400, description = "Id is not an integer", body = ErrorResponse)
    ),
    tag = "Process"
)]
pub async fn update_handler(
    Path(id_str): Path<String>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<(StatusCode, String), ApiError> {
    let id = parse_id(&id_str)?;
    let query = ResourceQuery::from_pairs(pairs);

    tracing::debug!(
        "Update resource: id={}, name={}, value={}",
        id,
        query.name,
        query.value
    );
    Ok((
        StatusCode::OK,
        format!(
            "Resource updated: Id={}, Name={}, Value={}",
            id, query.name, query.value
        ),
    ))
}
