use crate::error::{parse_id, ApiError, ErrorResponse};
use crate::routes;
use axum::{extract::Path, http::StatusCode};

/// GET /api/Process/{id} handler - Retrieve a resource by id
#[utoipa::path(
    get,
    path = routes::PROCESS_ITEM,
    params(
        ("id" = i32, Path, description = "Identifier of the resource")
    ),
    responses(
        (
            status = 200,
            description = "Resource retrieved",
            content_type = "text/plain",
            body = String
        ),
        (status = 400, description = "Id is not an integer", body = ErrorResponse)
    ),
    tag = "Process"
)]
pub async fn read_handler(Path(id_str): Path<String>) -> Result<(StatusCode, String), ApiError> {
    let id = parse_id(&id_str)?;

    tracing::debug!("Read resource: id={}", id);
    Ok((StatusCode::OK, format!("Resource retrieved: Id={}", id)))
}
