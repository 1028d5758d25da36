use crate::error::{parse_id, ApiError, ErrorResponse};
use crate::routes;
use axum::{extract::Path, http::StatusCode};

/// DELETE /api/Process/{id} handler - Delete a resource by id
#[utoipa::path(
    delete,
    path = routes::PROCESS_ITEM,
    params(
        ("id" = i32, Path, description = "Identifier of the resource")
    ),
    responses(
        (
            status = 200,
            description = "Resource deleted",
            content_type = "text/plain",
            body = String
        ),
        (status = 400, description = "Id is not an integer", body = ErrorResponse)
    ),
    tag = "Process"
)]
pub async fn delete_handler(Path(id_str): Path<String>) -> Result<(StatusCode, String), ApiError> {
    let id = parse_id(&id_str)?;

    tracing::debug!("Delete resource: id={}", id);
    Ok((StatusCode::OK, format!("Resource deleted: Id={}", id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::delete, Router};
    use tower::ServiceExt;

    fn setup_test_app() -> Router {
        Router::new().route(routes::PROCESS_ITEM, delete(delete_handler))
    }

    async fn delete_resource(id: &str) -> (StatusCode, String) {
        let response = setup_test_app()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/Process/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_delete_success() {
        let (status, body) = delete_resource("99").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Resource deleted: Id=99");
    }

    #[tokio::test]
    async fn test_delete_is_repeatable() {
        let first = delete_resource("99").await;
        let second = delete_resource("99").await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_delete_invalid_id() {
        let (status, _) = delete_resource("1e3").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
