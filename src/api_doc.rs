use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Berge document processor API",
        version = "1.0.0",
        description = "Resource endpoints of the document processor (plain-text responses)"
    ),
    paths(
        handlers::create::create_handler,
        handlers::read::read_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(ErrorResponse)
    ),
    tags(
        (name = "Process", description = "Resource operations")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_documents_resource_operations() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = &doc["paths"];

        assert!(paths["/api/Process"]["post"].is_object());
        assert!(paths["/api/Process/{id}"]["get"].is_object());
        assert!(paths["/api/Process/{id}"]["put"].is_object());
        assert!(paths["/api/Process/{id}"]["delete"].is_object());
        assert!(paths.get("/health").is_none());
    }

    #[test]
    fn test_openapi_lists_query_parameters() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let params = doc["paths"]["/api/Process"]["post"]["parameters"]
            .as_array()
            .unwrap();

        let names: Vec<&str> = params
            .iter()
            .filter_map(|p| p["name"].as_str())
            .collect();
        assert_eq!(names, vec!["name", "value"]);
    }
}
