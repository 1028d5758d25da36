use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::config::Config;
use crate::handlers;
use crate::normalize::lenient;
use crate::routes;

/// Router for the document processor: resource endpoints plus, in
/// development, the Swagger UI.
///
/// Resource paths match ignoring case and a trailing slash. Swagger paths
/// match exactly, since the UI redirects `/swagger` to `/swagger/`.
pub fn process_router(config: &Config) -> Router {
    let api = Router::new()
        .route(routes::PROCESS, post(handlers::create_handler))
        .route(
            routes::PROCESS_ITEM,
            get(handlers::read_handler)
                .put(handlers::update_handler)
                .delete(handlers::delete_handler),
        );

    let mut app = lenient(api, routes::PROCESS_ROUTES);

    if config.swagger_enabled() {
        app = app.merge(
            SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()),
        );
    }

    app.layer(TraceLayer::new_for_http())
}

/// Router for the placeholder image: greeting and health probe only.
pub fn placeholder_router() -> Router {
    let probes = Router::new()
        .route(routes::ROOT, get(handlers::root_handler))
        .route(routes::HEALTH, get(handlers::health_handler));

    lenient(probes, routes::PLACEHOLDER_ROUTES).layer(TraceLayer::new_for_http())
}
