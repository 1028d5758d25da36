use axum::{
    extract::Request,
    http::uri::{PathAndQuery, Uri},
    Router,
};
use tower::ServiceBuilder;
use tower_http::normalize_path::NormalizePathLayer;

/// Wrap `router` so a request path matches one of `templates` ignoring ASCII
/// case and a trailing slash.
///
/// The wrapped router sits behind the returned router's fallback, so routes
/// merged into the returned router afterwards are matched exactly.
pub fn lenient(router: Router, templates: &'static [&'static str]) -> Router {
    let service = ServiceBuilder::new()
        .layer(NormalizePathLayer::trim_trailing_slash())
        .map_request(move |request: Request| canonicalize_request(request, templates))
        .service(router);

    Router::new().fallback_service(service)
}

fn canonicalize_request(mut request: Request, templates: &[&str]) -> Request {
    let Some(path) = canonical_path(request.uri().path(), templates) else {
        return request;
    };

    let path_and_query = match request.uri().query() {
        Some(query) => format!("{}?{}", path, query),
        None => path,
    };

    let mut parts = request.uri().clone().into_parts();
    let Ok(path_and_query) = path_and_query.parse::<PathAndQuery>() else {
        return request;
    };
    parts.path_and_query = Some(path_and_query);

    if let Ok(uri) = Uri::from_parts(parts) {
        tracing::debug!("Rewrote request path {} -> {}", request.uri().path(), uri.path());
        *request.uri_mut() = uri;
    }
    request
}

/// Rewrite the literal segments of `path` to the casing of the first matching
/// template. `None` when nothing matches or the path is already canonical.
pub fn canonical_path(path: &str, templates: &[&str]) -> Option<String> {
    let segments: Vec<&str> = path.split('/').collect();

    templates.iter().find_map(|template| {
        let literals: Vec<&str> = template.split('/').collect();
        if literals.len() != segments.len() {
            return None;
        }

        let matches = literals
            .iter()
            .zip(&segments)
            .all(|(t, s)| is_param(t) || t.eq_ignore_ascii_case(s));
        if !matches {
            return None;
        }

        let rewritten = literals
            .iter()
            .zip(&segments)
            .map(|(t, s)| if is_param(t) { *s } else { *t })
            .collect::<Vec<_>>()
            .join("/");

        (rewritten != path).then_some(rewritten)
    })
}

fn is_param(segment: &str) -> bool {
    segment.starts_with('{') && segment.ends_with('}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes;
    use axum::{body::Body, http::StatusCode, routing::get};
    use tower::ServiceExt;

    const TEMPLATES: &[&str] = &[routes::PROCESS, routes::PROCESS_ITEM, routes::HEALTH];

    #[test]
    fn test_canonical_path_fixes_literal_casing() {
        assert_eq!(
            canonical_path("/api/process/5", TEMPLATES).as_deref(),
            Some("/api/Process/5")
        );
        assert_eq!(
            canonical_path("/API/PROCESS", TEMPLATES).as_deref(),
            Some("/api/Process")
        );
        assert_eq!(canonical_path("/HEALTH", TEMPLATES).as_deref(), Some("/health"));
    }

    #[test]
    fn test_canonical_path_keeps_parameter_segments() {
        assert_eq!(
            canonical_path("/Api/Process/AbC", TEMPLATES).as_deref(),
            Some("/api/Process/AbC")
        );
    }

    #[test]
    fn test_canonical_path_leaves_canonical_and_unknown_paths() {
        assert_eq!(canonical_path("/api/Process/5", TEMPLATES), None);
        assert_eq!(canonical_path("/api/Other/5", TEMPLATES), None);
        assert_eq!(canonical_path("/api/Process/5/extra", TEMPLATES), None);
    }

    #[tokio::test]
    async fn test_lenient_router_preserves_query_string() {
        let inner = Router::new().route(
            routes::PROCESS,
            get(|request: Request| async move { request.uri().to_string() }),
        );
        let app = lenient(inner, TEMPLATES);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/API/process/?name=a%20b")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"/api/Process?name=a%20b");
    }
}
