//! API Routes
//!
//! Configures the Axum router for the cache endpoint.

use axum::{extract::DefaultBodyLimit, routing::any, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{cache_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// Everything under `/api/cache` reaches [`cache_handler`], which does its own
/// path and method validation. The bare prefix and the trailing-slash form are
/// routed too so that they are rejected as malformed rather than unrouted.
///
/// # Middleware
/// - Body limit: Disabled, values are unbounded
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/cache", any(cache_handler))
        .route("/api/cache/", any(cache_handler))
        .route("/api/cache/*rest", any(cache_handler))
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        create_router(AppState::default())
    }

    #[tokio::test]
    async fn test_set_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/cache/test")
                    .body(Body::from("hello"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/cache/nonexistent")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_large_value_accepted() {
        let app = create_test_app();
        let value = "x".repeat(4 * 1024 * 1024);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/cache/big")
                    .body(Body::from(value))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_malformed_path_with_binary_body_forbidden() {
        for method in ["POST", "GET", "DELETE"] {
            let response = create_test_app()
                .oneshot(
                    Request::builder()
                        .method(method)
                        .uri("/api/cache/a/b/c")
                        .body(Body::from(vec![0xffu8, 0xfe]))
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::FORBIDDEN, "{method}");
        }
    }

    #[tokio::test]
    async fn test_bare_prefix_forbidden() {
        for uri in ["/api/cache", "/api/cache/"] {
            let response = create_test_app()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::FORBIDDEN, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_unrelated_path_unrouted() {
        let response = create_test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
