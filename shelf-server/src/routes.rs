//! HTTP routes

use crate::handlers;
use crate::state::AppState;
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    // Only GET (and HEAD) are routed; the CORS layer answers OPTIONS itself
    let cors = cors_layer(state.config.cors_origins.as_deref());

    Router::new()
        .route("/", get(handlers::index))
        .route("/booksource", get(handlers::booksource))
        // Library endpoints
        .route("/search/", get(handlers::list_all_books))
        .route("/search/*filter", get(handlers::list_books))
        .route("/info/", get(handlers::missing_identifier))
        .route("/info/*path", get(handlers::get_book))
        .route("/chapter/", get(handlers::missing_identifier))
        .route("/chapter/*path", get(handlers::get_chapters))
        .route("/content/", get(handlers::missing_identifier))
        .route("/content/*path", get(handlers::get_content))
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Configure CORS from a comma-separated origin list, or "*" for any origin
pub fn cors_layer(origins: Option<&str>) -> CorsLayer {
    let methods = [Method::GET, Method::OPTIONS];
    match origins {
        Some("*") => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any),
        Some(origins) => {
            let allowed: Vec<HeaderValue> = origins
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(allowed))
                .allow_methods(methods)
                .allow_headers(Any)
        }
        None => {
            // Default: allow localhost origins for development
            CorsLayer::new()
                .allow_origin(AllowOrigin::list([
                    HeaderValue::from_static("http://localhost:10005"),
                    HeaderValue::from_static("http://127.0.0.1:10005"),
                    HeaderValue::from_static("http://localhost:5173"),
                    HeaderValue::from_static("http://127.0.0.1:5173"),
                ]))
                .allow_methods(methods)
                .allow_headers(Any)
        }
    }
}
