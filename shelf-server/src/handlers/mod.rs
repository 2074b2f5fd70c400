//! Request handlers

mod books;
mod content;

pub use books::*;
pub use content::*;

use axum::{
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use serde::Serialize;

const INDEX_HTML: &str = include_str!("../../assets/index.html");
const BOOKSOURCE_JSON: &str = include_str!("../../assets/booksource.json");

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Front page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Book source definition for reader apps
pub async fn booksource() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], BOOKSOURCE_JSON)
}
