//! Library, metadata and table of contents handlers

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use shelf_core::{split_book_path, BookMetadata, TableOfContents};

/// List response
#[derive(Debug, Serialize)]
pub struct ListBooksResponse {
    pub list: Vec<BookMetadata>,
}

/// List every book (`/search/`)
pub async fn list_all_books(
    State(state): State<AppState>,
) -> Result<Json<ListBooksResponse>, ApiError> {
    search_books(state, String::new()).await
}

/// List books whose file name contains the filter (`/search/{filter}`)
pub async fn list_books(
    State(state): State<AppState>,
    Path(filter): Path<String>,
) -> Result<Json<ListBooksResponse>, ApiError> {
    search_books(state, filter).await
}

async fn search_books(
    state: AppState,
    filter: String,
) -> Result<Json<ListBooksResponse>, ApiError> {
    let list = state.with_shelf(move |shelf| shelf.list_books(&filter)).await?;
    Ok(Json(ListBooksResponse { list }))
}

/// Extract the book identifier from a wildcard path, ignoring anything after it
fn book_identifier(path: &str) -> Result<String, ApiError> {
    split_book_path(path)
        .map(|(id, _)| id.to_string())
        .ok_or_else(|| ApiError::BadRequest(format!("no .epub identifier in {:?}", path)))
}

/// Get a single book's metadata (`/info/{id}`)
pub async fn get_book(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Json<BookMetadata>, ApiError> {
    let id = book_identifier(&path)?;
    let metadata = state.with_shelf(move |shelf| shelf.book_info(&id)).await?;
    Ok(Json(metadata))
}

/// Get a book's table of contents (`/chapter/{id}`)
pub async fn get_chapters(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Json<TableOfContents>, ApiError> {
    let id = book_identifier(&path)?;
    let toc = state.with_shelf(move |shelf| shelf.table_of_contents(&id)).await?;
    Ok(Json(toc))
}

/// Requests to `/info/`, `/chapter/` or `/content/` without an identifier
pub async fn missing_identifier() -> ApiError {
    ApiError::BadRequest("missing book identifier".to_string())
}
