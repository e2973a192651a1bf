//! Book inventory endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::Book,
};

/// Query parameters for checkout and return
#[derive(Deserialize)]
pub struct BookIdParams {
    pub id: Option<String>,
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "List of all books", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> Json<Vec<Book>> {
    Json(state.services.inventory.list_books().await)
}

/// Add a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Malformed request body")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(book): Json<Book>,
) -> (StatusCode, Json<Book>) {
    let created = state.services.inventory.create_book(book).await;
    (StatusCode::CREATED, Json(created))
}

/// Get a book by id
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book id")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.inventory.get_book(&id).await?;
    Ok(Json(book))
}

/// Check out a copy of a book
#[utoipa::path(
    put,
    path = "/checkout",
    tag = "books",
    params(
        ("id" = String, Query, description = "Book id")
    ),
    responses(
        (status = 200, description = "Book checked out", body = Book),
        (status = 400, description = "Missing id or no copy available", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn checkout_book(
    State(state): State<crate::AppState>,
    Query(params): Query<BookIdParams>,
) -> AppResult<Json<Book>> {
    let id = params.id.ok_or_else(|| {
        AppError::MissingParameter("Missing id query parameter.".to_string())
    })?;

    let book = state.services.inventory.checkout_book(&id).await?;
    Ok(Json(book))
}

/// Return a borrowed copy of a book
#[utoipa::path(
    put,
    path = "/return",
    tag = "books",
    params(
        ("id" = String, Query, description = "Book id")
    ),
    responses(
        (status = 200, description = "Book returned", body = Book),
        (status = 400, description = "Missing id", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    Query(params): Query<BookIdParams>,
) -> AppResult<Json<Book>> {
    let id = params
        .id
        .ok_or_else(|| AppError::MissingParameter("Missing or bad id".to_string()))?;

    let book = state.services.inventory.return_book(&id).await?;
    Ok(Json(book))
}
