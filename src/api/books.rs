//! Book catalog, search and review endpoints

use axum::{
    extract::{Path, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use super::LenientJson;
use crate::{
    error::{AppResult, ReviewError},
    models::book::{Book, ReviewRequest},
    AppState,
};

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books in catalog order", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(state.services.catalog.list_books().await)
}

/// Get book details by ISBN
#[utoipa::path(
    get,
    path = "/books/isbn/{isbn}",
    tag = "books",
    params(("isbn" = String, Path, description = "Book ISBN")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(&isbn).await?;
    Ok(Json(book))
}

/// List books written by an author (exact match)
#[utoipa::path(
    get,
    path = "/books/author/{author}",
    tag = "books",
    params(("author" = String, Path, description = "Author name")),
    responses(
        (status = 200, description = "Matching books, possibly none", body = Vec<Book>)
    )
)]
pub async fn books_by_author(
    State(state): State<AppState>,
    Path(author): Path<String>,
) -> Json<Vec<Book>> {
    Json(state.services.catalog.books_by_author(&author).await)
}

/// List books with a given title (exact match)
#[utoipa::path(
    get,
    path = "/books/title/{title}",
    tag = "books",
    params(("title" = String, Path, description = "Book title")),
    responses(
        (status = 200, description = "Matching books, possibly none", body = Vec<Book>)
    )
)]
pub async fn books_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Json<Vec<Book>> {
    Json(state.services.catalog.books_by_title(&title).await)
}

/// List all books after the configured listing delay
#[utoipa::path(
    get,
    path = "/books/all",
    tag = "books",
    responses(
        (status = 200, description = "All books in catalog order", body = Vec<Book>),
        (status = 500, description = "Deferred listing failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books_deferred(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.list_books_deferred().await?;
    Ok(Json(books))
}

/// Search a book by ISBN
#[utoipa::path(
    get,
    path = "/books/search/isbn/{isbn}",
    tag = "search",
    params(("isbn" = String, Path, description = "Book ISBN")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn search_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.search_by_isbn(&isbn).await?;
    Ok(Json(book))
}

/// Search books by author
#[utoipa::path(
    get,
    path = "/books/search/author/{author}",
    tag = "search",
    params(("author" = String, Path, description = "Author name")),
    responses(
        (status = 200, description = "Matching books, possibly none", body = Vec<Book>)
    )
)]
pub async fn search_by_author(
    State(state): State<AppState>,
    Path(author): Path<String>,
) -> Json<Vec<Book>> {
    Json(state.services.catalog.books_by_author(&author).await)
}

/// Search books by title
#[utoipa::path(
    get,
    path = "/books/search/title/{title}",
    tag = "search",
    params(("title" = String, Path, description = "Book title")),
    responses(
        (status = 200, description = "Matching books, possibly none", body = Vec<Book>)
    )
)]
pub async fn search_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Json<Vec<Book>> {
    Json(state.services.catalog.books_by_title(&title).await)
}

/// Get the review of a book.
///
/// A book without a review answers 200 with the JSON body `null`, where an
/// empty body would be the only other option.
#[utoipa::path(
    get,
    path = "/books/reviews/{isbn}",
    tag = "reviews",
    params(("isbn" = String, Path, description = "Book ISBN")),
    responses(
        (status = 200, description = "Review text, or null when the book has none", body = String),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_review(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<Option<Value>>> {
    let review = state.services.catalog.get_review(&isbn).await?;
    Ok(Json(review))
}

/// Add or replace the review of a book
#[utoipa::path(
    put,
    path = "/books/{isbn}/reviews",
    tag = "reviews",
    params(("isbn" = String, Path, description = "Book ISBN")),
    request_body = ReviewRequest,
    responses(
        (status = 200, description = "Review added/modified successfully", body = String, content_type = "text/plain"),
        (status = 404, description = "Book not found", body = String, content_type = "text/plain")
    )
)]
pub async fn set_review(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    LenientJson(body): LenientJson<ReviewRequest>,
) -> Result<&'static str, ReviewError> {
    state.services.catalog.set_review(&isbn, body.review).await?;
    Ok("Review added/modified successfully")
}

/// Delete the review of a book
#[utoipa::path(
    delete,
    path = "/books/{isbn}/reviews",
    tag = "reviews",
    params(("isbn" = String, Path, description = "Book ISBN")),
    responses(
        (status = 200, description = "Review deleted successfully", body = String, content_type = "text/plain"),
        (status = 404, description = "Book not found, or no review found for this book", body = String, content_type = "text/plain")
    )
)]
pub async fn delete_review(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<&'static str, ReviewError> {
    state.services.catalog.delete_review(&isbn).await?;
    Ok("Review deleted successfully")
}

/// Method fallback for the `/books/{isbn|author|title|reviews}/:param` routes.
///
/// Those static prefixes shadow `/books/:isbn/reviews` when the ISBN is
/// literally one of the prefix words, so review mutations on those paths are
/// dispatched here.
pub async fn review_mutation_fallback(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    LenientJson(body): LenientJson<ReviewRequest>,
) -> Response {
    let Some(isbn) = review_path_isbn(uri.path()) else {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    };

    match method {
        Method::PUT => set_review(State(state), Path(isbn.to_string()), LenientJson(body))
            .await
            .into_response(),
        Method::DELETE => delete_review(State(state), Path(isbn.to_string()))
            .await
            .into_response(),
        _ => StatusCode::METHOD_NOT_ALLOWED.into_response(),
    }
}

/// ISBN segment of a `/books/{isbn}/reviews` path
fn review_path_isbn(path: &str) -> Option<&str> {
    path.strip_prefix("/books/")?
        .strip_suffix("/reviews")
        .filter(|isbn| !isbn.is_empty() && !isbn.contains('/'))
}
