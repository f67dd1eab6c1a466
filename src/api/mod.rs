//! API handlers and route table for the bookstore REST endpoints

pub mod books;
pub mod health;
pub mod openapi;
pub mod users;

use axum::{
    async_trait,
    body::Bytes,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
    routing::{get, post, put},
    Json, Router,
};
use serde::de::DeserializeOwned;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Catalog
        .route("/books", get(books::list_books))
        .route("/books/all", get(books::list_books_deferred))
        // Static prefixes below shadow `/books/:isbn/reviews`; see `review_mutation_fallback`
        .route(
            "/books/isbn/:isbn",
            get(books::get_book).fallback(books::review_mutation_fallback),
        )
        .route(
            "/books/author/:author",
            get(books::books_by_author).fallback(books::review_mutation_fallback),
        )
        .route(
            "/books/title/:title",
            get(books::books_by_title).fallback(books::review_mutation_fallback),
        )
        // Search
        .route("/books/search/isbn/:isbn", get(books::search_by_isbn))
        .route("/books/search/author/:author", get(books::search_by_author))
        .route("/books/search/title/:title", get(books::search_by_title))
        // Reviews
        .route(
            "/books/reviews/:isbn",
            get(books::get_review).fallback(books::review_mutation_fallback),
        )
        .route(
            "/books/:isbn/reviews",
            put(books::set_review).delete(books::delete_review),
        )
        // Users
        .route("/users/register", post(users::register))
        .route("/users/login", post(users::login))
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(openapi::create_openapi_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors),
        )
}

/// JSON body extractor that never validates presence: a request without a JSON
/// content type, or with an empty body, yields `T::default()`.
/// Malformed JSON is still rejected.
pub struct LenientJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Ok(Self(T::default()));
        }

        let bytes = Bytes::from_request(req, state).await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        let Json(value) = Json::<T>::from_bytes(&bytes)?;
        Ok(Self(value))
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
