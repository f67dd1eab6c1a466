//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookstore API",
        version = "0.1.0",
        description = "In-memory bookstore REST API"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book,
        books::books_by_author,
        books::books_by_title,
        books::list_books_deferred,
        // Search
        books::search_by_isbn,
        books::search_by_author,
        books::search_by_title,
        // Reviews
        books::get_review,
        books::set_review,
        books::delete_review,
        // Users
        users::register,
        users::login,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::book::ReviewRequest,
            crate::models::user::User,
            crate::models::user::Credentials,
            crate::models::user::UserResponse,
            health::HealthResponse,
            health::ReadinessResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog"),
        (name = "search", description = "Book search"),
        (name = "reviews", description = "Book reviews"),
        (name = "users", description = "User registration and login")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
