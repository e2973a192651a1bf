//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Librarium API",
        version = "0.1.0",
        description = "Book Inventory Service REST API"
    ),
    paths(
        // Health
        health::health_check,
        // Books
        books::list_books,
        books::create_book,
        books::get_book,
        books::checkout_book,
        books::return_book,
    ),
    components(
        schemas(
            crate::models::Book,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book inventory management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
