//! API handlers for the Librarium REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Books
        .route("/books", get(books::list_books))
        .route("/books", post(books::create_book))
        .route("/books/:id", get(books::get_book))
        .route("/checkout", put(books::checkout_book))
        .route("/return", put(books::return_book))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .merge(routes)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
