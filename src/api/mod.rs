//! API handlers for the library REST endpoints

pub mod books;
pub mod extract;
pub mod health;
pub mod openapi;
pub mod people;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/health", get(health::health_check))
        // People
        .route(
            "/people",
            get(people::list_people)
                .post(people::create_person)
                .put(people::update_person),
        )
        .route(
            "/people/:id",
            get(people::get_person).delete(people::delete_person),
        )
        // Books of a person
        .route(
            "/people/:id/books",
            get(books::list_person_books)
                .post(books::create_book)
                .delete(books::delete_person_books),
        )
        // Books
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .route("/books_range", get(books::books_in_range))
        .with_state(state);

    Router::new()
        .nest("/api", api)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
