//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, people};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library API",
        version = "0.1.0",
        description = "People and their books"
    ),
    servers(
        (url = "/api", description = "API")
    ),
    paths(
        // Health
        health::health_check,
        // People
        people::list_people,
        people::get_person,
        people::create_person,
        people::update_person,
        people::delete_person,
        // Books
        books::list_person_books,
        books::get_book,
        books::books_in_range,
        books::create_book,
        books::update_book,
        books::delete_book,
        books::delete_person_books,
    ),
    components(
        schemas(
            crate::models::PersonDto,
            crate::models::BookDto,
            crate::models::BookRangeQuery,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "people", description = "People management"),
        (name = "books", description = "Books owned by people")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
