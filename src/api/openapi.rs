//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, publishers};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Publisher Demo API",
        version = "1.0.0",
        description = "In-memory books and publishers REST API"
    ),
    servers(
        (url = "/api/publisher_demo", description = "Publisher demo API")
    ),
    paths(
        // Health
        health::health_check,
        // Publishers
        publishers::list_publishers,
        publishers::get_publisher,
        publishers::create_publisher,
        publishers::update_publisher,
        publishers::delete_publisher,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
    ),
    components(
        schemas(
            crate::models::Publisher,
            crate::models::PublisherPayload,
            crate::models::Book,
            crate::models::BookPayload,
            health::StoreHealth,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "publishers", description = "Publisher management"),
        (name = "books", description = "Book management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
