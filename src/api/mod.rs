//! API handlers for the publisher demo REST endpoints

pub mod books;
pub mod health;
pub mod openapi;
pub mod publishers;

use std::marker::PhantomData;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    routing::get,
    Router,
};
use serde::de::DeserializeOwned;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, models::Record, AppState};

/// Extractor for the `{id}` path parameter of a `T` resource.
///
/// Runs before the body is read, so an unparsable id wins over a bad body.
pub struct RecordId<T>(pub i64, PhantomData<fn() -> T>);

#[async_trait]
impl<S, T> FromRequestParts<S> for RecordId<T>
where
    S: Send + Sync,
    T: Record,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::invalid_id::<T>())?;

        raw.parse::<i64>()
            .map(|id| RecordId(id, PhantomData))
            .map_err(|_| AppError::invalid_id::<T>())
    }
}

/// JSON body extractor answering decode failures with a plain 400.
///
/// The `Content-Type` header is not inspected. Only the first JSON value of
/// the body is decoded and anything after it is ignored. A `null` body
/// yields `T::default()`.
pub struct Payload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!("Failed to read request body: {}", e);
            AppError::malformed_body()
        })?;

        let mut values = serde_json::Deserializer::from_slice(&body).into_iter::<Option<T>>();
        match values.next() {
            Some(Ok(value)) => Ok(Payload(value.unwrap_or_default())),
            Some(Err(e)) => {
                tracing::debug!("Error decoding request body: {}", e);
                Err(AppError::malformed_body())
            }
            None => {
                tracing::debug!("Empty request body");
                Err(AppError::malformed_body())
            }
        }
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/health", get(health::health_check))
        // Publishers
        .route(
            "/publishers",
            get(publishers::list_publishers).post(publishers::create_publisher),
        )
        .route(
            "/publishers/:id",
            get(publishers::get_publisher)
                .put(publishers::update_publisher)
                .delete(publishers::delete_publisher),
        )
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .with_state(state);

    Router::new()
        .nest("/api/publisher_demo", api)
        .merge(openapi::create_openapi_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}
