//! Health check endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;

/// Liveness report with the size of each store
#[derive(Serialize, ToSchema)]
pub struct StoreHealth {
    pub status: String,
    pub version: String,
    /// Books currently held in memory
    pub books: usize,
    /// Publishers currently held in memory
    pub publishers: usize,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up; record counts per store", body = StoreHealth)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<StoreHealth> {
    let services = &state.services;
    Json(StoreHealth {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        books: services.books.count().await,
        publishers: services.publishers.count().await,
    })
}
