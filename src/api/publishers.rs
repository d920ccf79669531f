//! Publisher API endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::{Publisher, PublisherPayload},
    AppState,
};

use super::{Payload, RecordId};

/// List all publishers
#[utoipa::path(
    get,
    path = "/publishers",
    tag = "publishers",
    responses(
        (status = 200, description = "Publisher list", body = Vec<Publisher>)
    )
)]
pub async fn list_publishers(State(state): State<AppState>) -> Json<Vec<Publisher>> {
    Json(state.services.publishers.list().await)
}

/// Get publisher by ID
#[utoipa::path(
    get,
    path = "/publishers/{id}",
    tag = "publishers",
    params(("id" = i64, Path, description = "Publisher ID")),
    responses(
        (status = 200, description = "Publisher details", body = Publisher),
        (status = 400, description = "Invalid publisher ID"),
        (status = 404, description = "Publisher not found")
    )
)]
pub async fn get_publisher(
    State(state): State<AppState>,
    RecordId(id, _): RecordId<Publisher>,
) -> AppResult<Json<Publisher>> {
    let publisher = state.services.publishers.get_by_id(id).await?;
    Ok(Json(publisher))
}

/// Create publisher
#[utoipa::path(
    post,
    path = "/publishers",
    tag = "publishers",
    request_body = PublisherPayload,
    responses(
        (status = 201, description = "Publisher created", body = Publisher),
        (status = 400, description = "Invalid request payload")
    )
)]
pub async fn create_publisher(
    State(state): State<AppState>,
    Payload(data): Payload<PublisherPayload>,
) -> (StatusCode, Json<Publisher>) {
    let publisher = state.services.publishers.create(data).await;
    (StatusCode::CREATED, Json(publisher))
}

/// Update publisher
#[utoipa::path(
    put,
    path = "/publishers/{id}",
    tag = "publishers",
    params(("id" = i64, Path, description = "Publisher ID")),
    request_body = PublisherPayload,
    responses(
        (status = 200, description = "Publisher updated", body = Publisher),
        (status = 400, description = "Invalid publisher ID or request payload"),
        (status = 404, description = "Publisher not found")
    )
)]
pub async fn update_publisher(
    State(state): State<AppState>,
    RecordId(id, _): RecordId<Publisher>,
    Payload(data): Payload<PublisherPayload>,
) -> AppResult<Json<Publisher>> {
    let publisher = state.services.publishers.update(id, data).await?;
    Ok(Json(publisher))
}

/// Delete publisher
#[utoipa::path(
    delete,
    path = "/publishers/{id}",
    tag = "publishers",
    params(("id" = i64, Path, description = "Publisher ID")),
    responses(
        (status = 204, description = "Publisher deleted"),
        (status = 400, description = "Invalid publisher ID"),
        (status = 404, description = "Publisher not found")
    )
)]
pub async fn delete_publisher(
    State(state): State<AppState>,
    RecordId(id, _): RecordId<Publisher>,
) -> AppResult<StatusCode> {
    state.services.publishers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
