use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use super::dto::{CreateTodo, UpdateTodo};
use crate::error::ApiError;
use crate::model::validate_title;
use crate::state::AppState;
use crate::store::StoreError;

// Ids are opaque to callers: anything that is not one of ours cannot match a
// record, so it is reported the same way as an unknown id.
fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::not_found())
}

fn log_failure(action: &str, e: &StoreError) {
    match e {
        StoreError::Backend(_) => tracing::error!("Error {} todo: {}", action, e),
        _ => tracing::debug!("Rejected {} todo: {}", action, e),
    }
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body?;
    validate_title(&body.title).map_err(ApiError::bad_request)?;

    let todo = state
        .store
        .create(&body.title, body.description.as_deref())
        .await
        .inspect_err(|e| log_failure("creating", e))?;

    tracing::info!(id = %todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let todos = state
        .store
        .list()
        .await
        .inspect_err(|e| log_failure("listing", e))?;

    Ok(Json(todos))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateTodo>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let Json(body) = body?;
    validate_title(&body.title).map_err(ApiError::bad_request)?;

    let todo = state
        .store
        .update(id, &body.title, body.description.as_deref())
        .await
        .inspect_err(|e| log_failure("updating", e))?;

    tracing::info!(%id, "updated todo");
    Ok(Json(todo))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;

    state
        .store
        .delete(id)
        .await
        .inspect_err(|e| log_failure("deleting", e))?;

    tracing::info!(%id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}
