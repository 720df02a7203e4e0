//! Digital bank handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, parse_id};
use crate::models::DigitalBank;

/// List digital banks
///
/// GET /api/digital-banks
#[utoipa::path(
    get,
    path = "/api/digital-banks",
    responses(
        (status = 200, description = "All digital banks", body = [DigitalBank])
    ),
    tag = "Digital Banks"
)]
pub async fn list_digital_banks(State(state): State<Arc<AppState>>) -> ApiResult<Vec<DigitalBank>> {
    Ok(Json(state.store.digital_banks().await))
}

/// Get a digital bank by id
///
/// GET /api/digital-banks/{id}
#[utoipa::path(
    get,
    path = "/api/digital-banks/{id}",
    params(("id" = u32, Path, description = "Digital bank id")),
    responses(
        (status = 200, description = "The digital bank", body = DigitalBank),
        (status = 400, description = "Non-integer id"),
        (status = 404, description = "No such bank")
    ),
    tag = "Digital Banks"
)]
pub async fn get_digital_bank(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<DigitalBank> {
    let id = parse_id(&id)?;
    state
        .store
        .digital_bank(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Digital bank not found"))
}
