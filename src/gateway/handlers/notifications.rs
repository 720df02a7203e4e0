//! Notification handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, parse_id};
use crate::models::Notification;

/// List notifications, newest first
///
/// GET /api/notifications
#[utoipa::path(
    get,
    path = "/api/notifications",
    responses(
        (status = 200, description = "Notifications, newest first", body = [Notification])
    ),
    tag = "Notifications"
)]
pub async fn list_notifications(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<Notification>> {
    Ok(Json(state.store.notifications().await))
}

/// Mark a notification read
///
/// PATCH /api/notifications/{id}/read. Idempotent: re-marking an
/// already-read notification succeeds.
#[utoipa::path(
    patch,
    path = "/api/notifications/{id}/read",
    params(("id" = u32, Path, description = "Notification id")),
    responses(
        (status = 200, description = "The notification, read", body = Notification),
        (status = 400, description = "Non-integer id"),
        (status = 404, description = "No such notification")
    ),
    tag = "Notifications"
)]
pub async fn mark_notification_read(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Notification> {
    let id = parse_id(&id)?;
    state
        .store
        .mark_notification_read(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Notification not found"))
}
