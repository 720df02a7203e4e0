//! News handlers

use std::collections::HashMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use validator::Validate;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiJson, ApiResult, parse_id};
use crate::models::{NewNewsItem, NewsItem, NewsItemPatch};

/// List news, newest first
///
/// GET /api/news?category=crypto
#[utoipa::path(
    get,
    path = "/api/news",
    params(
        ("category" = Option<String>, Query, description = "Filter by category, e.g. crypto, digitalBanking, currencies")
    ),
    responses(
        (status = 200, description = "News items, newest first", body = [NewsItem])
    ),
    tag = "News"
)]
pub async fn list_news(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Vec<NewsItem>> {
    match params.get("category") {
        Some(category) => Ok(Json(state.store.news_by_category(category).await)),
        None => Ok(Json(state.store.news().await)),
    }
}

/// Get a news item by id
///
/// GET /api/news/{id}
#[utoipa::path(
    get,
    path = "/api/news/{id}",
    params(("id" = u32, Path, description = "News item id")),
    responses(
        (status = 200, description = "The news item", body = NewsItem),
        (status = 400, description = "Non-integer id"),
        (status = 404, description = "No such item")
    ),
    tag = "News"
)]
pub async fn get_news_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<NewsItem> {
    let id = parse_id(&id)?;
    state
        .store
        .news_item(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("News item not found"))
}

/// Publish a news item
///
/// POST /api/news. The publish date defaults to now when absent.
#[utoipa::path(
    post,
    path = "/api/news",
    request_body = NewNewsItem,
    responses(
        (status = 201, description = "The created item", body = NewsItem),
        (status = 400, description = "Payload failed validation")
    ),
    tag = "News"
)]
pub async fn create_news(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<NewNewsItem>,
) -> Result<(StatusCode, Json<NewsItem>), ApiError> {
    payload.validate()?;
    let item = state.store.create_news_item(payload).await;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Partially update a news item
///
/// PATCH /api/news/{id}. The original publish date is kept unless the
/// body carries a new one.
#[utoipa::path(
    patch,
    path = "/api/news/{id}",
    params(("id" = u32, Path, description = "News item id")),
    request_body = NewsItemPatch,
    responses(
        (status = 200, description = "The updated item", body = NewsItem),
        (status = 400, description = "Malformed id or body"),
        (status = 404, description = "No such item")
    ),
    tag = "News"
)]
pub async fn update_news_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<NewsItemPatch>,
) -> ApiResult<NewsItem> {
    let id = parse_id(&id)?;
    patch.validate()?;
    state
        .store
        .update_news_item(id, patch)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("News item not found"))
}
