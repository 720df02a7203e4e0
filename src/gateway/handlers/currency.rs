//! Currency pair handlers

use std::collections::HashMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};

use super::super::state::AppState;
use super::super::types::{ApiError, ApiJson, ApiResult, parse_id};
use crate::models::{CurrencyPair, CurrencyPairPatch, PairType};

/// List currency pairs
///
/// GET /api/currency-pairs?type=fiat|crypto
#[utoipa::path(
    get,
    path = "/api/currency-pairs",
    params(
        ("type" = Option<String>, Query, description = "Filter by classification: fiat or crypto")
    ),
    responses(
        (status = 200, description = "Currency pairs in creation order", body = [CurrencyPair]),
        (status = 400, description = "Unknown type value")
    ),
    tag = "Currency Pairs"
)]
pub async fn list_currency_pairs(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Vec<CurrencyPair>> {
    match params.get("type") {
        Some(raw) => {
            let pair_type = PairType::parse(raw).ok_or_else(|| {
                ApiError::validation(format!("Invalid type '{}'. Valid values: fiat, crypto", raw))
            })?;
            Ok(Json(state.store.currency_pairs_by_type(pair_type).await))
        }
        None => Ok(Json(state.store.currency_pairs().await)),
    }
}

/// Get a currency pair by id
///
/// GET /api/currency-pairs/{id}
#[utoipa::path(
    get,
    path = "/api/currency-pairs/{id}",
    params(("id" = u32, Path, description = "Currency pair id")),
    responses(
        (status = 200, description = "The currency pair", body = CurrencyPair),
        (status = 400, description = "Non-integer id"),
        (status = 404, description = "No such pair")
    ),
    tag = "Currency Pairs"
)]
pub async fn get_currency_pair(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<CurrencyPair> {
    let id = parse_id(&id)?;
    state
        .store
        .currency_pair(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Currency pair not found"))
}

/// Partially update a currency pair
///
/// PATCH /api/currency-pairs/{id}
#[utoipa::path(
    patch,
    path = "/api/currency-pairs/{id}",
    params(("id" = u32, Path, description = "Currency pair id")),
    request_body = CurrencyPairPatch,
    responses(
        (status = 200, description = "The updated pair", body = CurrencyPair),
        (status = 400, description = "Malformed id or body"),
        (status = 404, description = "No such pair")
    ),
    tag = "Currency Pairs"
)]
pub async fn update_currency_pair(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<CurrencyPairPatch>,
) -> ApiResult<CurrencyPair> {
    let id = parse_id(&id)?;
    let updated = state
        .store
        .update_currency_pair(id, patch)
        .await
        .ok_or_else(|| ApiError::not_found("Currency pair not found"))?;
    tracing::info!(pair_id = id, "manual currency pair update");
    Ok(Json(updated))
}
