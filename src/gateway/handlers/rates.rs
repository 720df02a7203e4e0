//! Exchange-rate table handlers

use std::collections::HashMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};

use super::super::state::AppState;
use super::super::types::ApiError;
use crate::models::ExchangeRate;

/// List exchange-rate tables, or fetch one by base currency
///
/// GET /api/exchange-rates returns the full set; with ?base=USD the single
/// matching table is returned (404 when the base is unknown).
#[utoipa::path(
    get,
    path = "/api/exchange-rates",
    params(
        ("base" = Option<String>, Query, description = "Base currency code, e.g. USD")
    ),
    responses(
        (status = 200, description = "All tables, or the single table for the requested base", body = [ExchangeRate]),
        (status = 404, description = "No table for the requested base")
    ),
    tag = "Exchange Rates"
)]
pub async fn list_exchange_rates(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    match params.get("base") {
        Some(base) => {
            let rate = state.store.exchange_rate_by_base(base).await.ok_or_else(|| {
                ApiError::not_found("Exchange rate not found for the specified base currency")
            })?;
            Ok(Json(rate).into_response())
        }
        None => Ok(Json(state.store.exchange_rates().await).into_response()),
    }
}
