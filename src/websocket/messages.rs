//! Push message types.

use serde::Serialize;

use crate::models::CurrencyTick;

/// A message pushed to connected subscribers.
///
/// Serialized as `{"type": "...", "data": ...}`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum WsMessage {
    /// Full currency pair snapshot emitted after an update tick.
    #[serde(rename = "CURRENCY_UPDATE")]
    CurrencyUpdate(Vec<CurrencyTick>),
}
