//! Entity types for the dashboard data set.
//!
//! All rate-bearing fields use [`Decimal`] so they serialize as JSON strings
//! and survive repeated read-modify-write cycles without float drift. Wire
//! field names are camelCase to match the dashboard client.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use validator::Validate;

/// Classification of a tradable pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PairType {
    Fiat,
    Crypto,
}

impl PairType {
    /// Parse the query-string form (`fiat` / `crypto`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "fiat" => Some(PairType::Fiat),
            "crypto" => Some(PairType::Crypto),
            _ => None,
        }
    }
}

/// A tradable currency-to-currency quote record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyPair {
    pub id: u32,
    /// Display name, e.g. "USD/EUR"
    pub name: String,
    pub base_currency: String,
    pub quote_currency: String,
    pub rate: Decimal,
    pub change24h: Decimal,
    pub change_percent: Decimal,
    pub high24h: Decimal,
    pub low24h: Decimal,
    pub open24h: Decimal,
    #[serde(rename = "type")]
    pub pair_type: PairType,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewCurrencyPair {
    pub name: String,
    pub base_currency: String,
    pub quote_currency: String,
    pub rate: Decimal,
    pub change24h: Decimal,
    pub change_percent: Decimal,
    pub high24h: Decimal,
    pub low24h: Decimal,
    pub open24h: Decimal,
    #[serde(rename = "type")]
    pub pair_type: PairType,
}

/// Partial update for a currency pair. Absent fields are left untouched;
/// `updatedAt` is stamped on every successful update regardless.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyPairPatch {
    pub name: Option<String>,
    pub base_currency: Option<String>,
    pub quote_currency: Option<String>,
    pub rate: Option<Decimal>,
    pub change24h: Option<Decimal>,
    pub change_percent: Option<Decimal>,
    pub high24h: Option<Decimal>,
    pub low24h: Option<Decimal>,
    pub open24h: Option<Decimal>,
    #[serde(rename = "type")]
    pub pair_type: Option<PairType>,
}

/// Tick direction, derived from the sign of the last drift. Display-only:
/// carried on broadcast snapshots, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// A currency pair snapshot as broadcast after an update tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyTick {
    #[serde(flatten)]
    pub pair: CurrencyPair,
    pub direction: Direction,
}

/// A digital bank comparison record. Purely descriptive display data; the
/// rate maps are open-ended and carried opaquely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DigitalBank {
    pub id: u32,
    pub name: String,
    pub website: String,
    pub logo_url: String,
    pub transfer_fees: String,
    pub exchange_rate: String,
    pub transfer_speed: String,
    pub supported_countries: String,
    pub currency_rates: BTreeMap<String, Decimal>,
    pub black_market_rates: BTreeMap<String, Decimal>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewDigitalBank {
    pub name: String,
    pub website: String,
    pub logo_url: String,
    pub transfer_fees: String,
    pub exchange_rate: String,
    pub transfer_speed: String,
    pub supported_countries: String,
    pub currency_rates: BTreeMap<String, Decimal>,
    pub black_market_rates: BTreeMap<String, Decimal>,
}

/// A published news article. `category` is matched by convention against
/// the client's filters (crypto / digitalBanking / currencies).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: u32,
    pub title: String,
    pub content: String,
    pub summary: String,
    pub category: String,
    pub image_url: String,
    pub published_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewNewsItem {
    #[validate(length(min = 3, message = "title must be at least 3 characters"))]
    pub title: String,
    #[validate(length(min = 10, message = "content must be at least 10 characters"))]
    pub content: String,
    #[validate(length(min = 10, message = "summary must be at least 10 characters"))]
    pub summary: String,
    pub category: String,
    pub image_url: String,
    /// Defaults to the creation instant when absent.
    pub published_at: Option<DateTime<Utc>>,
}

/// Partial update for a news item. The original publish timestamp is kept
/// unless `publishedAt` is supplied explicitly.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsItemPatch {
    #[validate(length(min = 3, message = "title must be at least 3 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 10, message = "content must be at least 10 characters"))]
    pub content: Option<String>,
    #[validate(length(min = 10, message = "summary must be at least 10 characters"))]
    pub summary: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

/// A user-facing notification. Created server-side; the only mutation is
/// the one-way unread -> read transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: u32,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub icon: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewNotification {
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub icon: String,
    #[serde(default)]
    pub read: bool,
}

/// A base-currency exchange-rate table for the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    pub id: u32,
    pub base_currency: String,
    pub rates: BTreeMap<String, Decimal>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewExchangeRate {
    pub base_currency: String,
    pub rates: BTreeMap<String, Decimal>,
}

/// Partial update for an exchange-rate table; `updatedAt` is stamped on
/// every successful update.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRatePatch {
    pub base_currency: Option<String>,
    pub rates: Option<BTreeMap<String, Decimal>>,
}
