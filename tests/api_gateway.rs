//! End-to-end tests for the REST surface, driven over a real socket.

use std::sync::Arc;

use ratewatch::gateway::{build_router, state::AppState};
use ratewatch::store::{MemStore, seed};
use ratewatch::websocket::SubscriberRegistry;
use serde_json::{Value, json};

/// Spawn the full router on an ephemeral port and return its base URL.
async fn spawn_app() -> String {
    let store = Arc::new(MemStore::new());
    seed::populate(&store).await;
    let subscribers = Arc::new(SubscriberRegistry::new());
    let state = Arc::new(AppState::new(store, subscribers));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = build_router(state);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn currency_pairs_list_in_creation_order() {
    let base = spawn_app().await;
    let body: Value = reqwest::get(format!("{}/api/currency-pairs", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let pairs = body.as_array().unwrap();
    assert_eq!(pairs.len(), 4);
    let names: Vec<&str> = pairs.iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["USD/EUR", "EUR/USD", "BTC/USD", "ETH/USD"]);
    // rates are decimal strings on the wire
    assert_eq!(pairs[0]["rate"], "0.9134");
    assert_eq!(pairs[0]["type"], "fiat");
}

#[tokio::test]
async fn currency_pairs_filter_by_type() {
    let base = spawn_app().await;
    let body: Value = reqwest::get(format!("{}/api/currency-pairs?type=crypto", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let pairs = body.as_array().unwrap();
    assert_eq!(pairs.len(), 2);
    assert!(pairs.iter().all(|p| p["type"] == "crypto"));
}

#[tokio::test]
async fn currency_pairs_unknown_type_is_validation_error() {
    let base = spawn_app().await;
    let response = reqwest::get(format!("{}/api/currency-pairs?type=equity", base))
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Validation Error");
    assert!(body["details"].as_str().unwrap().contains("equity"));
}

#[tokio::test]
async fn currency_pair_get_by_id_and_error_paths() {
    let base = spawn_app().await;

    let found: Value = reqwest::get(format!("{}/api/currency-pairs/3", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(found["name"], "BTC/USD");

    let missing = reqwest::get(format!("{}/api/currency-pairs/999", base))
        .await
        .unwrap();
    assert_eq!(missing.status(), 404);
    let body: Value = missing.json().await.unwrap();
    assert_eq!(body["error"], "Currency pair not found");

    let malformed = reqwest::get(format!("{}/api/currency-pairs/abc", base))
        .await
        .unwrap();
    assert_eq!(malformed.status(), 400);
    let body: Value = malformed.json().await.unwrap();
    assert_eq!(body["error"], "Invalid ID");
}

#[tokio::test]
async fn currency_pair_patch_updates_rate_and_timestamp() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let before: Value = reqwest::get(format!("{}/api/currency-pairs/1", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let patched: Value = client
        .patch(format!("{}/api/currency-pairs/1", base))
        .json(&json!({"rate": "0.9200"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(patched["rate"], "0.9200");
    // untouched fields survive, timestamp is refreshed
    assert_eq!(patched["high24h"], before["high24h"]);
    assert_ne!(patched["updatedAt"], before["updatedAt"]);

    let missing = client
        .patch(format!("{}/api/currency-pairs/999", base))
        .json(&json!({"rate": "1.0000"}))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), 404);
}

#[tokio::test]
async fn digital_banks_list_and_get() {
    let base = spawn_app().await;

    let banks: Value = reqwest::get(format!("{}/api/digital-banks", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(banks.as_array().unwrap().len(), 3);

    let wise: Value = reqwest::get(format!("{}/api/digital-banks/1", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(wise["name"], "Wise");
    assert_eq!(wise["currencyRates"]["USD/EUR"], "0.9125");
    assert_eq!(wise["blackMarketRates"]["USD/LBP"], "89500");

    let missing = reqwest::get(format!("{}/api/digital-banks/9", base))
        .await
        .unwrap();
    assert_eq!(missing.status(), 404);
}

#[tokio::test]
async fn news_create_validates_and_defaults_publish_date() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let rejected = client
        .post(format!("{}/api/news", base))
        .json(&json!({
            "title": "ab",
            "content": "Long enough content for the check.",
            "summary": "Long enough summary.",
            "category": "crypto",
            "imageUrl": "/images/x.jpg"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(rejected.status(), 400);
    let body: Value = rejected.json().await.unwrap();
    assert_eq!(body["error"], "Validation Error");
    assert!(body["details"].as_str().unwrap().contains("title"));

    let created = client
        .post(format!("{}/api/news", base))
        .json(&json!({
            "title": "Dollar steadies after jobs report",
            "content": "The dollar held its ground after stronger-than-expected jobs data.",
            "summary": "Dollar steadies after stronger jobs data.",
            "category": "currencies",
            "imageUrl": "/images/dollar-news.jpg"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(created.status(), 201);
    let item: Value = created.json().await.unwrap();
    assert_eq!(item["id"], 4);
    assert!(item["publishedAt"].is_string());
}

#[tokio::test]
async fn news_update_preserves_publish_date() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let original: Value = reqwest::get(format!("{}/api/news/1", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let updated: Value = client
        .patch(format!("{}/api/news/1", base))
        .json(&json!({"title": "Bitcoin extends its rally"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(updated["title"], "Bitcoin extends its rally");
    assert_eq!(updated["publishedAt"], original["publishedAt"]);
}

#[tokio::test]
async fn news_filter_by_category() {
    let base = spawn_app().await;
    let body: Value = reqwest::get(format!("{}/api/news?category=crypto", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["category"], "crypto");

    let none: Value = reqwest::get(format!("{}/api/news?category=sports", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(none.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn notification_read_transition_is_idempotent() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let list: Value = reqwest::get(format!("{}/api/notifications", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list.as_array().unwrap().len(), 3);
    assert!(list.as_array().unwrap().iter().all(|n| n["read"] == false));

    let first: Value = client
        .patch(format!("{}/api/notifications/2/read", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(first["read"], true);

    let again = client
        .patch(format!("{}/api/notifications/2/read", base))
        .send()
        .await
        .unwrap();
    assert_eq!(again.status(), 200);
    let body: Value = again.json().await.unwrap();
    assert_eq!(body["read"], true);

    let missing = client
        .patch(format!("{}/api/notifications/99/read", base))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), 404);
}

#[tokio::test]
async fn exchange_rates_full_list_and_base_lookup() {
    let base = spawn_app().await;

    let all: Value = reqwest::get(format!("{}/api/exchange-rates", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all.as_array().unwrap().len(), 5);

    let usd: Value = reqwest::get(format!("{}/api/exchange-rates?base=USD", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(usd["baseCurrency"], "USD");
    assert_eq!(usd["rates"]["EUR"], "0.9134");

    let unknown = reqwest::get(format!("{}/api/exchange-rates?base=XAU", base))
        .await
        .unwrap();
    assert_eq!(unknown.status(), 404);
}

#[tokio::test]
async fn health_reports_ok() {
    let base = spawn_app().await;
    let body: Value = reqwest::get(format!("{}/api/health", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp_ms"].is_u64());
}
