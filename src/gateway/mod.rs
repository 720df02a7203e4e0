//! HTTP gateway: routes, shared state and the server loop.

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, patch},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::GatewayConfig;
use crate::websocket::ws_handler;
use state::AppState;

/// Build the full application router.
///
/// Exposed separately from [`run_server`] so tests can drive the exact
/// production routing without binding a fixed port.
pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/currency-pairs", get(handlers::list_currency_pairs))
        .route(
            "/currency-pairs/{id}",
            get(handlers::get_currency_pair).patch(handlers::update_currency_pair),
        )
        .route("/digital-banks", get(handlers::list_digital_banks))
        .route("/digital-banks/{id}", get(handlers::get_digital_bank))
        .route("/news", get(handlers::list_news).post(handlers::create_news))
        .route(
            "/news/{id}",
            get(handlers::get_news_item).patch(handlers::update_news_item),
        )
        .route("/notifications", get(handlers::list_notifications))
        .route(
            "/notifications/{id}/read",
            patch(handlers::mark_notification_read),
        )
        .route("/exchange-rates", get(handlers::list_exchange_rates))
        .route("/health", get(handlers::health_check))
        // Push channel
        .route("/ws", get(ws_handler));

    Router::new()
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Bind and serve until Ctrl-C.
pub async fn run_server(config: &GatewayConfig, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("gateway listening on http://{}", addr);
    tracing::info!("websocket endpoint: ws://{}/api/ws", addr);
    tracing::info!("api docs: http://{}/docs", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutdown signal received");
    }
}
