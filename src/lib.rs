//! RateWatch - currency dashboard backend
//!
//! REST + WebSocket API server behind a currency/digital-bank comparison
//! dashboard.
//!
//! # Modules
//!
//! - [`models`] - Entity types (currency pairs, banks, news, notifications, rate tables)
//! - [`store`] - In-memory keyed-map repository with seed data
//! - [`market`] - Periodic rate update loop
//! - [`websocket`] - Push channel (subscriber registry + handler)
//! - [`gateway`] - HTTP routes, handlers and error envelope
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing setup

pub mod config;
pub mod gateway;
pub mod logging;
pub mod market;
pub mod models;
pub mod store;
pub mod websocket;

// Convenient re-exports at crate root
pub use config::AppConfig;
pub use gateway::state::AppState;
pub use market::{RateSimulator, SimulatorHandle, spawn_simulator};
pub use models::{
    CurrencyPair, CurrencyTick, DigitalBank, Direction, ExchangeRate, NewsItem, Notification,
    PairType,
};
pub use store::MemStore;
pub use websocket::{SubscriberRegistry, WsMessage};
