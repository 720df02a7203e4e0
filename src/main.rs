//! RateWatch server entry point.
//!
//! Boot order: config, logging, seeded store, rate simulator, gateway.
//! Ctrl-C drains the server first, then stops the simulator.

use std::sync::Arc;
use std::time::Duration;

use ratewatch::config::AppConfig;
use ratewatch::gateway::{self, state::AppState};
use ratewatch::logging;
use ratewatch::market;
use ratewatch::store::{MemStore, seed};
use ratewatch::websocket::SubscriberRegistry;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env)?;
    let _guard = logging::init_logging(&config);

    let store = Arc::new(MemStore::new());
    seed::populate(&store).await;

    let subscribers = Arc::new(SubscriberRegistry::new());
    let simulator = market::spawn_simulator(
        store.clone(),
        subscribers.clone(),
        Duration::from_secs(config.market.tick_interval_secs),
    );

    let state = Arc::new(AppState::new(store, subscribers));
    let result = gateway::run_server(&config.gateway, state).await;

    simulator.shutdown().await;
    result
}
