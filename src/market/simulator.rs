//! Periodic rate update loop.
//!
//! Every tick each stored currency pair's rate is perturbed by a small
//! random drift, derived fields are recomputed, the result is persisted,
//! and the full snapshot is fanned out to push-channel subscribers. The
//! "24h" fields are display fields overwritten on every tick; no rolling
//! window is tracked.

use rust_decimal::{Decimal, RoundingStrategy};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

use crate::models::{CurrencyPairPatch, CurrencyTick, Direction};
use crate::store::MemStore;
use crate::websocket::{SubscriberRegistry, WsMessage};

/// Maximum per-tick drift as a fraction of the current rate.
const DRIFT_RANGE: f64 = 0.003;

/// Source of the per-tick drift fraction.
///
/// The production implementation draws uniformly from ±[`DRIFT_RANGE`];
/// tests inject fixed fractions for reproducible arithmetic.
pub trait DriftSource: Send {
    /// A fraction of the current rate, expected within ±[`DRIFT_RANGE`].
    fn drift(&mut self) -> Decimal;
}

/// Uniform random drift in ±[`DRIFT_RANGE`].
#[derive(Debug, Default)]
pub struct UniformDrift;

impl UniformDrift {
    pub fn new() -> Self {
        Self
    }
}

impl DriftSource for UniformDrift {
    fn drift(&mut self) -> Decimal {
        use rand::Rng;
        let fraction = rand::thread_rng().gen_range(-DRIFT_RANGE..DRIFT_RANGE);
        Decimal::from_f64_retain(fraction).unwrap_or(Decimal::ZERO)
    }
}

fn round_dp(value: Decimal, dp: u32) -> Decimal {
    // midpoints round away from zero
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Simulates market movement for every stored currency pair.
pub struct RateSimulator<D: DriftSource> {
    store: Arc<MemStore>,
    subscribers: Arc<SubscriberRegistry>,
    drift: D,
}

impl<D: DriftSource> RateSimulator<D> {
    pub fn new(store: Arc<MemStore>, subscribers: Arc<SubscriberRegistry>, drift: D) -> Self {
        Self {
            store,
            subscribers,
            drift,
        }
    }

    /// Run one update tick over every pair and broadcast the snapshot.
    ///
    /// A pair that vanished between the read and the write is logged and
    /// skipped; the tick continues with the remaining pairs. Returns the
    /// broadcast snapshot.
    pub async fn tick(&mut self) -> Vec<CurrencyTick> {
        let pairs = self.store.currency_pairs().await;
        let mut ticks = Vec::with_capacity(pairs.len());

        for pair in pairs {
            let old_rate = pair.rate;
            let delta = old_rate * self.drift.drift();
            let new_rate = round_dp(old_rate + delta, 4);
            let change24h = round_dp(new_rate - old_rate, 4);
            let change_percent = if old_rate.is_zero() {
                Decimal::ZERO
            } else {
                round_dp(change24h / old_rate * Decimal::ONE_HUNDRED, 2)
            };

            let patch = CurrencyPairPatch {
                rate: Some(new_rate),
                change24h: Some(change24h),
                change_percent: Some(change_percent),
                ..Default::default()
            };
            match self.store.update_currency_pair(pair.id, patch).await {
                Some(updated) => ticks.push(CurrencyTick {
                    pair: updated,
                    direction: if delta >= Decimal::ZERO {
                        Direction::Up
                    } else {
                        Direction::Down
                    },
                }),
                None => {
                    tracing::error!(pair_id = pair.id, "pair missing during tick, skipping");
                }
            }
        }

        tracing::debug!(updated = ticks.len(), "currency rates updated");

        if !self.subscribers.is_empty() {
            let delivered = self.subscribers.publish(&WsMessage::CurrencyUpdate(ticks.clone()));
            tracing::debug!(delivered, "currency update broadcast");
        }

        ticks
    }
}

/// Handle to the running update loop.
///
/// Owns the background task; dropping the handle leaves the loop running
/// for the process lifetime, `shutdown().await` stops it cleanly.
pub struct SimulatorHandle {
    shutdown: Arc<Notify>,
    task: JoinHandle<()>,
}

impl SimulatorHandle {
    /// Stop the loop and wait for the task to wind down.
    pub async fn shutdown(self) {
        self.shutdown.notify_one();
        if let Err(e) = self.task.await {
            tracing::error!(error = %e, "simulator task failed during shutdown");
        }
    }
}

/// Spawn the update loop on the given cadence.
///
/// The first tick fires one full period after start. A tick that fails for
/// one pair keeps going; nothing cancels the timer but [`SimulatorHandle`].
pub fn spawn_simulator(
    store: Arc<MemStore>,
    subscribers: Arc<SubscriberRegistry>,
    period: Duration,
) -> SimulatorHandle {
    let shutdown = Arc::new(Notify::new());
    let stop = shutdown.clone();
    let mut simulator = RateSimulator::new(store, subscribers, UniformDrift::new());

    let task = tokio::spawn(async move {
        let mut ticker = time::interval_at(Instant::now() + period, period);
        tracing::info!(period_secs = period.as_secs_f64(), "rate simulator started");
        loop {
            tokio::select! {
                _ = stop.notified() => break,
                _ = ticker.tick() => {
                    simulator.tick().await;
                }
            }
        }
        tracing::info!("rate simulator stopped");
    });

    SimulatorHandle { shutdown, task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewCurrencyPair, PairType};
    use tokio::sync::mpsc;

    /// Replays a fixed sequence of drift fractions.
    struct FixedDrift(Vec<Decimal>);

    impl DriftSource for FixedDrift {
        fn drift(&mut self) -> Decimal {
            if self.0.is_empty() {
                Decimal::ZERO
            } else {
                self.0.remove(0)
            }
        }
    }

    async fn seed_usd_eur(store: &MemStore) {
        store
            .create_currency_pair(NewCurrencyPair {
                name: "USD/EUR".to_string(),
                base_currency: "USD".to_string(),
                quote_currency: "EUR".to_string(),
                rate: Decimal::new(9134, 4),
                change24h: Decimal::new(23, 4),
                change_percent: Decimal::new(25, 2),
                high24h: Decimal::new(9140, 4),
                low24h: Decimal::new(9111, 4),
                open24h: Decimal::new(9111, 4),
                pair_type: PairType::Fiat,
            })
            .await;
    }

    #[tokio::test]
    async fn tick_applies_fixed_drift_arithmetic() {
        let store = Arc::new(MemStore::new());
        seed_usd_eur(&store).await;
        let subscribers = Arc::new(SubscriberRegistry::new());
        let mut simulator = RateSimulator::new(
            store.clone(),
            subscribers,
            FixedDrift(vec![Decimal::new(12, 4)]), // +0.0012 of the rate
        );

        let ticks = simulator.tick().await;
        assert_eq!(ticks.len(), 1);
        let tick = &ticks[0];
        assert_eq!(tick.pair.rate, Decimal::new(9145, 4)); // 0.9145
        assert_eq!(tick.pair.change24h, Decimal::new(11, 4)); // 0.0011
        assert_eq!(tick.pair.change_percent, Decimal::new(12, 2)); // 0.12
        assert_eq!(tick.direction, Direction::Up);

        // persisted, not just snapshotted
        let stored = store.currency_pair(tick.pair.id).await.unwrap();
        assert_eq!(stored.rate, Decimal::new(9145, 4));
    }

    #[tokio::test]
    async fn negative_drift_points_down() {
        let store = Arc::new(MemStore::new());
        seed_usd_eur(&store).await;
        let subscribers = Arc::new(SubscriberRegistry::new());
        let mut simulator = RateSimulator::new(
            store,
            subscribers,
            FixedDrift(vec![Decimal::new(-12, 4)]),
        );

        let ticks = simulator.tick().await;
        assert_eq!(ticks[0].direction, Direction::Down);
        assert!(ticks[0].pair.change24h < Decimal::ZERO);
    }

    #[tokio::test]
    async fn broadcast_only_when_subscribed() {
        let store = Arc::new(MemStore::new());
        seed_usd_eur(&store).await;
        let subscribers = Arc::new(SubscriberRegistry::new());
        let mut simulator = RateSimulator::new(
            store.clone(),
            subscribers.clone(),
            FixedDrift(vec![Decimal::new(12, 4), Decimal::new(12, 4)]),
        );

        // no subscribers: store writes still happen, nothing is published
        let before = store.currency_pair(1).await.unwrap().rate;
        simulator.tick().await;
        assert_ne!(store.currency_pair(1).await.unwrap().rate, before);

        // one subscriber: exactly one message
        let (tx, mut rx) = mpsc::unbounded_channel();
        subscribers.subscribe(tx);
        simulator.tick().await;
        let message = rx.try_recv().expect("one broadcast expected");
        let WsMessage::CurrencyUpdate(data) = message;
        assert_eq!(data.len(), 1);
        assert!(rx.try_recv().is_err(), "exactly one message per tick");
    }

    #[tokio::test]
    async fn change_percent_matches_pre_tick_rate_over_many_ticks() {
        let store = Arc::new(MemStore::new());
        seed_usd_eur(&store).await;
        let subscribers = Arc::new(SubscriberRegistry::new());
        let drifts = vec![
            Decimal::new(25, 4),
            Decimal::new(-17, 4),
            Decimal::new(30, 4),
            Decimal::new(-29, 4),
            Decimal::new(8, 4),
        ];
        let mut simulator = RateSimulator::new(store.clone(), subscribers, FixedDrift(drifts));

        for _ in 0..5 {
            let before = store.currency_pair(1).await.unwrap().rate;
            let ticks = simulator.tick().await;
            let after = &ticks[0].pair;
            let expected =
                round_dp((after.rate - before) / before * Decimal::ONE_HUNDRED, 2);
            assert_eq!(after.change_percent, expected);
            assert_eq!(after.change24h, round_dp(after.rate - before, 4));
        }
    }

    #[tokio::test]
    async fn spawned_loop_ticks_and_shuts_down_cleanly() {
        let store = Arc::new(MemStore::new());
        seed_usd_eur(&store).await;
        let subscribers = Arc::new(SubscriberRegistry::new());
        let (tx, mut rx) = mpsc::unbounded_channel();
        subscribers.subscribe(tx);

        let handle = spawn_simulator(
            store.clone(),
            subscribers.clone(),
            Duration::from_millis(20),
        );
        let message = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("tick within timeout")
            .expect("channel open");
        let WsMessage::CurrencyUpdate(data) = message;
        assert_eq!(data.len(), 1);

        handle.shutdown().await;
    }
}
