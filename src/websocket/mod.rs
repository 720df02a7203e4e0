//! WebSocket push channel for live currency updates.
//!
//! Delivery is best-effort: no buffering, no acknowledgment, no ordering
//! guarantee across subscribers. A slow or disconnected subscriber simply
//! misses messages.

pub mod connection;
pub mod handler;
pub mod messages;

pub use connection::{SubscriberId, SubscriberRegistry};
pub use handler::ws_handler;
pub use messages::WsMessage;
