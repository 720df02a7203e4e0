//! Market movement simulation.

pub mod simulator;

pub use simulator::{DriftSource, RateSimulator, SimulatorHandle, UniformDrift, spawn_simulator};
