//! Core simulation data structures and the stepping engine.
//!
//! The module is split by lifecycle: [`Charge`] is immutable after
//! construction, [`Particle`] mutates every step, [`SimConfig`] is validated
//! once, and [`Simulation`] ties them together behind the stepping and query
//! surface.

pub mod charge;
pub mod config;
pub mod particle;
pub mod sim;

pub use charge::{Charge, ChargeState};
pub use config::SimConfig;
pub use particle::{Particle, ParticleState};
pub use sim::Simulation;

/// Fixed spatial dimension (2D domain).
pub const DIM: usize = 2;
