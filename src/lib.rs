//! Coulomb-field particle simulation core.
//!
//! A fixed set of point charges exerts an inverse-square force on a set of
//! mobile unit-mass test particles inside a rectangular domain. The engine
//! owns all state, advances it with explicit time steps, and hands out plain
//! value snapshots for an external renderer; there is no rendering, input
//! handling, or I/O in here.
//!
//! ```
//! use coulombsim::core::{SimConfig, Simulation};
//!
//! # fn main() -> coulombsim::error::Result<()> {
//! let config = SimConfig {
//!     n_particles: 150,
//!     n_charges: 3,
//!     charge_strength: 5000.0,
//!     charge_radius: 8.0,
//!     particle_radius: 3.0,
//! };
//! let mut sim = Simulation::new(600.0, 400.0, config, Some(42))?;
//! let states = sim.step(0.016)?;
//! assert_eq!(states.len(), 150);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod error;

pub use crate::core::{ChargeState, ParticleState, SimConfig, Simulation};
pub use crate::error::{Error, Result};
