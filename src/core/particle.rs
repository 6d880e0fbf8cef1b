use crate::core::DIM;
use crate::error::{Error, Result};

/// A mobile unit-mass test particle.
///
/// Fields:
/// - `r`: position vector [x, y], mutated every step
/// - `v`: velocity vector [vx, vy], internal state exposed to consumers
///   only through the derived kinetic energy
///
/// All particles carry an implicit mass of 1, so force and acceleration
/// coincide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position (x, y).
    pub r: [f64; DIM],
    /// Velocity (vx, vy).
    pub v: [f64; DIM],
}

impl Particle {
    /// Create a new particle at rest after validating the position.
    pub fn new(r: [f64; DIM]) -> Result<Self> {
        if !r.iter().all(|x| x.is_finite()) {
            return Err(Error::InvalidConfig("particle position must be finite".into()));
        }
        Ok(Self { r, v: [0.0; DIM] })
    }

    /// Kinetic energy with unit mass: 1/2 |v|^2.
    ///
    /// This is the scalar renderers map to color; velocity itself is never
    /// part of any snapshot.
    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        let vsq: f64 = self.v.iter().map(|&c| c * c).sum();
        0.5 * vsq
    }
}

/// Per-particle snapshot handed to the renderer: position plus the
/// kinetic-energy proxy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleState {
    pub x: f64,
    pub y: f64,
    /// Kinetic energy 1/2 |v|^2 (unit mass).
    pub energy: f64,
}

impl From<&Particle> for ParticleState {
    fn from(p: &Particle) -> Self {
        Self {
            x: p.r[0],
            y: p.r[1],
            energy: p.kinetic_energy(),
        }
    }
}
