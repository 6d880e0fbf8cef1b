use crate::core::{Charge, ChargeState, Particle, ParticleState, SimConfig, DIM};
use crate::error::{Error, Result};
use rand::{rng, rngs::StdRng, Rng, SeedableRng};

/// Floor on squared charge-particle distance, in domain-coordinate units.
///
/// Prevents the inverse-square law from blowing up when a particle sits on
/// (or numerically coincides with) a charge; with the floor in place every
/// force, position, and energy stays finite for any dt > 0.
const EPS_DIST_SQ: f64 = 1e-6;

/// Simulation domain: rectangular region `[0, width] x [0, height]` with
/// elastic walls.
///
/// The engine owns a fixed-cardinality set of charges and particles. Both
/// sequences keep their construction order for the engine's entire lifetime;
/// the i-th entry of every snapshot refers to the same physical object across
/// all calls, which is what path-trail renderers index on.
#[derive(Debug)]
pub struct Simulation {
    width: f64,
    height: f64,
    config: SimConfig,
    /// Fixed charges in construction order. Public for scenario setup;
    /// renderers should read [`Simulation::charge_states`] instead.
    pub charges: Vec<Charge>,
    /// Mobile particles in construction order; index i is stable for the
    /// engine's lifetime.
    pub particles: Vec<Particle>,
}

impl Simulation {
    /// Create a new simulation with `config.n_charges` fixed charges and
    /// `config.n_particles` particles at rest, all placed uniformly at
    /// random inside the `width x height` domain.
    ///
    /// Charge polarity: each charge's magnitude is +1 or -1, drawn uniformly
    /// at random; `config.charge_strength` scales the force at evaluation
    /// time rather than being baked into the magnitude.
    ///
    /// `seed`: `Some` gives a reproducible layout, `None` seeds from the
    /// ambient generator. Construction is the only place randomness is
    /// consumed; `step` is fully deterministic afterwards.
    pub fn new(
        width: f64,
        height: f64,
        config: SimConfig,
        seed: Option<u64>,
    ) -> Result<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(Error::InvalidConfig("width must be finite and > 0".into()));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(Error::InvalidConfig("height must be finite and > 0".into()));
        }
        config.validate()?;

        let mut rng: StdRng = match seed {
            Some(s) => SeedableRng::seed_from_u64(s),
            None => SeedableRng::seed_from_u64(rng().random()),
        };

        let mut charges: Vec<Charge> = Vec::with_capacity(config.n_charges);
        for _ in 0..config.n_charges {
            let r = [
                rng.random_range(0.0..=width),
                rng.random_range(0.0..=height),
            ];
            let q = if rng.random::<bool>() { 1.0 } else { -1.0 };
            charges.push(Charge::new(r, q)?);
        }

        let mut particles: Vec<Particle> = Vec::with_capacity(config.n_particles);
        for _ in 0..config.n_particles {
            let r = [
                rng.random_range(0.0..=width),
                rng.random_range(0.0..=height),
            ];
            particles.push(Particle::new(r)?);
        }

        log::debug!(
            "simulation created: {}x{} domain, {} charges, {} particles",
            width,
            height,
            charges.len(),
            particles.len()
        );

        Ok(Self {
            width,
            height,
            config,
            charges,
            particles,
        })
    }

    /// Domain width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Domain height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The configuration as passed at construction, radii included verbatim.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Number of particles.
    pub fn num_particles(&self) -> usize {
        self.particles.len()
    }

    /// Number of charges.
    pub fn num_charges(&self) -> usize {
        self.charges.len()
    }

    /// Advance every particle by `dt` using semi-implicit Euler with unit
    /// mass, then apply the elastic-wall boundary.
    ///
    /// For each particle the net force is the sum over all charges of
    /// `charge_strength * q / max(d^2, eps)` along the unit vector from the
    /// charge to the particle, so positive charges repel and negative ones
    /// attract. Velocity integrates first (`v += F dt`), position second
    /// (`r += v dt`). A particle that would leave the domain is clamped to
    /// the wall and has that velocity component negated.
    ///
    /// Returns the full updated particle list in stable order. Errors with
    /// `Error::InvalidTimestep` when `dt` is NaN, infinite, or <= 0, in
    /// which case no particle moves.
    pub fn step(&mut self, dt: f64) -> Result<Vec<ParticleState>> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(Error::InvalidTimestep(format!(
                "dt must be finite and > 0, got {dt}"
            )));
        }

        // Gather forces before integrating so the update is atomic: every
        // particle sees the same pre-step charge geometry (charges are fixed
        // anyway, but this also keeps the loop trivially order-independent).
        let forces: Vec<[f64; DIM]> = self
            .particles
            .iter()
            .map(|p| self.net_force(p.r))
            .collect();

        for (p, f) in self.particles.iter_mut().zip(&forces) {
            for k in 0..DIM {
                p.v[k] += f[k] * dt;
                p.r[k] += p.v[k] * dt;
            }
            reflect_into(&mut p.r[0], &mut p.v[0], self.width);
            reflect_into(&mut p.r[1], &mut p.v[1], self.height);
        }

        Ok(self.particle_states())
    }

    /// Per-particle snapshots (position and kinetic-energy proxy) in stable
    /// order. Read-only, O(n_particles).
    pub fn particle_states(&self) -> Vec<ParticleState> {
        self.particles.iter().map(ParticleState::from).collect()
    }

    /// Per-charge snapshots (position and signed magnitude) in stable order.
    /// Charges never change after construction, so callers may cache this.
    pub fn charge_states(&self) -> Vec<ChargeState> {
        self.charges.iter().map(ChargeState::from).collect()
    }

    /// Total kinetic energy over all particles (diagnostic).
    pub fn kinetic_energy(&self) -> f64 {
        self.particles.iter().map(|p| p.kinetic_energy()).sum()
    }

    /// Net electric-field vector at an arbitrary point.
    ///
    /// This is exactly the force a unit-mass, unit-positive test particle
    /// would feel at that point, epsilon floor included, so probing the
    /// field and stepping a particle agree by construction.
    pub fn field_at(&self, x: f64, y: f64) -> [f64; DIM] {
        self.net_force([x, y])
    }

    /// Sample the field at the centers of an `nx x ny` lattice covering the
    /// domain, row-major (y-major: all of row j = 0 first).
    ///
    /// Errors with `Error::InvalidConfig` when either count is zero.
    pub fn field_grid(&self, nx: usize, ny: usize) -> Result<Vec<[f64; DIM]>> {
        if nx == 0 || ny == 0 {
            return Err(Error::InvalidConfig(
                "field grid resolution must be at least 1x1".into(),
            ));
        }
        let dx = self.width / nx as f64;
        let dy = self.height / ny as f64;
        let mut out = Vec::with_capacity(nx * ny);
        for j in 0..ny {
            let py = (j as f64 + 0.5) * dy;
            for i in 0..nx {
                let px = (i as f64 + 0.5) * dx;
                out.push(self.net_force([px, py]));
            }
        }
        Ok(out)
    }

    // ============ Internal helpers ============

    /// Coulomb force on a unit-positive test particle at `point`, summed
    /// over all charges.
    fn net_force(&self, point: [f64; DIM]) -> [f64; DIM] {
        let k = self.config.charge_strength;
        let mut total = [0.0_f64; DIM];
        for c in &self.charges {
            let mut d = [0.0_f64; DIM];
            for (k_ax, d_k) in d.iter_mut().enumerate() {
                *d_k = point[k_ax] - c.r[k_ax];
            }
            let dist_sq = dot(&d, &d).max(EPS_DIST_SQ);
            let dist = dist_sq.sqrt();
            // k * q / d^2 along the unit vector charge -> particle. When the
            // particle sits exactly on the charge, d is the zero vector and
            // the contribution vanishes instead of blowing up.
            let f_mag = k * c.q / dist_sq;
            for (k_ax, &d_k) in d.iter().enumerate() {
                total[k_ax] += f_mag * d_k / dist;
            }
        }
        total
    }
}

// ============ Utility helpers ============

#[inline]
fn dot(a: &[f64; DIM], b: &[f64; DIM]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Elastic wall on one axis: clamp the coordinate into `[0, extent]` and
/// negate the velocity component when a clamp fires.
#[inline]
fn reflect_into(x: &mut f64, v: &mut f64, extent: f64) {
    if *x < 0.0 {
        *x = 0.0;
        *v = -*v;
    } else if *x > extent {
        *x = extent;
        *v = -*v;
    }
}
