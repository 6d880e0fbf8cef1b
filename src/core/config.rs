use crate::error::{Error, Result};

/// Simulation parameters supplied at construction.
///
/// `charge_radius` and `particle_radius` are presentation hints: the
/// renderer reads them back via [`crate::core::Simulation::config`], and the
/// physics never touches them. They are still validated as finite so a bad
/// value surfaces at construction rather than at draw time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    /// Number of mobile particles (fixed for the engine's lifetime).
    pub n_particles: usize,
    /// Number of fixed charges (fixed for the engine's lifetime).
    pub n_charges: usize,
    /// Force-scaling coefficient applied to every charge.
    pub charge_strength: f64,
    /// Visual radius of a charge, in domain units. Pass-through.
    pub charge_radius: f64,
    /// Visual radius of a particle, in domain units. Pass-through.
    pub particle_radius: f64,
}

impl SimConfig {
    /// Validate all scalar fields as finite and the radii as non-negative.
    ///
    /// Counts are `usize`, so non-negativity holds by type; zero counts are
    /// valid configurations (an empty sky is just a very quiet one).
    pub fn validate(&self) -> Result<()> {
        if !self.charge_strength.is_finite() {
            return Err(Error::InvalidConfig(
                "charge_strength must be finite".into(),
            ));
        }
        if !self.charge_radius.is_finite() || self.charge_radius < 0.0 {
            return Err(Error::InvalidConfig(
                "charge_radius must be finite and >= 0".into(),
            ));
        }
        if !self.particle_radius.is_finite() || self.particle_radius < 0.0 {
            return Err(Error::InvalidConfig(
                "particle_radius must be finite and >= 0".into(),
            ));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        // Defaults mirror a typical renderer setup: a handful of strong
        // charges and enough particles to trace the field lines.
        Self {
            n_particles: 150,
            n_charges: 3,
            charge_strength: 5000.0,
            charge_radius: 8.0,
            particle_radius: 3.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() -> Result<()> {
        SimConfig::default().validate()
    }

    #[test]
    fn zero_counts_are_valid() -> Result<()> {
        let cfg = SimConfig {
            n_particles: 0,
            n_charges: 0,
            ..SimConfig::default()
        };
        cfg.validate()
    }

    #[test]
    fn non_finite_strength_rejected() {
        let cfg = SimConfig {
            charge_strength: f64::NAN,
            ..SimConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("charge_strength"));
    }

    #[test]
    fn negative_radius_rejected() {
        let cfg = SimConfig {
            particle_radius: -1.0,
            ..SimConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("particle_radius"));
    }
}
