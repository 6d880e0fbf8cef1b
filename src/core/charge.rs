use crate::core::DIM;
use crate::error::{Error, Result};

/// A fixed point source of electrostatic force.
///
/// Position and signed magnitude are immutable after creation; the engine
/// owns all charges exclusively and never mutates or removes them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Charge {
    /// Position (x, y) in domain coordinates.
    pub r: [f64; DIM],
    /// Signed magnitude; positive repels particles, negative attracts.
    pub q: f64,
}

impl Charge {
    /// Create a new charge after validating invariants.
    ///
    /// Errors with `Error::InvalidConfig` if any component is NaN/inf or the
    /// magnitude is zero (a zero charge exerts no force and is almost
    /// certainly a caller mistake).
    pub fn new(r: [f64; DIM], q: f64) -> Result<Self> {
        if !r.iter().all(|x| x.is_finite()) {
            return Err(Error::InvalidConfig("charge position must be finite".into()));
        }
        if !q.is_finite() || q == 0.0 {
            return Err(Error::InvalidConfig(
                "charge magnitude must be finite and nonzero".into(),
            ));
        }
        Ok(Self { r, q })
    }
}

/// Immutable per-charge snapshot handed to the renderer.
///
/// Charges never change after construction, so callers may fetch this once
/// and cache it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargeState {
    pub x: f64,
    pub y: f64,
    /// Signed magnitude as passed at creation.
    pub q: f64,
}

impl From<&Charge> for ChargeState {
    fn from(c: &Charge) -> Self {
        Self {
            x: c.r[0],
            y: c.r[1],
            q: c.q,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_charge_ok() -> Result<()> {
        let c = Charge::new([3.0, 4.0], -1.0)?;
        assert_eq!(c.r, [3.0, 4.0]);
        assert_eq!(c.q, -1.0);
        Ok(())
    }

    #[test]
    fn zero_magnitude_rejected() {
        let err = Charge::new([0.0, 0.0], 0.0).unwrap_err();
        assert!(err.to_string().contains("magnitude"));
    }

    #[test]
    fn non_finite_position_rejected() {
        let err = Charge::new([f64::INFINITY, 0.0], 1.0).unwrap_err();
        assert!(err.to_string().contains("position"));
    }

    #[test]
    fn state_snapshot_matches() -> Result<()> {
        let c = Charge::new([1.5, 2.5], 1.0)?;
        let s = ChargeState::from(&c);
        assert_eq!((s.x, s.y, s.q), (1.5, 2.5, 1.0));
        Ok(())
    }
}
