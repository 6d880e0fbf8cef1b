use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the simulation core.
///
/// Both variants are synchronous and reported immediately to the caller;
/// the engine performs no internal retries. Once a `Simulation` has been
/// constructed with valid parameters, `step` and the query methods cannot
/// drive it into an invalid state (the force-law epsilon floor keeps every
/// position and energy finite), so these two variants are the complete
/// failure surface.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid construction parameter: non-positive domain dimensions,
    /// non-finite config values, or a degenerate field-grid resolution.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Non-positive or non-finite time step passed to `step`.
    #[error("invalid timestep: {0}")]
    InvalidTimestep(String),
}
