//! Error types for scenario construction and simulation runs.

use thiserror::Error;

/// Result type alias for simulation operations.
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors raised while validating a scenario before it is integrated.
///
/// Numeric-domain failures inside a run (hc = 0, cos(angle) = 0) are not
/// errors: they surface as non-finite samples in the returned series.
#[derive(Debug, Error)]
pub enum SimError {
    /// Time step is zero, negative or non-finite.
    #[error("invalid time step: {0}")]
    InvalidTimestep(f64),

    /// Simulation end time is zero, negative or non-finite.
    #[error("invalid duration: {0}")]
    InvalidDuration(f64),

    /// A physical constant is outside its admissible range.
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Displaced mass handed to `simulate` is NaN or infinite.
    #[error("displaced mass must be finite, got {0}")]
    NonFiniteMass(f64),
}

impl SimError {
    /// Create an invalid parameter error.
    #[must_use]
    pub const fn invalid_parameter(name: &'static str, value: f64) -> Self {
        Self::InvalidParameter { name, value }
    }
}
