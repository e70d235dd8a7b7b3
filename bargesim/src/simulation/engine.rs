//! High-level runtime engine settings
//!
//! Selects the stepping order used when running a `Scenario`

use crate::configuration::config::SteppingConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stepping {
    /// Lagged torque bookkeeping; reproduces the reference trajectories
    #[default]
    Reference,
    /// Torques evaluated from the same step's angle
    Corrected,
}

impl From<SteppingConfig> for Stepping {
    fn from(cfg: SteppingConfig) -> Self {
        match cfg {
            SteppingConfig::Reference => Stepping::Reference,
            SteppingConfig::Corrected => Stepping::Corrected,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Engine {
    pub stepping: Stepping, // reference or corrected
}
