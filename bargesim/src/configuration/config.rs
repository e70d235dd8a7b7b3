//! Configuration types for loading barge scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – stepping order (reference or corrected)
//! - [`ParametersConfig`] – step size and duration
//! - [`BargeConfig`]      – physical constants of the barge, crane and load
//! - [`SweepConfig`]      – displaced masses compared in the sweep figure
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every field has a default matching the reference scenario, so a partial
//! file only needs the values it changes.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   stepping: "reference"   # or "corrected"
//!
//! parameters:
//!   dt: 0.01                # fixed step size [s]
//!   t_end: 20.0             # total simulation time [s]
//!
//! barge:
//!   g: 9.81
//!   damping: 10.0
//!   inertia: 6.596
//!   mtot: 5.0
//!   m: 0.4                  # displaced mass for single runs
//!   m1: 3.0
//!   m2: 1.5
//!   d: 0.85
//!   width: 0.6
//!   h1: 0.15
//!   h2: 0.5
//!   h3: 0.1
//!   rho_water: 997.0
//!
//! sweep:
//!   masses: [1.0, 2.0, 3.0, 4.0, 5.0]
//!   distance_span: 2.0
//!   sample_index: 20
//! ```

use serde::Deserialize;

use crate::simulation::params::{SimulationConfig, SystemParameters, RHO_WATER};

/// Which stepping order the engine uses
/// `stepping: "reference"` or `stepping: "corrected"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SteppingConfig {
    #[serde(rename = "reference")] // lagged torque bookkeeping, matches reference output
    #[default]
    Reference,

    #[serde(rename = "corrected")] // torques from the same step's angle
    Corrected,
}

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub stepping: SteppingConfig,
}

/// Numerical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub dt: f64,    // time step size
    pub t_end: f64, // time end
}

impl Default for ParametersConfig {
    fn default() -> Self {
        let sim = SimulationConfig::default();
        Self {
            dt: sim.dt,
            t_end: sim.t_end,
        }
    }
}

/// Physical constants of the barge-crane system
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct BargeConfig {
    pub g: f64,
    pub damping: f64,
    pub inertia: f64,
    pub mtot: f64,
    pub m: f64,
    pub m1: f64,
    pub m2: f64,
    pub d: f64,
    pub width: f64,
    pub h1: f64,
    pub h2: f64,
    pub h3: f64,
    pub rho_water: f64,
}

impl Default for BargeConfig {
    fn default() -> Self {
        let p = SystemParameters::default();
        Self {
            g: p.g,
            damping: p.damping,
            inertia: p.inertia,
            mtot: p.mtot,
            m: p.m,
            m1: p.m1,
            m2: p.m2,
            d: p.d,
            width: p.width,
            h1: p.h1,
            h2: p.h2,
            h3: p.h3,
            rho_water: RHO_WATER,
        }
    }
}

/// Masses compared in the angle-vs-distance figure
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SweepConfig {
    pub masses: Vec<f64>,    // displaced masses [kg]
    pub distance_span: f64,  // x extent of each segment [m]
    pub sample_index: usize, // which sample of the run gives the segment end
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            masses: vec![1.0, 2.0, 3.0, 4.0, 5.0],
            distance_span: 2.0,
            sample_index: 20,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,         // stepping order
    pub parameters: ParametersConfig, // step size and duration
    pub barge: BargeConfig,           // physical constants
    pub sweep: SweepConfig,           // mass sweep settings
}

impl ScenarioConfig {
    /// Parse a scenario from YAML text
    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}
