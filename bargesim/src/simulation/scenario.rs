//! Build validated simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime `Scenario`
//! containing:
//! - engine settings (`Engine`)
//! - physical constants (`SystemParameters`)
//! - step size and duration (`SimulationConfig`)
//! - mass sweep settings (`Sweep`)
//!
//! A `Scenario` is immutable once built. Each call to `simulate` allocates
//! and returns its own result, so runs with different masses never share
//! state.

use log::info;

use crate::configuration::config::{ScenarioConfig, SweepConfig};
use crate::simulation::engine::{Engine, Stepping};
use crate::simulation::error::{Result, SimError};
use crate::simulation::integrator::{corrected_integrator, reference_integrator};
use crate::simulation::params::{SimulationConfig, StabilityThresholds, SystemParameters};
use crate::simulation::states::SimulationResult;

/// Displaced masses compared side by side, and how each run is sampled
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep {
    pub masses: Vec<f64>,
    pub distance_span: f64,
    pub sample_index: usize,
}

impl From<SweepConfig> for Sweep {
    fn from(cfg: SweepConfig) -> Self {
        Self {
            masses: cfg.masses,
            distance_span: cfg.distance_span,
            sample_index: cfg.sample_index,
        }
    }
}

impl Default for Sweep {
    fn default() -> Self {
        SweepConfig::default().into()
    }
}

#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: SystemParameters,
    pub config: SimulationConfig,
    pub sweep: Sweep,
}

impl Scenario {
    /// Validate the constants and timing, then bundle them into a scenario
    pub fn configure(parameters: SystemParameters, dt: f64, t_end: f64) -> Result<Self> {
        let config = SimulationConfig::new(dt, t_end);
        parameters.validate()?;
        config.validate()?;

        Ok(Self {
            engine: Engine::default(),
            parameters,
            config,
            sweep: Sweep::default(),
        })
    }

    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        // Physical constants from BargeConfig
        let b = cfg.barge;
        let parameters = SystemParameters {
            g: b.g,
            damping: b.damping,
            inertia: b.inertia,
            mtot: b.mtot,
            m: b.m,
            m1: b.m1,
            m2: b.m2,
            d: b.d,
            width: b.width,
            h1: b.h1,
            h2: b.h2,
            h3: b.h3,
            rho_water: b.rho_water,
        };

        let mut scenario = Self::configure(parameters, cfg.parameters.dt, cfg.parameters.t_end)?;

        // Engine (runtime) from EngineConfig
        scenario.engine = Engine {
            stepping: cfg.engine.stepping.into(),
        };

        scenario.sweep = cfg.sweep.into();

        info!(
            "scenario: {:?} stepping, dt = {} s, t_end = {} s, {} samples, hc = {:.5} m",
            scenario.engine.stepping,
            scenario.config.dt,
            scenario.config.t_end,
            scenario.config.n_samples(),
            scenario.parameters.hc()
        );

        Ok(scenario)
    }

    /// Switch the stepping order
    pub fn with_stepping(mut self, stepping: Stepping) -> Self {
        self.engine.stepping = stepping;
        self
    }

    pub fn thresholds(&self) -> StabilityThresholds {
        self.parameters.thresholds()
    }

    /// Run one full integration for displaced mass `m`
    pub fn simulate(&self, m: f64) -> Result<SimulationResult> {
        if !m.is_finite() {
            return Err(SimError::NonFiniteMass(m));
        }

        let series = match self.engine.stepping {
            Stepping::Reference => reference_integrator(&self.parameters, &self.config, m),
            Stepping::Corrected => corrected_integrator(&self.parameters, &self.config, m),
        };

        Ok(SimulationResult {
            series,
            thresholds: self.thresholds(),
        })
    }

    /// Run with the displaced mass stored in the parameters
    pub fn simulate_default(&self) -> Result<SimulationResult> {
        self.simulate(self.parameters.m)
    }

    /// One independent run per sweep mass, in sweep order
    pub fn simulate_sweep(&self) -> Result<Vec<SimulationResult>> {
        self.sweep.masses.iter().map(|&m| self.simulate(m)).collect()
    }
}
