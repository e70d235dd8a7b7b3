//! Physical and numerical parameters for the barge simulation
//!
//! `SystemParameters` holds the barge/crane geometry and masses,
//! `SimulationConfig` holds the fixed step size and end time.
//! Both default to the reference scenario (0.6 m square base, 5 kg total,
//! 0.4 kg load moved 0.85 m, 20 s at 10 ms steps).

use super::error::{Result, SimError};

/// Density of fresh water [kg/m^3]
pub const RHO_WATER: f64 = 997.0;

/// Immutable physical constants for one run
#[derive(Debug, Clone, PartialEq)]
pub struct SystemParameters {
    pub g: f64,         // gravitational acceleration [m/s^2]
    pub damping: f64,   // damping coefficient D
    pub inertia: f64,   // moment of inertia I [kg.m^2]
    pub mtot: f64,      // total mass [kg]
    pub m: f64,         // displaced mass used when no override is given [kg]
    pub m1: f64,        // barge mass [kg]
    pub m2: f64,        // crane mass [kg]
    pub d: f64,         // lever distance of the displaced load [m]
    pub width: f64,     // side L of the square base [m]
    pub h1: f64,        // base height [m]
    pub h2: f64,        // load height [m]
    pub h3: f64,        // carried-mass height [m]
    pub rho_water: f64, // water density [kg/m^3]
}

impl Default for SystemParameters {
    fn default() -> Self {
        Self {
            g: 9.81,
            damping: 10.0,
            inertia: 6.596,
            mtot: 5.0,
            m: 0.4,
            m1: 3.0,
            m2: 1.5,
            d: 0.85,
            width: 0.6,
            h1: 0.15,
            h2: 0.5,
            h3: 0.1,
            rho_water: RHO_WATER,
        }
    }
}

impl SystemParameters {
    /// Submersion depth of the base at rest: hc = mtot / (L^2 * rho)
    pub fn hc(&self) -> f64 {
        self.mtot / (self.width * self.width * self.rho_water)
    }

    /// Tilt at which a corner of the base goes under: atan(2 (h1 - hc) / L)
    pub fn angle_max(&self) -> f64 {
        (2.0 * (self.h1 - self.hc()) / self.width).atan()
    }

    /// Tilt at which the opposite corner leaves the water: atan(2 hc / L)
    pub fn angle_lift(&self) -> f64 {
        (2.0 * self.hc() / self.width).atan()
    }

    /// Both thresholds at once
    pub fn thresholds(&self) -> StabilityThresholds {
        StabilityThresholds {
            angle_max: self.angle_max(),
            angle_lift: self.angle_lift(),
        }
    }

    /// Reject constants that cannot describe a floating body.
    ///
    /// Only the domain of each constant is checked. A geometry that makes the
    /// barge sink (hc > h1) is still accepted and simply yields a negative
    /// submersion angle.
    pub fn validate(&self) -> Result<()> {
        let all = [
            ("g", self.g),
            ("damping", self.damping),
            ("inertia", self.inertia),
            ("mtot", self.mtot),
            ("m", self.m),
            ("m1", self.m1),
            ("m2", self.m2),
            ("d", self.d),
            ("width", self.width),
            ("h1", self.h1),
            ("h2", self.h2),
            ("h3", self.h3),
            ("rho_water", self.rho_water),
        ];
        for (name, value) in all {
            if !value.is_finite() {
                return Err(SimError::invalid_parameter(name, value));
            }
        }

        let positive = [
            ("g", self.g),
            ("inertia", self.inertia),
            ("mtot", self.mtot),
            ("width", self.width),
            ("rho_water", self.rho_water),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(SimError::invalid_parameter(name, value));
            }
        }

        if self.damping < 0.0 {
            return Err(SimError::invalid_parameter("damping", self.damping));
        }

        Ok(())
    }
}

/// Tilt angles [rad] marking the edges of the stable region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilityThresholds {
    pub angle_max: f64,  // submersion
    pub angle_lift: f64, // lift-off
}

/// Upper bound on samples per run; ten series of this length is under 1 GB
pub const MAX_SAMPLES: usize = 10_000_000;

/// Fixed-step timing of a run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub dt: f64,    // step size [s]
    pub t_end: f64, // duration [s]
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            dt: 0.01,
            t_end: 20.0,
        }
    }
}

impl SimulationConfig {
    pub fn new(dt: f64, t_end: f64) -> Self {
        Self { dt, t_end }
    }

    /// Number of samples N = ceil(t_end / dt), index 0 being t = 0
    pub fn n_samples(&self) -> usize {
        (self.t_end / self.dt).ceil() as usize
    }

    /// Sample times i * dt for i in 0..N
    pub fn time_axis(&self) -> Vec<f64> {
        (0..self.n_samples()).map(|i| i as f64 * self.dt).collect()
    }

    pub fn validate(&self) -> Result<()> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SimError::InvalidTimestep(self.dt));
        }
        if !self.t_end.is_finite() || self.t_end <= 0.0 {
            return Err(SimError::InvalidDuration(self.t_end));
        }

        // steps too small for the duration overflow the sample buffers
        let ratio = self.t_end / self.dt;
        if !ratio.is_finite() || ratio.ceil() > MAX_SAMPLES as f64 {
            return Err(SimError::InvalidTimestep(self.dt));
        }
        Ok(())
    }
}
