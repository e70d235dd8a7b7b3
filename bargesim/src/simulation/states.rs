//! Output types of a simulation run.
//!
//! `TimeSeries` holds one fixed-length sample vector per quantity, all indexed
//! by the same step counter (index 0 = t = 0). `SimulationResult` bundles the
//! series with the stability thresholds of the scenario that produced it.

use nalgebra::Vector2;

use super::params::StabilityThresholds;

/// Phase-space point (angle, angular velocity)
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    pub m: f64,                            // displaced mass of this run [kg]
    pub t: Vec<f64>,                       // sample time [s]
    pub angle: Vec<f64>,                   // [rad]
    pub angular_velocity: Vec<f64>,        // [rad/s]
    pub angular_acceleration: Vec<f64>,    // [rad/s^2]
    pub torque_sum: Vec<f64>,              // [N.m]
    pub overturning_torque: Vec<f64>,      // [N.m]
    pub restoring_torque: Vec<f64>,        // [N.m]
    pub lever_distance: Vec<f64>,          // load-to-pivot horizontal offset [m]
    pub buoyancy_center_x: Vec<f64>,       // [m]
    pub gravity_center_x: Vec<f64>,        // [m]
    pub center_offset: Vec<f64>,           // buoyancy minus gravity center [m]
}

impl TimeSeries {
    /// Allocate `n` zeroed samples for every quantity
    pub fn zeros(m: f64, t: Vec<f64>) -> Self {
        let n = t.len();
        Self {
            m,
            t,
            angle: vec![0.0; n],
            angular_velocity: vec![0.0; n],
            angular_acceleration: vec![0.0; n],
            torque_sum: vec![0.0; n],
            overturning_torque: vec![0.0; n],
            restoring_torque: vec![0.0; n],
            lever_distance: vec![0.0; n],
            buoyancy_center_x: vec![0.0; n],
            gravity_center_x: vec![0.0; n],
            center_offset: vec![0.0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Trajectory in the (angle, velocity) plane
    pub fn phase_portrait(&self) -> Vec<NVec2> {
        self.angle
            .iter()
            .zip(&self.angular_velocity)
            .map(|(&a, &w)| NVec2::new(a, w))
            .collect()
    }

    /// Angle at the last sample, if any
    pub fn final_angle(&self) -> Option<f64> {
        self.angle.last().copied()
    }

    /// True when every sample of every quantity is finite
    pub fn is_finite(&self) -> bool {
        [
            &self.angle,
            &self.angular_velocity,
            &self.angular_acceleration,
            &self.torque_sum,
            &self.overturning_torque,
            &self.restoring_torque,
            &self.lever_distance,
            &self.buoyancy_center_x,
            &self.gravity_center_x,
            &self.center_offset,
        ]
        .iter()
        .all(|s| s.iter().all(|v| v.is_finite()))
    }
}

/// Everything a reporting layer needs from one run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub series: TimeSeries,
    pub thresholds: StabilityThresholds,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_allocates_matching_lengths() {
        let s = TimeSeries::zeros(1.0, vec![0.0, 0.1, 0.2]);
        assert_eq!(s.len(), 3);
        assert_eq!(s.center_offset.len(), 3);
        assert!(s.is_finite());
        assert_eq!(s.final_angle(), Some(0.0));
    }

    #[test]
    fn phase_portrait_pairs_angle_and_velocity() {
        let mut s = TimeSeries::zeros(0.0, vec![0.0, 1.0]);
        s.angle[1] = 0.5;
        s.angular_velocity[1] = -2.0;
        let p = s.phase_portrait();
        assert_eq!(p[1], NVec2::new(0.5, -2.0));
    }

    #[test]
    fn nan_sample_is_detected() {
        let mut s = TimeSeries::zeros(0.0, vec![0.0, 1.0]);
        s.buoyancy_center_x[1] = f64::NAN;
        assert!(!s.is_finite());
    }
}
