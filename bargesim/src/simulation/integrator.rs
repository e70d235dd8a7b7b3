//! Fixed-step time integrators for the barge tilt equation
//!
//!   I a'' + D a' = C(a)
//!
//! Both integrators are explicit first order and fill a fresh `TimeSeries`
//! of `config.n_samples()` samples. The angle decreases with positive
//! angular velocity: a[i+1] = a[i] - w[i] dt.

use log::{debug, warn};

use super::params::{SimulationConfig, SystemParameters};
use super::states::{NVec2, TimeSeries};
use super::torques::{
    buoyancy_center_x, gravity_center_x, lever_distance, overturning_torque, restoring_torque,
    TorqueSample,
};

/// Integrate with the reference bookkeeping order.
///
/// Torque terms computed from the angle at step i are stored at i + 1, but the
/// torque sum, overturning torque and center offset written at i + 1 read the
/// values already stored at i. The acceleration at i therefore sees torques
/// one or two steps old. Kept as is so results match the reference runs.
pub fn reference_integrator(p: &SystemParameters, config: &SimulationConfig, m: f64) -> TimeSeries {
    let mut s = TimeSeries::zeros(m, config.time_axis());
    let n = s.len();
    if n == 0 {
        return s;
    }

    let dt = config.dt;
    let weight = p.mtot * p.g;

    // Initial conditions: upright and at rest, full lever arm on the load
    s.overturning_torque[0] = overturning_torque(p, m, p.d);

    for i in 0..n - 1 {
        let a = s.angle[i];

        // Geometry at the current angle, stored one step ahead
        s.lever_distance[i + 1] = lever_distance(p, a);
        s.overturning_torque[i + 1] = overturning_torque(p, m, s.lever_distance[i]);

        s.buoyancy_center_x[i + 1] = buoyancy_center_x(p, a);
        s.gravity_center_x[i + 1] = gravity_center_x(p, a);

        // Offset, restoring torque and sum all read the previous slot
        s.center_offset[i + 1] = s.buoyancy_center_x[i] - s.gravity_center_x[i];
        s.restoring_torque[i + 1] = weight * s.center_offset[i].abs();
        s.torque_sum[i + 1] = s.overturning_torque[i] + s.restoring_torque[i];

        // Euler step on (angle, velocity)
        s.angular_acceleration[i] = (s.torque_sum[i] - p.damping * s.angular_velocity[i]) / p.inertia;
        s.angular_velocity[i + 1] = s.angular_velocity[i] + s.angular_acceleration[i] * dt;
        s.angle[i + 1] = a - s.angular_velocity[i] * dt;

        // carried until the next iteration overwrites it
        s.angular_acceleration[i + 1] = s.angular_acceleration[i];
    }

    report(&s);
    s
}

/// Integrate with every torque evaluated from the current angle.
///
/// Same Euler update and sign convention as `reference_integrator`, without
/// the bookkeeping lag. Index 0 holds the torques at the upright state.
pub fn corrected_integrator(p: &SystemParameters, config: &SimulationConfig, m: f64) -> TimeSeries {
    let mut s = TimeSeries::zeros(m, config.time_axis());
    let n = s.len();
    let dt = config.dt;

    // state = (angle, velocity)
    let mut state = NVec2::zeros();

    for i in 0..n {
        let (a, w) = (state.x, state.y);
        let torque = TorqueSample::at(p, m, a);
        let acc = (torque.sum - p.damping * w) / p.inertia;

        s.angle[i] = a;
        s.angular_velocity[i] = w;
        s.angular_acceleration[i] = acc;
        s.torque_sum[i] = torque.sum;
        s.overturning_torque[i] = torque.overturning;
        s.restoring_torque[i] = torque.restoring;
        s.lever_distance[i] = torque.lever;
        s.buoyancy_center_x[i] = torque.buoyancy_x;
        s.gravity_center_x[i] = torque.gravity_x;
        s.center_offset[i] = torque.offset;

        // d/dt (angle, velocity) = (-w, acc)
        state += dt * NVec2::new(-w, acc);
    }

    report(&s);
    s
}

fn report(s: &TimeSeries) {
    debug!(
        "integrated m = {} kg over {} samples, final angle {:?} rad",
        s.m,
        s.len(),
        s.final_angle()
    );
    if !s.is_finite() {
        warn!("run with m = {} kg produced non-finite samples", s.m);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn reference_first_steps_by_hand() {
        let p = SystemParameters::default();
        let cfg = SimulationConfig::new(0.01, 0.05);
        let s = reference_integrator(&p, &cfg, 0.4);
        let c0 = -0.4 * 9.81 * 0.85;

        assert_eq!(s.len(), 5);
        // sum[1] = over[0] + rest[0]
        assert_relative_eq!(s.torque_sum[1], c0, epsilon = 1e-12);
        // over[1] reads lever[0] = 0
        assert_eq!(s.overturning_torque[1], 0.0);
        assert_eq!(s.angle[1], 0.0);
        assert_relative_eq!(s.angular_velocity[2], c0 / p.inertia * 0.01, epsilon = 1e-12);
        assert_eq!(s.torque_sum[2], 0.0);
        // last acceleration is carried over, not recomputed
        assert_eq!(s.angular_acceleration[4], s.angular_acceleration[3]);
    }

    #[test]
    fn corrected_starts_from_upright_torques() {
        let p = SystemParameters::default();
        let cfg = SimulationConfig::new(0.01, 0.05);
        let s = corrected_integrator(&p, &cfg, 0.4);
        let c0 = -0.4 * 9.81 * 0.85;

        assert_relative_eq!(s.torque_sum[0], c0, epsilon = 1e-12);
        assert_relative_eq!(s.angular_acceleration[0], c0 / p.inertia, epsilon = 1e-12);
        assert_eq!(s.angle[1], 0.0);
        assert_relative_eq!(s.angular_velocity[1], c0 / p.inertia * 0.01, epsilon = 1e-12);
        assert_relative_eq!(s.angle[2], -s.angular_velocity[1] * 0.01, epsilon = 1e-15);
    }

    #[test]
    fn single_sample_run_keeps_initial_state() {
        let p = SystemParameters::default();
        let cfg = SimulationConfig::new(1.0, 0.5);
        let s = reference_integrator(&p, &cfg, 2.0);
        assert_eq!(s.len(), 1);
        assert_eq!(s.angle[0], 0.0);
        assert_relative_eq!(s.overturning_torque[0], -2.0 * 9.81 * 0.85, epsilon = 1e-12);
    }
}
