//! Torque and hydrostatic geometry for the tilted barge
//!
//! Every function takes the tilt angle of the barge (rad) and the fixed
//! `SystemParameters`. The overturning torque comes from the displaced load,
//! the restoring torque from the horizontal gap between the center of
//! buoyancy and the center of gravity.

use super::params::SystemParameters;

/// Horizontal offset between the load and the pivot at tilt `angle`
///   lever = d cos(a) - h3 sin(a)
pub fn lever_distance(p: &SystemParameters, angle: f64) -> f64 {
    p.d * angle.cos() - p.h3 * angle.sin()
}

/// Moment of the displaced mass `m` acting on `lever` (negative = capsizing)
pub fn overturning_torque(p: &SystemParameters, m: f64, lever: f64) -> f64 {
    -m * p.g * lever
}

/// x coordinate of the center of buoyancy of the submerged box
///
/// For a square base of side L floating at depth hc:
///   xc = ((12 hc^2 - L^2) / (24 hc)) sin(a) - (L^2 / (24 hc cos(a))) tan(a)
/// Diverges when hc = 0 or cos(a) = 0.
pub fn buoyancy_center_x(p: &SystemParameters, angle: f64) -> f64 {
    let hc = p.hc();
    let l2 = p.width * p.width;

    // first term: rotation of the resting buoyancy center
    let rotated = ((12.0 * hc * hc - l2) / (24.0 * hc)) * angle.sin();

    // second term: shift of the submerged wedge towards the low side
    let wedge = (l2 / (24.0 * hc * angle.cos())) * angle.tan();

    rotated - wedge
}

/// x coordinate of the combined center of gravity of barge and crane
///   xg = ((m1 (h1/2 - hc) + m2 (h2 + h1 - hc)) / mtot) sin(a)
pub fn gravity_center_x(p: &SystemParameters, angle: f64) -> f64 {
    let hc = p.hc();
    let barge = p.m1 * (p.h1 / 2.0 - hc);
    let crane = p.m2 * (p.h2 + p.h1 - hc);
    ((barge + crane) / p.mtot) * angle.sin()
}

/// Moment of the buoyancy/gravity couple for a given center offset
pub fn restoring_torque(p: &SystemParameters, offset: f64) -> f64 {
    p.mtot * p.g * offset.abs()
}

/// All torque-related quantities evaluated at a single angle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorqueSample {
    pub lever: f64,
    pub overturning: f64,
    pub buoyancy_x: f64,
    pub gravity_x: f64,
    pub offset: f64,
    pub restoring: f64,
    pub sum: f64,
}

impl TorqueSample {
    /// Evaluate every quantity from `angle` alone, with no step lag
    pub fn at(p: &SystemParameters, m: f64, angle: f64) -> Self {
        let lever = lever_distance(p, angle);
        let overturning = overturning_torque(p, m, lever);
        let buoyancy_x = buoyancy_center_x(p, angle);
        let gravity_x = gravity_center_x(p, angle);
        let offset = buoyancy_x - gravity_x;
        let restoring = restoring_torque(p, offset);

        Self {
            lever,
            overturning,
            buoyancy_x,
            gravity_x,
            offset,
            restoring,
            sum: overturning + restoring,
        }
    }
}
