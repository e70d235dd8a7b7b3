use approx::assert_relative_eq;

use bargesim::simulation::integrator::reference_integrator;
use bargesim::simulation::params::{SimulationConfig, SystemParameters};
use bargesim::{angle_vs_time, mass_sweep, render_all, Scenario, ScenarioConfig, SimError, Stepping, Sweep};

/// Reference barge: 5 kg on a 0.6 m base, 20 s at 10 ms steps
pub fn reference_scenario() -> Scenario {
    Scenario::configure(SystemParameters::default(), 0.01, 20.0).unwrap()
}

/// Same constants with a short run for figure tests
pub fn short_scenario() -> Scenario {
    Scenario::configure(SystemParameters::default(), 0.01, 1.0).unwrap()
}

// ==================================================================================
// Reference stepping
// ==================================================================================

#[test]
fn series_have_ceil_length_and_initial_state() {
    let run = reference_scenario().simulate(0.4).unwrap();
    let s = &run.series;
    let n = 2000;

    for len in [
        s.t.len(),
        s.angle.len(),
        s.angular_velocity.len(),
        s.angular_acceleration.len(),
        s.torque_sum.len(),
        s.overturning_torque.len(),
        s.restoring_torque.len(),
        s.lever_distance.len(),
        s.buoyancy_center_x.len(),
        s.gravity_center_x.len(),
        s.center_offset.len(),
    ] {
        assert_eq!(len, n);
    }

    assert_eq!(s.angle[0], 0.0);
    assert_eq!(s.angular_velocity[0], 0.0);
    assert_eq!(s.angular_acceleration[0], 0.0);
    assert_eq!(s.torque_sum[0], 0.0);
    assert_eq!(s.restoring_torque[0], 0.0);
    assert_eq!(s.lever_distance[0], 0.0);
    assert_eq!(s.buoyancy_center_x[0], 0.0);
    assert_eq!(s.gravity_center_x[0], 0.0);
    assert_eq!(s.center_offset[0], 0.0);
    assert_relative_eq!(s.overturning_torque[0], -0.4 * 9.81 * 0.85, epsilon = 1e-12);
}

#[test]
fn reference_scenario_first_steps() {
    let s = reference_scenario().simulate(0.4).unwrap().series;

    // (angle, angular velocity, torque sum) at indices 1..=5
    let expected = [
        (0.0, 0.0, -3.3354000000000004),
        (0.0, -0.005056701030927836, 0.0),
        (5.056701030927836e-05, -0.004980037886129052, -3.3354000000000004),
        (0.00010036738917056887, -0.009961238039462451, -3.3354000000000004),
        (0.0001999797695651934, -0.014866919694412992, -3.3354000000000004),
    ];

    for (k, &(angle, velocity, sum)) in expected.iter().enumerate() {
        let i = k + 1;
        assert_relative_eq!(s.angle[i], angle, epsilon = 1e-9);
        assert_relative_eq!(s.angular_velocity[i], velocity, epsilon = 1e-9);
        assert_relative_eq!(s.torque_sum[i], sum, epsilon = 1e-9);
    }
}

#[test]
fn reference_scenario_settles() {
    let s = reference_scenario().simulate(0.4).unwrap().series;
    assert!(s.is_finite());
    assert_relative_eq!(s.final_angle().unwrap(), 0.028524886685034254, epsilon = 1e-9);
}

#[test]
fn repeated_runs_are_bit_identical() {
    let scenario = reference_scenario();
    let a = scenario.simulate(0.4).unwrap();
    let b = scenario.simulate(0.4).unwrap();
    assert_eq!(a, b);
}

#[test]
fn runs_do_not_leak_into_each_other() {
    let scenario = reference_scenario();
    let before = scenario.simulate(0.4).unwrap();
    let _ = scenario.simulate(5.0).unwrap();
    let after = scenario.simulate(0.4).unwrap();
    assert_eq!(before, after);
}

#[test]
fn thresholds_do_not_depend_on_mass() {
    let scenario = reference_scenario();
    let p = &scenario.parameters;
    let hc = p.mtot / (p.width * p.width * 997.0);

    for m in [0.0, 0.4, 3.0] {
        let th = scenario.simulate(m).unwrap().thresholds;
        assert_relative_eq!(th.angle_max, (2.0 * (p.h1 - hc) / p.width).atan(), epsilon = 1e-15);
        assert_relative_eq!(th.angle_lift, (2.0 * hc / p.width).atan(), epsilon = 1e-15);
    }
}

#[test]
fn unloaded_barge_stays_at_rest() {
    let s = reference_scenario().simulate(0.0).unwrap().series;
    assert!(s.angle.iter().all(|&a| a == 0.0));
    assert!(s.angular_velocity.iter().all(|&w| w == 0.0));
    assert!(s.torque_sum.iter().all(|&c| c == 0.0));
}

#[test]
fn heaviest_sweep_load_stays_bounded() {
    let s = reference_scenario().simulate(5.0).unwrap().series;
    let peak = s.angular_velocity.iter().fold(0.0f64, |acc, v| acc.max(v.abs()));
    let last = s.angular_velocity.last().unwrap().abs();

    assert!(s.is_finite());
    assert!(peak > 1.0 && peak < 1.5, "peak velocity {}", peak);
    // damping has bled off most of the swing by t = 20 s
    assert!(last < 0.1 * peak, "velocity {} at end, peak {}", last, peak);
}

#[test]
fn tiny_step_is_rejected_before_allocation() {
    let err = Scenario::configure(SystemParameters::default(), 1e-320, 1.0);
    assert!(matches!(err, Err(SimError::InvalidTimestep(_))));
}

#[test]
fn heavier_loads_give_distinct_final_angles() {
    let scenario = reference_scenario();
    let finals: Vec<f64> = [1.0, 2.0, 3.0, 4.0, 5.0]
        .iter()
        .map(|&m| scenario.simulate(m).unwrap().series.final_angle().unwrap())
        .collect();

    for w in finals.windows(2) {
        assert!(w[1] > w[0], "final angles not increasing: {:?}", finals);
    }
}

#[test]
fn degenerate_depth_yields_non_finite_samples() {
    let p = SystemParameters {
        mtot: 0.0,
        ..Default::default()
    };
    let s = reference_integrator(&p, &SimulationConfig::new(0.01, 0.1), 0.4);
    assert_eq!(s.len(), 10);
    assert!(!s.is_finite());
}

// ==================================================================================
// Corrected stepping
// ==================================================================================

#[test]
fn corrected_stepping_reaches_same_equilibrium() {
    let reference = reference_scenario().simulate(0.4).unwrap().series;
    let corrected = reference_scenario()
        .with_stepping(Stepping::Corrected)
        .simulate(0.4)
        .unwrap()
        .series;

    assert_eq!(corrected.len(), reference.len());
    assert!(corrected.is_finite());
    assert_relative_eq!(
        corrected.final_angle().unwrap(),
        reference.final_angle().unwrap(),
        epsilon = 1e-3
    );
}

// ==================================================================================
// Scenario files and figures
// ==================================================================================

#[test]
fn bundled_scenario_matches_defaults() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/scenarios/reference.yaml");
    let text = std::fs::read_to_string(path).unwrap();
    let cfg = ScenarioConfig::from_yaml_str(&text).unwrap();
    let scenario = Scenario::build_scenario(cfg).unwrap();

    assert_eq!(scenario.parameters, SystemParameters::default());
    assert_eq!(scenario.config, SimulationConfig::default());
    assert_eq!(scenario.engine.stepping, Stepping::Reference);
}

#[test]
fn render_all_writes_four_svgs() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("figures");

    let paths = render_all(&short_scenario(), 0.4, &out).unwrap();

    assert_eq!(paths.len(), 4);
    for p in &paths {
        let text = std::fs::read_to_string(p).unwrap();
        assert!(text.contains("<svg"), "{} is not an svg", p.display());
    }
}

#[test]
fn sweep_figure_labels_each_mass_past_run_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sweep.svg");

    let scenario = short_scenario();
    let runs = scenario.simulate_sweep().unwrap();
    let sweep = Sweep {
        sample_index: scenario.config.n_samples() + 50,
        ..Sweep::default()
    };
    mass_sweep(&path, &runs, &sweep).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    for label in ["m = 1kg", "m = 2kg", "m = 3kg", "m = 4kg", "m = 5kg", "submersion", "lift-off"] {
        assert!(text.contains(label), "missing legend entry {}", label);
    }
}

#[test]
fn threshold_lines_are_dashed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("angle.svg");

    let run = short_scenario().simulate(0.4).unwrap();
    angle_vs_time(&path, &run).unwrap();

    // one polyline for the trace, two legend swatches, many dash pieces per threshold
    let text = std::fs::read_to_string(&path).unwrap();
    let pieces = text.matches("<polyline").count();
    assert!(pieces > 40, "only {} polylines, thresholds not dashed", pieces);
}
