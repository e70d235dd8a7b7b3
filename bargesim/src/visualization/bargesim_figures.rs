//! SVG figures for finished simulation runs (plotters, SVG backend)
//!
//! Every function only reads `SimulationResult`s; nothing here touches the
//! integrator. Dashed threshold lines are drawn at +/- the submersion angle (red)
//! and +/- the lift-off angle (blue).

use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_svg::SVGBackend;

use crate::simulation::params::StabilityThresholds;
use crate::simulation::scenario::{Scenario, Sweep};
use crate::simulation::states::SimulationResult;

const FIGURE_SIZE: (u32, u32) = (900, 600);
const PANELS_SIZE: (u32, u32) = (900, 900);
const ORANGE: RGBColor = RGBColor(0xe3, 0x90, 0x2b);

// threshold dash pattern [px]
const DASH: i32 = 8;
const GAP: i32 = 5;

/// File names written by `render_all`, in drawing order
pub const FIGURE_FILES: [&str; 4] = [
    "mass_sweep.svg",
    "angle_deg.svg",
    "time_panels.svg",
    "phase_diagram.svg",
];

/// Smallest range covering `values` and `base`, widened when flat
fn padded_range(values: impl Iterator<Item = f64>, base: Range<f64>) -> Range<f64> {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((base.start, base.end), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if hi - lo < 1e-12 {
        (lo - 1.0)..(hi + 1.0)
    } else {
        lo..hi
    }
}

/// Horizontal threshold lines across `x`, scaled by `scale` (1 for rad, 180/pi for deg)
fn threshold_lines(
    chart: &mut ChartContext<'_, SVGBackend<'_>, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    x: Range<f64>,
    thresholds: &StabilityThresholds,
    scale: f64,
) -> Result<()> {
    let lines = [
        (thresholds.angle_max * scale, RED, "submersion"),
        (thresholds.angle_lift * scale, BLUE, "lift-off"),
    ];

    for (y, color, label) in lines {
        let style = color.stroke_width(1);
        chart
            .draw_series(DashedLineSeries::new(vec![(x.start, y), (x.end, y)], DASH, GAP, style))?
            .label(label)
            .legend(move |(px, py)| PathElement::new(vec![(px, py), (px + 20, py)], style));
        chart.draw_series(DashedLineSeries::new(vec![(x.start, -y), (x.end, -y)], DASH, GAP, style))?;
    }
    Ok(())
}

/// Angle in degrees against time, with the stability thresholds
pub fn angle_vs_time(path: &Path, run: &SimulationResult) -> Result<()> {
    let s = &run.series;
    let t_end = s.t.last().copied().unwrap_or(0.0).max(f64::EPSILON);
    let top = run.thresholds.angle_max.to_degrees() + 1.0;
    let y = padded_range(s.angle.iter().map(|a| a.to_degrees()), 0.0..top);

    let root = SVGBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Tilt angle, m = {} kg", s.m), ("sans-serif", 20))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..t_end, y)?;

    chart.configure_mesh().x_desc("Time (s)").y_desc("Angle (deg)").draw()?;

    chart.draw_series(LineSeries::new(
        s.t.iter().zip(&s.angle).map(|(&t, &a)| (t, a.to_degrees())),
        &BLACK,
    ))?;
    threshold_lines(&mut chart, 0.0..t_end, &run.thresholds, 1f64.to_degrees())?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    debug!("wrote {}", path.display());
    Ok(())
}

/// (mass, start, end) per run in degrees, end taken at `sweep.sample_index`
/// or at the last sample when the run is shorter
pub fn sweep_segments(runs: &[SimulationResult], sweep: &Sweep) -> Vec<(f64, f64, f64)> {
    runs.iter()
        .filter_map(|r| {
            let a = &r.series.angle;
            let start = *a.first()?;
            let end = match a.get(sweep.sample_index) {
                Some(v) => *v,
                None => {
                    debug!("sample {} past end of run, using last sample", sweep.sample_index);
                    *a.last()?
                }
            };
            Some((r.series.m, start.to_degrees(), end.to_degrees()))
        })
        .collect()
}

/// One segment per sweep mass from (0, angle[0]) to (span, angle[sample_index]), in degrees
pub fn mass_sweep(path: &Path, runs: &[SimulationResult], sweep: &Sweep) -> Result<()> {
    let span = sweep.distance_span.max(f64::EPSILON);
    let segments = sweep_segments(runs, sweep);

    let thresholds = runs.first().map(|r| r.thresholds);
    let top = thresholds.map_or(1.0, |th| th.angle_max.to_degrees() + 1.0);
    let y = padded_range(segments.iter().flat_map(|&(_, a, b)| [a, b]), 0.0..top);

    let root = SVGBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Tilt against displaced distance", ("sans-serif", 20))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..span, y)?;

    chart.configure_mesh().x_desc("Distance (m)").y_desc("Angle (deg)").draw()?;

    for (i, &(m, start, end)) in segments.iter().enumerate() {
        let style = Palette99::pick(i).stroke_width(2);
        chart
            .draw_series(LineSeries::new(vec![(0.0, start), (span, end)], style))?
            .label(format!("m = {m}kg"))
            .legend(move |(px, py)| PathElement::new(vec![(px, py), (px + 20, py)], style));
    }

    if let Some(th) = thresholds {
        threshold_lines(&mut chart, 0.0..span, &th, 1f64.to_degrees())?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    debug!("wrote {}", path.display());
    Ok(())
}

fn draw_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    t: &[f64],
    values: &[f64],
    color: RGBColor,
    label: &str,
    y_desc: &str,
    thresholds: Option<&StabilityThresholds>,
) -> Result<()> {
    let t_end = t.last().copied().unwrap_or(0.0).max(f64::EPSILON);
    let base = thresholds.map_or(0.0..0.0, |th| -th.angle_max..th.angle_max);
    let y = padded_range(values.iter().copied(), base);

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..t_end, y)?;

    chart.configure_mesh().x_desc("Time (s)").y_desc(y_desc).draw()?;

    chart
        .draw_series(LineSeries::new(t.iter().copied().zip(values.iter().copied()), &color))?
        .label(label)
        .legend(move |(px, py)| PathElement::new(vec![(px, py), (px + 20, py)], color));

    if let Some(th) = thresholds {
        threshold_lines(&mut chart, 0.0..t_end, th, 1.0)?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    Ok(())
}

/// Angle, angular velocity and angular acceleration stacked against time
pub fn time_panels(path: &Path, run: &SimulationResult) -> Result<()> {
    let s = &run.series;

    let root = SVGBackend::new(path, PANELS_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((3, 1));

    draw_panel(&panels[0], &s.t, &s.angle, BLUE, "Angle", "Angle (rad)", Some(&run.thresholds))?;
    draw_panel(&panels[1], &s.t, &s.angular_velocity, GREEN, "Angular velocity", "Velocity (rad/s)", None)?;
    draw_panel(
        &panels[2],
        &s.t,
        &s.angular_acceleration,
        ORANGE,
        "Angular acceleration",
        "Acceleration (rad/s^2)",
        None,
    )?;

    root.present()?;
    debug!("wrote {}", path.display());
    Ok(())
}

/// Angular velocity against angle
pub fn phase_diagram(path: &Path, run: &SimulationResult) -> Result<()> {
    let points = run.series.phase_portrait();
    let x = padded_range(points.iter().map(|p| p.x), 0.0..0.0);
    let y = padded_range(points.iter().map(|p| p.y), 0.0..0.0);

    let root = SVGBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Phase diagram", ("sans-serif", 20))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x, y)?;

    chart
        .configure_mesh()
        .x_desc("Angle (rad)")
        .y_desc("Angular velocity (rad/s)")
        .draw()?;

    chart.draw_series(LineSeries::new(points.iter().map(|p| (p.x, p.y)), &BLUE))?;

    root.present()?;
    debug!("wrote {}", path.display());
    Ok(())
}

/// Run the scenario for `m` and for every sweep mass, then write all four figures into `out_dir`
pub fn render_all(scenario: &Scenario, m: f64, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let run = scenario.simulate(m)?;
    let sweep = scenario.simulate_sweep()?;

    let paths: Vec<PathBuf> = FIGURE_FILES.iter().map(|f| out_dir.join(f)).collect();

    mass_sweep(&paths[0], &sweep, &scenario.sweep)?;
    angle_vs_time(&paths[1], &run)?;
    time_panels(&paths[2], &run)?;
    phase_diagram(&paths[3], &run)?;

    for p in &paths {
        info!("figure written: {}", p.display());
    }
    Ok(paths)
}
