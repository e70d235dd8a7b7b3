pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::error::{Result, SimError};
pub use simulation::states::{TimeSeries, SimulationResult, NVec2};
pub use simulation::params::{SystemParameters, SimulationConfig, StabilityThresholds};
pub use simulation::engine::{Engine, Stepping};
pub use simulation::integrator::{reference_integrator, corrected_integrator};
pub use simulation::scenario::{Scenario, Sweep};

pub use configuration::config::{ScenarioConfig, EngineConfig, ParametersConfig, BargeConfig, SweepConfig, SteppingConfig};

pub use visualization::bargesim_figures::{angle_vs_time, mass_sweep, sweep_segments, time_panels, phase_diagram, render_all};

pub use benchmark::benchmark::bench_simulate;
