pub mod error;
pub mod states;
pub mod params;
pub mod engine;
pub mod torques;
pub mod integrator;
pub mod scenario;
