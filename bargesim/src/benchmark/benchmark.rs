use std::time::Instant;

use crate::simulation::engine::Stepping;
use crate::simulation::error::Result;
use crate::simulation::params::SystemParameters;
use crate::simulation::scenario::Scenario;

/// Time one full `simulate` call per step size and stepping order
/// Paste output directly into excel to graph
pub fn bench_simulate() -> Result<()> {
    let steps = [0.02, 0.01, 0.005, 0.001, 0.0005, 0.0001];
    let repeats = 5; // averaged per row

    println!("stepping,dt,samples,ms");

    for stepping in [Stepping::Reference, Stepping::Corrected] {
        for dt in steps {
            let scenario = Scenario::configure(SystemParameters::default(), dt, 20.0)?.with_stepping(stepping);

            // Warm-up
            scenario.simulate_default()?;

            let t0 = Instant::now();
            for _ in 0..repeats {
                scenario.simulate_default()?;
            }
            let ms = t0.elapsed().as_secs_f64() * 1000.0 / repeats as f64;

            println!("{:?},{},{},{:.6}", stepping, dt, scenario.config.n_samples(), ms);
        }
    }

    Ok(())
}
