//! Run one life in Durland with the idle strategy and print every tick.

use durland::core::error::Result;
use durland::{IdleStrategy, SimConfig, Simulation, StdoutReporter};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("durland=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SimConfig::from_env()?;
    let mut sim = Simulation::from_config(&config);

    sim.run(&mut IdleStrategy::default(), &mut StdoutReporter)?;
    Ok(())
}
