//! The tick engine and the loop that drives it.
//!
//! - `tick`: one state transition, usable on any `WorldState`
//! - `Simulation`: owns state and RNG, runs ticks until `Died`

mod simulation;
mod tick;

pub use simulation::{RunSummary, Simulation};
pub use tick::{check_result, tick, TickResult};
