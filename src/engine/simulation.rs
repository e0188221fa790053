//! The run loop: tick until death, reporting as we go.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::tick::{tick, TickResult};
use crate::core::{GameRng, Player, SimConfig, SimError, WorldState};
use crate::report::ReportSink;
use crate::strategy::Strategy;
use crate::world;

/// What a finished run looked like.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Ticks processed, including the dying one.
    pub ticks: u64,
    /// Player as of the final tick.
    pub player: Player,
    /// Number of moves made.
    pub moves: usize,
}

/// A world, its random source and an optional tick guard.
#[derive(Clone, Debug)]
pub struct Simulation {
    state: WorldState,
    rng: GameRng,
    max_ticks: Option<u64>,
    finished: bool,
}

impl Simulation {
    /// Wrap an already constructed world.
    pub fn new(state: WorldState, rng: GameRng) -> Self {
        Self {
            state,
            rng,
            max_ticks: None,
            finished: false,
        }
    }

    /// The standard world, seeded and guarded per `config`.
    ///
    /// Panics if the configured starting resources are not positive.
    pub fn from_config(config: &SimConfig) -> Self {
        let mut sim = Self::new(world::durland(config.player()), GameRng::new(config.seed));
        sim.max_ticks = config.max_ticks;
        sim
    }

    /// Stop `run` with an error after this many ticks.
    #[must_use]
    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }

    #[must_use]
    pub fn state(&self) -> &WorldState {
        &self.state
    }

    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// True once a tick has returned `Died`.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Process one tick.
    ///
    /// Panics if the run has already ended.
    pub fn step<S: Strategy + ?Sized>(&mut self, strategy: &mut S) -> TickResult {
        assert!(!self.finished, "Simulation already ended");

        let result = tick(&mut self.state, strategy, &mut self.rng);
        if result.is_terminal() {
            self.finished = true;
        }
        result
    }

    /// Tick until the player dies, reporting every tick to `sink`.
    ///
    /// Returns `SimError::TickLimitReached` if a tick guard is set and the
    /// player outlives it.
    pub fn run<S, R>(&mut self, strategy: &mut S, sink: &mut R) -> Result<RunSummary, SimError>
    where
        S: Strategy + ?Sized,
        R: ReportSink + ?Sized,
    {
        info!(
            nation = %self.state.player().nation,
            race = %self.state.player().race,
            seed = self.rng.seed(),
            "run started"
        );

        loop {
            if let Some(max) = self.max_ticks {
                if self.state.ticks() >= max {
                    warn!(max_ticks = max, "tick limit reached");
                    return Err(SimError::TickLimitReached(max));
                }
            }

            let result = self.step(strategy);
            sink.report(self.state.ticks(), result);

            if result.is_terminal() {
                let summary = self.summary();
                info!(ticks = summary.ticks, moves = summary.moves, "player died");
                return Ok(summary);
            }
        }
    }

    /// Snapshot of the run so far.
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            ticks: self.state.ticks(),
            player: self.state.player().clone(),
            moves: self.state.history().len(),
        }
    }
}
