//! Strategy policies: who decides what the player does each tick.
//!
//! The engine asks a [`Strategy`] twice per tick: once for an optional move,
//! then for an action proposal. Strategies only ever see `&WorldState`, so they
//! can inspect anything but change nothing.

use crate::core::{Move, ProposedAction, WorldState};

/// Per-tick decision maker.
pub trait Strategy {
    /// Where to go before acting. `None` stays put.
    fn decide_move(&mut self, state: &WorldState) -> Option<Move>;

    /// What to do this tick.
    fn decide_action(&mut self, state: &WorldState) -> ProposedAction;
}

/// Never moves, never does anything in particular, and slowly wastes away.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdleStrategy {
    pub upkeep: ProposedAction,
}

impl IdleStrategy {
    /// Idle with the given per-tick deltas.
    #[must_use]
    pub const fn new(health: f32, money: f32, satisfaction: f32) -> Self {
        Self {
            upkeep: ProposedAction::idle(health, money, satisfaction),
        }
    }
}

impl Default for IdleStrategy {
    fn default() -> Self {
        Self::new(-0.5, -0.5, -0.5)
    }
}

impl Strategy for IdleStrategy {
    fn decide_move(&mut self, _state: &WorldState) -> Option<Move> {
        None
    }

    fn decide_action(&mut self, _state: &WorldState) -> ProposedAction {
        self.upkeep
    }
}
