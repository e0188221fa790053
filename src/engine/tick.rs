//! One simulation step.
//!
//! ```text
//!   decide_move ──► move_to / stay
//!   decide_action ─► pipeline (nation → biome → commit)
//!   any resource ≤ 0 ? Died : Running
//!   ticks += 1
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{RandomSource, WorldState};
use crate::rules;
use crate::strategy::Strategy;

/// Outcome of a tick. `Died` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TickResult {
    Running,
    Died,
}

impl TickResult {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == TickResult::Died
    }
}

impl std::fmt::Display for TickResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TickResult::Running => f.write_str("Ok"),
            TickResult::Died => f.write_str("Died"),
        }
    }
}

/// Advance `state` by one tick.
///
/// The global tick count advances even on the tick that kills the player.
/// Panics if the strategy moves to a biome outside the world.
pub fn tick<S>(state: &mut WorldState, strategy: &mut S, rng: &mut dyn RandomSource) -> TickResult
where
    S: Strategy + ?Sized,
{
    match strategy.decide_move(state) {
        Some(mv) => {
            state.move_to(mv.target);
            debug!(
                tick = state.ticks(),
                target = %mv.target,
                biome = %state.current_biome().biome_type(),
                "moved"
            );
        }
        None => state.stay(),
    }

    let mut action = strategy.decide_action(state);
    rules::resolve(state, &mut action, rng);

    let result = check_result(state);
    state.advance_tick();

    let player = state.player();
    debug!(
        tick = state.ticks(),
        %result,
        health = player.health,
        money = player.money,
        satisfaction = player.satisfaction,
        "tick processed"
    );

    result
}

/// `Died` once any resource is at or below zero.
#[must_use]
pub fn check_result(state: &WorldState) -> TickResult {
    if state.player().is_alive() {
        TickResult::Running
    } else {
        TickResult::Died
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Nation;
    use crate::core::{BiomeRef, Move, Player, ProposedAction, ScriptedRng};
    use crate::strategy::IdleStrategy;
    use crate::world;

    /// Walks a fixed route, one entry per tick.
    struct Route {
        moves: Vec<Option<Move>>,
        action: ProposedAction,
    }

    impl Strategy for Route {
        fn decide_move(&mut self, _state: &WorldState) -> Option<Move> {
            if self.moves.is_empty() {
                None
            } else {
                self.moves.remove(0)
            }
        }

        fn decide_action(&mut self, _state: &WorldState) -> ProposedAction {
            self.action
        }
    }

    fn calm_state() -> WorldState {
        let mut state = world::durland(Player::new(
            Nation::Nisheborods.race(),
            Nation::Nisheborods,
            10.0,
            10.0,
            10.0,
        ));
        state.move_to(BiomeRef::new(1, 0));
        state
    }

    #[test]
    fn test_result_display() {
        assert_eq!(TickResult::Running.to_string(), "Ok");
        assert_eq!(TickResult::Died.to_string(), "Died");
        assert!(TickResult::Died.is_terminal());
        assert!(!TickResult::Running.is_terminal());
    }

    #[test]
    fn test_stay_increments_biome_ticks() {
        let mut state = calm_state();
        let history_len = state.history().len();
        let mut rng = ScriptedRng::constant(0.9);
        let mut idle = IdleStrategy::default();

        tick(&mut state, &mut idle, &mut rng);
        tick(&mut state, &mut idle, &mut rng);

        assert_eq!(state.current_biome_ticks(), 2);
        assert_eq!(state.history().len(), history_len);
        assert_eq!(state.ticks(), 2);
    }

    #[test]
    fn test_move_resets_biome_ticks() {
        let mut state = calm_state();
        let mut rng = ScriptedRng::constant(0.9);
        let mut route = Route {
            moves: vec![None, None, Some(Move::to(BiomeRef::new(1, 1)))],
            action: ProposedAction::idle(0.0, 0.0, 0.0),
        };

        tick(&mut state, &mut route, &mut rng);
        tick(&mut state, &mut route, &mut rng);
        assert_eq!(state.current_biome_ticks(), 2);

        let before = state.history().len();
        tick(&mut state, &mut route, &mut rng);
        assert_eq!(state.current_biome_ticks(), 0);
        assert_eq!(state.history().len(), before + 1);
        assert_eq!(state.history().back(), Some(&BiomeRef::new(1, 1)));
        assert_eq!(state.current_biome_ref(), BiomeRef::new(1, 1));
    }

    #[test]
    fn test_dying_tick_is_counted() {
        let mut state = calm_state();
        let mut rng = ScriptedRng::constant(0.9);
        let mut fatal = IdleStrategy::new(0.0, -10.0, 0.0);

        let result = tick(&mut state, &mut fatal, &mut rng);
        assert_eq!(result, TickResult::Died);
        assert_eq!(state.ticks(), 1);
        assert_eq!(state.player().money, 0.0);
    }

    #[test]
    #[should_panic(expected = "does not exist in the world")]
    fn test_bad_move_target_panics() {
        let mut state = calm_state();
        let mut rng = ScriptedRng::constant(0.9);
        let mut route = Route {
            moves: vec![Some(Move::to(BiomeRef::new(7, 0)))],
            action: ProposedAction::default(),
        };
        tick(&mut state, &mut route, &mut rng);
    }
}
