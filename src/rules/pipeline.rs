//! The action pipeline: nation, then biome, then commit.
//!
//! The order is fixed. Nation rules see the raw proposal; biome rules see
//! whatever the nation left behind. [`commit`] is the only place player
//! resources change.

use tracing::trace;

use super::modifier::ActionModifier;
use crate::core::{ProposedAction, RandomSource, WorldState};

/// Run every modifier over `action`, in pipeline order.
pub fn apply_modifiers(state: &WorldState, action: &mut ProposedAction, rng: &mut dyn RandomSource) {
    let nation = state.player().nation;
    let biome_type = state.current_biome().biome_type();
    let stages: [&dyn ActionModifier; 2] = [&nation, &biome_type];

    for stage in stages {
        stage.modify(state, action, rng);
        trace!(
            stage = stage.name(),
            health = action.health_change,
            money = action.money_change,
            satisfaction = action.satisfaction_change,
            "modifier applied"
        );
    }
}

/// Add the action's deltas to the player's resources.
///
/// No clamping: resources may go negative.
pub fn commit(state: &mut WorldState, action: &ProposedAction) {
    let player = state.player_mut();
    player.health += action.health_change;
    player.money += action.money_change;
    player.satisfaction += action.satisfaction_change;
}

/// Modify `action` through the pipeline, then commit it.
pub fn resolve(state: &mut WorldState, action: &mut ProposedAction, rng: &mut dyn RandomSource) {
    apply_modifiers(state, action, rng);
    commit(state, action);
}
