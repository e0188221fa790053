//! The seam between the catalog and the pipeline.

use crate::core::{ProposedAction, RandomSource, WorldState};

/// Something that bends a proposed action before it is committed.
///
/// ## Implementation Notes
///
/// - Only the three deltas may change; the kind tag is read-only
/// - Never fails: with no applicable rule, leave the action untouched
/// - Draw from `rng` only when a rule actually needs a roll
pub trait ActionModifier {
    /// Display identity, used in logs.
    fn name(&self) -> &'static str;

    /// Adjust `action` in place, reading whatever it needs from `state`.
    fn modify(&self, state: &WorldState, action: &mut ProposedAction, rng: &mut dyn RandomSource);
}
