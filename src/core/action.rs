//! Per-tick decisions: a proposed action and an optional move.
//!
//! A [`ProposedAction`] is a kind tag (the "verb", possibly absent) plus three
//! resource deltas. Modifiers in the pipeline may rewrite the deltas but never
//! the tag. A [`Move`] just names the target biome.
//!
//! ## Example
//!
//! ```
//! use durland::core::{ActionKind, ProposedAction};
//!
//! // Do nothing in particular, slowly starving.
//! let idle = ProposedAction::idle(-0.5, -0.5, -0.5);
//! assert!(idle.kind.is_none());
//!
//! // Go gulboning for some money.
//! let gulb = ProposedAction::new(ActionKind::Gulboning).with_money(2.0);
//! assert!(gulb.is(ActionKind::Gulboning));
//! assert_eq!(gulb.money_change, 2.0);
//! ```

use serde::{Deserialize, Serialize};

use super::ids::BiomeRef;

/// The closed set of things a player can do on a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Zumbaling,
    Gulboning,
    Schlaming,
}

impl ActionKind {
    /// All kinds, in declaration order.
    pub const ALL: [ActionKind; 3] = [
        ActionKind::Zumbaling,
        ActionKind::Gulboning,
        ActionKind::Schlaming,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ActionKind::Zumbaling => "Zumbaling",
            ActionKind::Gulboning => "Gulboning",
            ActionKind::Schlaming => "Schlaming",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A tick's candidate effect on the player's resources.
///
/// Deltas are mutable while the action flows through the pipeline and are
/// committed exactly once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProposedAction {
    /// What the player is doing. `None` means no particular activity.
    pub kind: Option<ActionKind>,

    pub health_change: f32,
    pub money_change: f32,
    pub satisfaction_change: f32,
}

impl ProposedAction {
    /// An action of the given kind with zero deltas.
    #[must_use]
    pub const fn new(kind: ActionKind) -> Self {
        Self {
            kind: Some(kind),
            health_change: 0.0,
            money_change: 0.0,
            satisfaction_change: 0.0,
        }
    }

    /// A kindless action with the given deltas.
    #[must_use]
    pub const fn idle(health: f32, money: f32, satisfaction: f32) -> Self {
        Self {
            kind: None,
            health_change: health,
            money_change: money,
            satisfaction_change: satisfaction,
        }
    }

    /// Set the health delta.
    #[must_use]
    pub fn with_health(mut self, delta: f32) -> Self {
        self.health_change = delta;
        self
    }

    /// Set the money delta.
    #[must_use]
    pub fn with_money(mut self, delta: f32) -> Self {
        self.money_change = delta;
        self
    }

    /// Set the satisfaction delta.
    #[must_use]
    pub fn with_satisfaction(mut self, delta: f32) -> Self {
        self.satisfaction_change = delta;
        self
    }

    /// Check the kind tag.
    #[must_use]
    pub fn is(&self, kind: ActionKind) -> bool {
        self.kind == Some(kind)
    }
}

/// A request to relocate the player before acting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub target: BiomeRef,
}

impl Move {
    #[must_use]
    pub const fn to(target: BiomeRef) -> Self {
        Self { target }
    }
}
