//! Nations and their action modifiers.
//!
//! Every nation belongs to one race and bends the player's actions in its own
//! way. Modifiers run on the raw proposal, before the biome sees it.

use serde::{Deserialize, Serialize};

use super::animal::AnimalKind;
use super::race::Race;
use crate::core::{ActionKind, ProposedAction, RandomSource, WorldState};
use crate::rules::ActionModifier;

pub const MOZHORS_GULBONING_MONEY: f32 = 1.23;
pub const MOZHORS_ZUMBALING_HEALTH_SKIP: f32 = 0.33;

pub const NISHEBORODS_GULBONING_MONEY: f32 = 1.0 - 0.87;
pub const NISHEBORODS_GULBONING_HEALTH: f32 = 1.76;

pub const SOEVS_CHUCHUNDER_HEALTH: f32 = 0.12;

pub const PROSVELENS_LOOKBACK: usize = 3;
pub const PROSVELENS_SISANDER_BONUS: f32 = 0.31;

pub const DRONCENTS_GULBONING_SCALE: f32 = 0.5;

pub const ZHELEZNOUHS_ZUMBALING_MONEY_SKIP: f32 = 0.33;

/// The player's sociopolitical affiliation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nation {
    Mozhors,
    Nisheborods,
    Soevs,
    Prosvelens,
    Droncents,
    Zheleznouhs,
}

impl Nation {
    pub const ALL: [Nation; 6] = [
        Nation::Mozhors,
        Nation::Nisheborods,
        Nation::Soevs,
        Nation::Prosvelens,
        Nation::Droncents,
        Nation::Zheleznouhs,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Nation::Mozhors => "Mozhors",
            Nation::Nisheborods => "Nisheborods",
            Nation::Soevs => "Soevs",
            Nation::Prosvelens => "Prosvelens",
            Nation::Droncents => "Droncents",
            Nation::Zheleznouhs => "Zheleznouhs",
        }
    }

    /// The race this nation belongs to.
    #[must_use]
    pub const fn race(self) -> Race {
        match self {
            Nation::Mozhors | Nation::Nisheborods => Race::Shlendrics,
            Nation::Soevs | Nation::Prosvelens => Race::Hipstics,
            Nation::Droncents | Nation::Zheleznouhs => Race::Skufics,
        }
    }
}

impl std::fmt::Display for Nation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl ActionModifier for Nation {
    fn name(&self) -> &'static str {
        Nation::name(*self)
    }

    fn modify(&self, state: &WorldState, action: &mut ProposedAction, rng: &mut dyn RandomSource) {
        match self {
            Nation::Mozhors => {
                if action.is(ActionKind::Gulboning) {
                    action.money_change *= MOZHORS_GULBONING_MONEY;
                }
                if action.is(ActionKind::Zumbaling) && rng.chance(MOZHORS_ZUMBALING_HEALTH_SKIP) {
                    action.health_change = 0.0;
                }
            }
            Nation::Nisheborods => {
                if action.is(ActionKind::Gulboning) {
                    action.money_change *= NISHEBORODS_GULBONING_MONEY;
                    action.health_change *= NISHEBORODS_GULBONING_HEALTH;
                }
            }
            Nation::Soevs => {
                let chuchunders = state.current_biome().count(AnimalKind::Chuchunders);
                for _ in 0..chuchunders {
                    action.health_change -= SOEVS_CHUCHUNDER_HEALTH;
                }
            }
            Nation::Prosvelens => {
                if action.is(ActionKind::Schlaming) {
                    let sisanders: usize = state
                        .recent_biomes(PROSVELENS_LOOKBACK)
                        .map(|biome| biome.count(AnimalKind::Sisanders))
                        .sum();
                    action.satisfaction_change += PROSVELENS_SISANDER_BONUS * sisanders as f32;
                }
            }
            Nation::Droncents => {
                if action.is(ActionKind::Gulboning) {
                    action.health_change *= DRONCENTS_GULBONING_SCALE;
                    action.money_change *= DRONCENTS_GULBONING_SCALE;
                    action.satisfaction_change *= DRONCENTS_GULBONING_SCALE;
                }
            }
            Nation::Zheleznouhs => {
                if action.is(ActionKind::Zumbaling) {
                    action.satisfaction_change = 0.0;
                    if rng.chance(ZHELEZNOUHS_ZUMBALING_MONEY_SKIP) {
                        action.money_change = 0.0;
                    }
                }
            }
        }
    }
}
