//! Biome types and their action modifiers.
//!
//! Biome rules see the action after the player's nation has adjusted it.

use serde::{Deserialize, Serialize};

use super::animal::AnimalKind;
use super::nation::Nation;
use crate::core::{ActionKind, ProposedAction, RandomSource, WorldState};
use crate::rules::ActionModifier;

pub const BALBESBURG_SLESANDER_CHANCE: f32 = 0.15;
pub const BALBESBURG_SLESANDER_HEALTH: f32 = 0.1;

pub const DOLBESBURG_ZUMBALING_MONEY: f32 = 1.2;
pub const DOLBESBURG_ZUMBALING_SATISFACTION: f32 = 1.3;

pub const SHRINAVANS_SCHLAMING_HEALTH: f32 = 1.13;

pub const HARE_KIRISHI_DRONCENTS_HEALTH_SHARE: f32 = 0.1;

/// The kind of terrain a biome is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BiomeType {
    Balbesburg,
    Dolbesburg,
    Kuramarubs,
    PuntaPelicana,
    Shrinavans,
    HareKirishi,
}

impl BiomeType {
    pub const ALL: [BiomeType; 6] = [
        BiomeType::Balbesburg,
        BiomeType::Dolbesburg,
        BiomeType::Kuramarubs,
        BiomeType::PuntaPelicana,
        BiomeType::Shrinavans,
        BiomeType::HareKirishi,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            BiomeType::Balbesburg => "Balbesburg",
            BiomeType::Dolbesburg => "Dolbesburg",
            BiomeType::Kuramarubs => "Kuramarubs",
            BiomeType::PuntaPelicana => "Punta-Pelicana",
            BiomeType::Shrinavans => "Shrinavans",
            BiomeType::HareKirishi => "Hare-Kirishi",
        }
    }
}

impl std::fmt::Display for BiomeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl ActionModifier for BiomeType {
    fn name(&self) -> &'static str {
        BiomeType::name(*self)
    }

    fn modify(&self, state: &WorldState, action: &mut ProposedAction, rng: &mut dyn RandomSource) {
        match self {
            BiomeType::Balbesburg => {
                if rng.chance(BALBESBURG_SLESANDER_CHANCE) {
                    let slesanders = state.current_biome().count(AnimalKind::Slesanders);
                    for _ in 0..slesanders {
                        action.health_change -= BALBESBURG_SLESANDER_HEALTH;
                    }
                }
            }
            BiomeType::Dolbesburg => {
                if action.is(ActionKind::Zumbaling) {
                    action.money_change *= DOLBESBURG_ZUMBALING_MONEY;
                    action.satisfaction_change *= DOLBESBURG_ZUMBALING_SATISFACTION;
                }
            }
            BiomeType::Kuramarubs | BiomeType::PuntaPelicana => {}
            BiomeType::Shrinavans => {
                if action.is(ActionKind::Schlaming) {
                    action.health_change *= SHRINAVANS_SCHLAMING_HEALTH;
                }
            }
            BiomeType::HareKirishi => {
                let player = state.player();
                if player.nation == Nation::Droncents {
                    action.health_change -= player.health * HARE_KIRISHI_DRONCENTS_HEALTH_SHARE;
                }
            }
        }
    }
}
