//! World construction: the seed map of Durland.
//!
//! Three locations with two biomes each:
//!
//! ```text
//! Workland   Balbesburg     Sl Sl Sl Si Ch
//!            Dolbesburg     Sl Sl Sl Si Ch
//! Beachland  Kuramarubs     Sl Si Si Si Ch
//!            Punta-Pelicana Sl Si Si Si Ch
//! Pranaland  Shrinavans     Sl Si Ch Ch Ch
//!            Hare-Kirishi   Sl Si Ch Ch Ch
//! ```
//!
//! Sl = Slesanders, Si = Sisanders, Ch = Chuchunders.

mod builder;

pub use builder::WorldBuilder;

use crate::catalog::BiomeType;
use crate::catalog::AnimalKind::{Chuchunders as Ch, Sisanders as Si, Slesanders as Sl};
use crate::core::{Player, WorldState};

/// Build the standard world with `player` standing in Balbesburg.
pub fn durland(player: Player) -> WorldState {
    WorldBuilder::new()
        .location("Workland")
        .biome(BiomeType::Balbesburg, &[Sl, Sl, Sl, Si, Ch])
        .biome(BiomeType::Dolbesburg, &[Sl, Sl, Sl, Si, Ch])
        .location("Beachland")
        .biome(BiomeType::Kuramarubs, &[Sl, Si, Si, Si, Ch])
        .biome(BiomeType::PuntaPelicana, &[Sl, Si, Si, Si, Ch])
        .location("Pranaland")
        .biome(BiomeType::Shrinavans, &[Sl, Si, Ch, Ch, Ch])
        .biome(BiomeType::HareKirishi, &[Sl, Si, Ch, Ch, Ch])
        .build(player)
}
