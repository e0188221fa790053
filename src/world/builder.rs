//! Builder for location trees.

use crate::catalog::{Animal, AnimalKind, BiomeType};
use crate::core::{Biome, Location, Player, WorldState};

/// Assembles a Location → Biome → Animal tree, then the starting state.
///
/// ```
/// use durland::catalog::{AnimalKind, BiomeType};
/// use durland::core::Player;
/// use durland::world::WorldBuilder;
///
/// let state = WorldBuilder::new()
///     .location("Shore")
///     .biome(BiomeType::Kuramarubs, &[AnimalKind::Sisanders])
///     .build(Player::default());
///
/// assert_eq!(state.locations().len(), 1);
/// assert_eq!(state.current_biome().biome_type(), BiomeType::Kuramarubs);
/// ```
#[derive(Clone, Debug, Default)]
pub struct WorldBuilder {
    locations: Vec<Location>,
    pending: Option<(String, Vec<Biome>)>,
}

impl WorldBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new location. Following `biome` calls add to it.
    #[must_use]
    pub fn location(mut self, name: impl Into<String>) -> Self {
        self.flush();
        self.pending = Some((name.into(), Vec::new()));
        self
    }

    /// Add a biome to the current location.
    ///
    /// Panics if no location has been started.
    #[must_use]
    pub fn biome(mut self, biome_type: BiomeType, animals: &[AnimalKind]) -> Self {
        let (_, biomes) = self
            .pending
            .as_mut()
            .unwrap_or_else(|| panic!("Start a location before adding {}", biome_type));
        biomes.push(Biome::new(
            biome_type,
            animals.iter().map(|&kind| Animal::new(kind)),
        ));
        self
    }

    /// Finish the tree and place `player` at its first biome.
    ///
    /// Panics if the tree is empty or its first location has no biomes.
    pub fn build(mut self, player: Player) -> WorldState {
        self.flush();
        WorldState::new(self.locations, player)
    }

    fn flush(&mut self) {
        if let Some((name, biomes)) = self.pending.take() {
            self.locations.push(Location::new(name, biomes));
        }
    }
}
