//! World state: the location tree, the player and where they have been.
//!
//! ## Layout
//!
//! ```text
//! WorldState
//! ├── locations: Location → Biome → Animal   (fixed after construction)
//! ├── player                                 (resources mutate via the pipeline)
//! ├── current_biome: BiomeRef                (always resolves into the tree)
//! ├── biome_history: Vector<BiomeRef>        (append-only)
//! └── counters: current_biome_ticks, ticks
//! ```
//!
//! History uses `im::Vector` so cloning a state for inspection is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::ids::BiomeRef;
use super::player::Player;
use crate::catalog::{Animal, AnimalKind, BiomeType};

/// A sub-area of a location with its resident animals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Biome {
    biome_type: BiomeType,
    animals: SmallVec<[Animal; 8]>,
}

impl Biome {
    /// Create a biome populated with the given animals, in order.
    pub fn new(biome_type: BiomeType, animals: impl IntoIterator<Item = Animal>) -> Self {
        Self {
            biome_type,
            animals: animals.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn biome_type(&self) -> BiomeType {
        self.biome_type
    }

    #[must_use]
    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    /// Number of animals of one species.
    #[must_use]
    pub fn count(&self, kind: AnimalKind) -> usize {
        self.animals.iter().filter(|a| a.kind == kind).count()
    }

}

/// A named group of biomes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    name: String,
    biomes: Vec<Biome>,
}

impl Location {
    pub fn new(name: impl Into<String>, biomes: Vec<Biome>) -> Self {
        Self {
            name: name.into(),
            biomes,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn biomes(&self) -> &[Biome] {
        &self.biomes
    }
}

/// The simulation's full mutable state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorldState {
    locations: Vec<Location>,
    player: Player,

    current_biome: BiomeRef,
    current_biome_ticks: u64,
    biome_history: Vector<BiomeRef>,

    ticks: u64,
}

impl WorldState {
    /// Create a state positioned at the first biome of the first location.
    ///
    /// Panics if the tree has no locations or the first location has no
    /// biomes: either is a construction bug.
    pub fn new(locations: Vec<Location>, player: Player) -> Self {
        assert!(!locations.is_empty(), "World must have at least 1 location");
        assert!(
            !locations[0].biomes.is_empty(),
            "First location must have at least 1 biome"
        );

        Self {
            locations,
            player,
            current_biome: BiomeRef::origin(),
            current_biome_ticks: 0,
            biome_history: Vector::new(),
            ticks: 0,
        }
    }

    // === Tree ===

    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Look up a biome, returning `None` for a dangling reference.
    #[must_use]
    pub fn try_biome(&self, biome: BiomeRef) -> Option<&Biome> {
        self.locations
            .get(biome.location)
            .and_then(|location| location.biomes.get(biome.biome))
    }

    /// Look up a biome.
    ///
    /// Panics on a dangling reference.
    #[must_use]
    pub fn biome(&self, biome: BiomeRef) -> &Biome {
        match self.try_biome(biome) {
            Some(b) => b,
            None => panic!("{} does not exist in the world", biome),
        }
    }

    /// Iterate over every biome with its reference, in tree order.
    pub fn biomes(&self) -> impl Iterator<Item = (BiomeRef, &Biome)> {
        self.locations.iter().enumerate().flat_map(|(li, location)| {
            location
                .biomes
                .iter()
                .enumerate()
                .map(move |(bi, biome)| (BiomeRef::new(li, bi), biome))
        })
    }

    // === Player ===

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Mutable player access. Only the action pipeline commits resources.
    pub(crate) fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    // === Position ===

    #[must_use]
    pub fn current_biome_ref(&self) -> BiomeRef {
        self.current_biome
    }

    #[must_use]
    pub fn current_biome(&self) -> &Biome {
        self.biome(self.current_biome)
    }

    /// Ticks spent in the current biome since the last move.
    #[must_use]
    pub fn current_biome_ticks(&self) -> u64 {
        self.current_biome_ticks
    }

    /// Every biome moved into, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<BiomeRef> {
        &self.biome_history
    }

    /// The last `window` visited biomes, oldest first.
    ///
    /// Yields fewer when history is shorter than the window.
    pub fn recent_biomes(&self, window: usize) -> impl Iterator<Item = &Biome> {
        let skip = self.biome_history.len().saturating_sub(window);
        self.biome_history
            .iter()
            .skip(skip)
            .map(move |&biome| self.biome(biome))
    }

    /// Relocate the player, recording the visit.
    ///
    /// Panics if `target` is not in the tree.
    pub(crate) fn move_to(&mut self, target: BiomeRef) {
        assert!(
            self.try_biome(target).is_some(),
            "Move target {} does not exist in the world",
            target
        );

        self.current_biome = target;
        self.biome_history.push_back(target);
        self.current_biome_ticks = 0;
    }

    /// Spend another tick where the player already is.
    pub(crate) fn stay(&mut self) {
        self.current_biome_ticks += 1;
    }

    // === Clock ===

    /// Ticks processed so far.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub(crate) fn advance_tick(&mut self) {
        self.ticks += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BiomeType;

    fn animals(kinds: &[AnimalKind]) -> Vec<Animal> {
        kinds.iter().map(|&k| Animal::new(k)).collect()
    }

    fn two_location_world() -> WorldState {
        let locations = vec![
            Location::new(
                "North",
                vec![
                    Biome::new(BiomeType::Kuramarubs, animals(&[AnimalKind::Sisanders])),
                    Biome::new(BiomeType::Dolbesburg, animals(&[AnimalKind::Slesanders])),
                ],
            ),
            Location::new(
                "South",
                vec![Biome::new(
                    BiomeType::Shrinavans,
                    animals(&[AnimalKind::Chuchunders, AnimalKind::Chuchunders]),
                )],
            ),
        ];
        WorldState::new(locations, Player::default())
    }

    #[test]
    fn test_new_starts_at_origin() {
        let state = two_location_world();
        assert_eq!(state.current_biome_ref(), BiomeRef::origin());
        assert_eq!(state.current_biome().biome_type(), BiomeType::Kuramarubs);
        assert!(state.history().is_empty());
        assert_eq!(state.current_biome_ticks(), 0);
        assert_eq!(state.ticks(), 0);
    }

    #[test]
    #[should_panic(expected = "World must have at least 1 location")]
    fn test_empty_world_panics() {
        WorldState::new(Vec::new(), Player::default());
    }

    #[test]
    #[should_panic(expected = "First location must have at least 1 biome")]
    fn test_empty_first_location_panics() {
        WorldState::new(vec![Location::new("Void", Vec::new())], Player::default());
    }

    #[test]
    fn test_move_records_history() {
        let mut state = two_location_world();
        state.stay();
        state.stay();
        assert_eq!(state.current_biome_ticks(), 2);

        state.move_to(BiomeRef::new(1, 0));
        assert_eq!(state.current_biome_ref(), BiomeRef::new(1, 0));
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.current_biome_ticks(), 0);
        assert_eq!(state.current_biome().count(AnimalKind::Chuchunders), 2);
    }

    #[test]
    #[should_panic(expected = "does not exist in the world")]
    fn test_move_to_dangling_ref_panics() {
        let mut state = two_location_world();
        state.move_to(BiomeRef::new(1, 5));
    }

    #[test]
    fn test_try_biome() {
        let state = two_location_world();
        assert!(state.try_biome(BiomeRef::new(0, 1)).is_some());
        assert!(state.try_biome(BiomeRef::new(0, 2)).is_none());
        assert!(state.try_biome(BiomeRef::new(9, 0)).is_none());
    }

    #[test]
    fn test_biomes_iterates_tree_order() {
        let state = two_location_world();
        let refs: Vec<_> = state.biomes().map(|(r, _)| r).collect();
        assert_eq!(
            refs,
            vec![BiomeRef::new(0, 0), BiomeRef::new(0, 1), BiomeRef::new(1, 0)]
        );
    }

    #[test]
    fn test_recent_biomes_clamps_short_history() {
        let mut state = two_location_world();
        assert_eq!(state.recent_biomes(3).count(), 0);

        state.move_to(BiomeRef::new(0, 1));
        let recent: Vec<_> = state.recent_biomes(3).map(Biome::biome_type).collect();
        assert_eq!(recent, vec![BiomeType::Dolbesburg]);
    }

    #[test]
    fn test_recent_biomes_takes_newest_window() {
        let mut state = two_location_world();
        state.move_to(BiomeRef::new(0, 1));
        state.move_to(BiomeRef::new(1, 0));
        state.move_to(BiomeRef::new(0, 0));
        state.move_to(BiomeRef::new(1, 0));

        let recent: Vec<_> = state.recent_biomes(3).map(Biome::biome_type).collect();
        assert_eq!(
            recent,
            vec![BiomeType::Shrinavans, BiomeType::Kuramarubs, BiomeType::Shrinavans]
        );
    }

    #[test]
    fn test_count_per_species() {
        let biome = Biome::new(
            BiomeType::Balbesburg,
            animals(&[
                AnimalKind::Slesanders,
                AnimalKind::Chuchunders,
                AnimalKind::Slesanders,
            ]),
        );
        assert_eq!(biome.count(AnimalKind::Slesanders), 2);
        assert_eq!(biome.count(AnimalKind::Chuchunders), 1);
        assert_eq!(biome.count(AnimalKind::Sisanders), 0);
    }

    #[test]
    fn test_counters_run_past_u32() {
        let mut state = two_location_world();
        state.ticks = u64::from(u32::MAX);
        state.current_biome_ticks = u64::from(u32::MAX);

        state.stay();
        state.advance_tick();

        assert_eq!(state.ticks(), u64::from(u32::MAX) + 1);
        assert_eq!(state.current_biome_ticks(), u64::from(u32::MAX) + 1);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut state = two_location_world();
        let snapshot = state.clone();
        state.move_to(BiomeRef::new(1, 0));
        assert!(snapshot.history().is_empty());
        assert_eq!(state.history().len(), 1);
    }
}
