//! The sole actor and its three depleting resources.
//!
//! A player is alive while health, money and satisfaction are all strictly
//! positive. Resources are plain `f32` accumulators: nothing clamps them, so a
//! dying tick can push them below zero.

use serde::{Deserialize, Serialize};

use crate::catalog::{Nation, Race};

/// The player entity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub race: Race,
    pub nation: Nation,

    pub health: f32,
    pub money: f32,
    pub satisfaction: f32,
}

impl Player {
    /// Create a player with the given affiliations and starting resources.
    ///
    /// Panics if any starting resource is not positive.
    pub fn new(race: Race, nation: Nation, health: f32, money: f32, satisfaction: f32) -> Self {
        assert!(
            health > 0.0 && money > 0.0 && satisfaction > 0.0,
            "Starting resources must be positive"
        );

        Self {
            race,
            nation,
            health,
            money,
            satisfaction,
        }
    }

    /// True while every resource is strictly positive.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0.0 && self.money > 0.0 && self.satisfaction > 0.0
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Race::Shlendrics, Nation::Mozhors, 10.0, 10.0, 10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_player() {
        let player = Player::default();
        assert_eq!(player.race, Race::Shlendrics);
        assert_eq!(player.nation, Nation::Mozhors);
        assert_eq!(player.health, 10.0);
        assert_eq!(player.money, 10.0);
        assert_eq!(player.satisfaction, 10.0);
        assert!(player.is_alive());
    }

    #[test]
    fn test_any_resource_at_zero_is_dead() {
        let mut player = Player::default();
        player.money = 0.0;
        assert!(!player.is_alive());

        let mut player = Player::default();
        player.satisfaction = -0.01;
        assert!(!player.is_alive());
    }

    #[test]
    #[should_panic(expected = "Starting resources must be positive")]
    fn test_non_positive_start_panics() {
        Player::new(Race::Hipstics, Nation::Soevs, 10.0, 0.0, 10.0);
    }
}
