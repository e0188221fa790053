//! Run configuration.
//!
//! Callers describe a run with [`SimConfig`]:
//! - RNG seed for probabilistic modifiers
//! - The player's race and nation
//! - Starting health, money and satisfaction
//! - An optional tick guard for the run loop
//!
//! The binary reads overrides from the environment via [`SimConfig::from_env`].

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::Player;
use crate::catalog::{Nation, Race};

/// Environment variable holding the RNG seed.
pub const SEED_VAR: &str = "DURLAND_SEED";

/// Environment variable holding the tick guard.
pub const MAX_TICKS_VAR: &str = "DURLAND_MAX_TICKS";

/// Complete run configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Seed for the run's random source.
    pub seed: u64,

    pub race: Race,
    pub nation: Nation,

    pub starting_health: f32,
    pub starting_money: f32,
    pub starting_satisfaction: f32,

    /// Stop the run loop after this many ticks if the player is still alive.
    /// `None` runs until death.
    pub max_ticks: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            race: Race::Shlendrics,
            nation: Nation::Mozhors,
            starting_health: 10.0,
            starting_money: 10.0,
            starting_satisfaction: 10.0,
            max_ticks: None,
        }
    }
}

impl SimConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration with overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Default configuration with overrides from an arbitrary lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(SEED_VAR) {
            config.seed = parse_var(SEED_VAR, &raw)?;
        }
        if let Some(raw) = lookup(MAX_TICKS_VAR) {
            config.max_ticks = Some(parse_var(MAX_TICKS_VAR, &raw)?);
        }

        Ok(config)
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the nation; the race follows the nation's affiliation.
    #[must_use]
    pub fn with_nation(mut self, nation: Nation) -> Self {
        self.nation = nation;
        self.race = nation.race();
        self
    }

    #[must_use]
    pub fn with_resources(mut self, health: f32, money: f32, satisfaction: f32) -> Self {
        self.starting_health = health;
        self.starting_money = money;
        self.starting_satisfaction = satisfaction;
        self
    }

    #[must_use]
    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }

    /// Build the starting player.
    ///
    /// Panics if any starting resource is not positive.
    #[must_use]
    pub fn player(&self) -> Player {
        Player::new(
            self.race,
            self.nation,
            self.starting_health,
            self.starting_money,
            self.starting_satisfaction,
        )
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_default_config() {
        let config = SimConfig::new();
        assert_eq!(config.seed, 0);
        assert_eq!(config.nation, Nation::Mozhors);
        assert_eq!(config.race, Race::Shlendrics);
        assert_eq!(config.max_ticks, None);

        let player = config.player();
        assert_eq!(player.health, 10.0);
        assert!(player.is_alive());
    }

    #[test]
    fn test_builder() {
        let config = SimConfig::new()
            .with_seed(7)
            .with_nation(Nation::Prosvelens)
            .with_resources(5.0, 6.0, 7.0)
            .with_max_ticks(100);

        assert_eq!(config.seed, 7);
        assert_eq!(config.nation, Nation::Prosvelens);
        assert_eq!(config.race, Race::Hipstics);
        assert_eq!(config.max_ticks, Some(100));

        let player = config.player();
        assert_eq!(player.money, 6.0);
        assert_eq!(player.satisfaction, 7.0);
    }

    #[test]
    fn test_from_lookup_empty_is_default() {
        let config = SimConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config =
            SimConfig::from_lookup(lookup(&[(SEED_VAR, "1234"), (MAX_TICKS_VAR, " 50 ")])).unwrap();
        assert_eq!(config.seed, 1234);
        assert_eq!(config.max_ticks, Some(50));
    }

    #[test]
    fn test_max_ticks_beyond_u32() {
        let config = SimConfig::from_lookup(lookup(&[(MAX_TICKS_VAR, "5000000000")])).unwrap();
        assert_eq!(config.max_ticks, Some(5_000_000_000));
    }

    #[test]
    fn test_from_lookup_rejects_garbage() {
        let err = SimConfig::from_lookup(lookup(&[(SEED_VAR, "lots")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: SEED_VAR,
                value: "lots".to_string()
            }
        );
        assert_eq!(err.to_string(), "Invalid value for DURLAND_SEED: \"lots\"");
    }

    #[test]
    fn test_config_serde() {
        let config = SimConfig::new().with_nation(Nation::Zheleznouhs).with_max_ticks(3);
        let json = serde_json::to_string(&config).unwrap();
        let back: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
