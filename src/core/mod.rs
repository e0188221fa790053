//! Core simulation types: references, player, state, actions, RNG, configuration.
//!
//! These are the building blocks the catalog, pipeline and engine all share.

pub mod ids;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod action;
pub mod state;

pub use ids::BiomeRef;
pub use player::Player;
pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use config::SimConfig;
pub use error::{ConfigError, SimError};
pub use action::{ActionKind, Move, ProposedAction};
pub use state::{Biome, Location, WorldState};
