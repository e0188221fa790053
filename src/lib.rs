//! # durland
//!
//! A turn-based survival simulation. One player with three depleting
//! resources (health, money, satisfaction) wanders the biomes of Durland and
//! acts once per tick; the run ends when any resource reaches zero.
//!
//! ## Design Principles
//!
//! 1. **Closed catalogs**: races, nations, biome types and animals are enums.
//!    Their rules are `match` arms, not trait objects registered at runtime.
//!
//! 2. **Single writer**: the engine holds the only `&mut WorldState`.
//!    Strategies and modifiers read it through shared borrows.
//!
//! 3. **Injected randomness**: every probabilistic rule draws from a
//!    `RandomSource`, so tests script the rolls.
//!
//! ## Tick
//!
//! Strategy move → strategy action → nation modifier → biome modifier →
//! commit → termination check → tick counter.
//!
//! ## Modules
//!
//! - `core`: references, player, world state, actions, RNG, configuration
//! - `catalog`: races, nations, biome types, animals
//! - `rules`: the modifier trait and the action pipeline
//! - `engine`: the tick function and the run loop
//! - `strategy`: the policy trait and the idle policy
//! - `world`: the seed map and a builder for custom maps
//! - `report`: per-tick output sinks

pub mod core;
pub mod catalog;
pub mod rules;
pub mod engine;
pub mod strategy;
pub mod world;
pub mod report;

// Re-export commonly used types
pub use crate::core::{
    BiomeRef, Player,
    GameRng, RandomSource, ScriptedRng,
    SimConfig, ConfigError, SimError,
    ActionKind, Move, ProposedAction,
    Biome, Location, WorldState,
};

pub use crate::catalog::{Animal, AnimalKind, BiomeType, Nation, Race};

pub use crate::rules::ActionModifier;

pub use crate::engine::{RunSummary, Simulation, TickResult};

pub use crate::strategy::{IdleStrategy, Strategy};

pub use crate::world::WorldBuilder;

pub use crate::report::{ReportSink, StdoutReporter};
