//! Injectable randomness for probabilistic modifiers.
//!
//! ## Key Features
//!
//! - **Narrow interface**: modifiers only see [`RandomSource`]
//! - **Deterministic**: [`GameRng`] with the same seed produces identical rolls
//! - **Scriptable**: [`ScriptedRng`] replays a fixed sequence for tests
//!
//! ## Usage
//!
//! ```
//! use durland::core::{GameRng, RandomSource, ScriptedRng};
//!
//! let mut rng = GameRng::new(42);
//! let roll = rng.next_f32();
//! assert!((0.0..1.0).contains(&roll));
//!
//! // Scripted rolls make a 33% rule fire, then not fire.
//! let mut scripted = ScriptedRng::new([0.1, 0.9]);
//! assert!(scripted.chance(0.33));
//! assert!(!scripted.chance(0.33));
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform rolls in `[0, 1)`.
///
/// Every probabilistic rule in the catalog draws through this trait, so the
/// engine never touches global randomness.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn next_f32(&mut self) -> f32;

    /// Roll once and report whether it landed under `probability`.
    fn chance(&mut self, probability: f32) -> bool {
        self.next_f32() < probability
    }
}

/// Seeded RNG used for real runs.
///
/// Uses ChaCha8 for speed while keeping runs reproducible from a seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn next_f32(&mut self) -> f32 {
        self.inner.gen::<f32>()
    }
}

/// Replays a fixed sequence of rolls.
///
/// Once the script runs out, every further roll returns `fallback`
/// (defaults to `0.999`, i.e. "no rule fires").
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    rolls: VecDeque<f32>,
    fallback: f32,
    drawn: usize,
}

impl ScriptedRng {
    /// Script the given rolls.
    pub fn new(rolls: impl IntoIterator<Item = f32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            fallback: 0.999,
            drawn: 0,
        }
    }

    /// A source that always returns the same roll.
    #[must_use]
    pub fn constant(roll: f32) -> Self {
        Self {
            rolls: VecDeque::new(),
            fallback: roll,
            drawn: 0,
        }
    }

    /// Set the roll returned after the script is exhausted.
    #[must_use]
    pub fn with_fallback(mut self, roll: f32) -> Self {
        self.fallback = roll;
        self
    }

    /// Number of rolls drawn so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl RandomSource for ScriptedRng {
    fn next_f32(&mut self) -> f32 {
        self.drawn += 1;
        self.rolls.pop_front().unwrap_or(self.fallback)
    }
}
