//! Lightweight references into the world tree.
//!
//! The world owns its locations and biomes; everything else (current biome,
//! visit history, move targets) refers to a biome by position.
//!
//! ```
//! use durland::core::BiomeRef;
//!
//! let first = BiomeRef::new(0, 0);
//! let beach = BiomeRef::new(1, 1);
//!
//! assert_ne!(first, beach);
//! assert_eq!(format!("{}", beach), "Biome(1:1)");
//! ```

use serde::{Deserialize, Serialize};

/// Position of a biome: index of its location, then index within that location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BiomeRef {
    /// Index into the world's locations.
    pub location: usize,
    /// Index into that location's biomes.
    pub biome: usize,
}

impl BiomeRef {
    /// Create a new biome reference.
    #[must_use]
    pub const fn new(location: usize, biome: usize) -> Self {
        Self { location, biome }
    }

    /// The first biome of the first location, where every run starts.
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0, 0)
    }
}

impl std::fmt::Display for BiomeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Biome({}:{})", self.location, self.biome)
    }
}
