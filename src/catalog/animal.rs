//! Animal species living in biomes.

use serde::{Deserialize, Serialize};

/// The species found in Durland.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimalKind {
    Slesanders,
    Sisanders,
    Chuchunders,
}

impl AnimalKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            AnimalKind::Slesanders => "Slesanders",
            AnimalKind::Sisanders => "Sisanders",
            AnimalKind::Chuchunders => "Chuchunders",
        }
    }
}

impl std::fmt::Display for AnimalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One animal present in a biome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Animal {
    pub kind: AnimalKind,
}

impl Animal {
    #[must_use]
    pub const fn new(kind: AnimalKind) -> Self {
        Self { kind }
    }
}
