//! The fixed catalog of Durland: races, nations, biome types and animals.
//!
//! Every family is a closed enum. Nations and biome types carry their action
//! rules as `match` arms implementing [`ActionModifier`](crate::rules::ActionModifier);
//! races and animals are identities only.
//!
//! | Race       | Nations                    |
//! |------------|----------------------------|
//! | Shlendrics | Mozhors, Nisheborods       |
//! | Hipstics   | Soevs, Prosvelens          |
//! | Skufics    | Droncents, Zheleznouhs     |

pub mod animal;
pub mod race;
pub mod nation;
pub mod biome;

pub use animal::{Animal, AnimalKind};
pub use race::Race;
pub use nation::Nation;
pub use biome::BiomeType;
