//! Player races. Each race is shared by two nations.

use serde::{Deserialize, Serialize};

/// The player's species. Purely an identity for now.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Race {
    Shlendrics,
    Hipstics,
    Skufics,
}

impl Race {
    pub const ALL: [Race; 3] = [Race::Shlendrics, Race::Hipstics, Race::Skufics];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Race::Shlendrics => "Shlendrics",
            Race::Hipstics => "Hipstics",
            Race::Skufics => "Skufics",
        }
    }
}

impl std::fmt::Display for Race {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Nation;

    #[test]
    fn test_every_race_has_two_nations() {
        for race in Race::ALL {
            let nations = Nation::ALL.iter().filter(|n| n.race() == race).count();
            assert_eq!(nations, 2, "{race}");
        }
    }

    #[test]
    fn test_every_nation_race_is_listed() {
        for nation in Nation::ALL {
            assert!(Race::ALL.contains(&nation.race()));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Race::Skufics.to_string(), "Skufics");
    }
}
