//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::GameError;

/// Army color identifying a faction
///
/// The map only ever contains these four armies, so faction identity is a
/// closed enumeration rather than free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Azul,
    Verde,
    Vermelho,
    Amarelo,
}

impl Faction {
    pub const ALL: [Faction; 4] = [
        Faction::Azul,
        Faction::Verde,
        Faction::Vermelho,
        Faction::Amarelo,
    ];

    /// The army color name as shown on the map
    pub fn name(&self) -> &'static str {
        match self {
            Faction::Azul => "Azul",
            Faction::Verde => "Verde",
            Faction::Vermelho => "Vermelho",
            Faction::Amarelo => "Amarelo",
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Faction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Faction::ALL
            .iter()
            .copied()
            .find(|faction| faction.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GameError::UnknownFaction(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_name() {
        for faction in Faction::ALL {
            assert_eq!(faction.to_string(), faction.name());
        }
    }

    #[test]
    fn test_from_str_round_trips_display() {
        for faction in Faction::ALL {
            let parsed: Faction = faction.name().parse().unwrap();
            assert_eq!(parsed, faction);
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("azul".parse::<Faction>().unwrap(), Faction::Azul);
        assert_eq!("VERDE".parse::<Faction>().unwrap(), Faction::Verde);
        assert_eq!("  vermelho ".parse::<Faction>().unwrap(), Faction::Vermelho);
    }

    #[test]
    fn test_from_str_rejects_unknown_colors() {
        assert!("Roxo".parse::<Faction>().is_err());
        assert!("".parse::<Faction>().is_err());
    }
}
