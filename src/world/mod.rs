//! World state - the fixed map of territories
//!
//! Read access is public; mutation is `pub(crate)` and only the battle
//! resolver calls it, so ownership and troop counts cannot drift from
//! anywhere else in the crate.

use serde::{Deserialize, Serialize};

use crate::core::config::{CONQUEST_GARRISON, TERRITORY_COUNT};
use crate::core::types::Faction;

/// A single territory on the map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    name: String,
    owner: Faction,
    troops: u32,
}

impl Territory {
    pub fn new(name: impl Into<String>, owner: Faction, troops: u32) -> Self {
        Self {
            name: name.into(),
            owner,
            troops,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> Faction {
        self.owner
    }

    pub fn troops(&self) -> u32 {
        self.troops
    }
}

/// The world map: an ordered, fixed-length sequence of territories
///
/// Positional index is territory identity for the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    territories: Vec<Territory>,
}

impl World {
    /// The reference map: five South American territories split between
    /// the four armies
    pub fn south_america() -> Self {
        Self::from_territories(vec![
            Territory::new("Brasil", Faction::Azul, 5),
            Territory::new("Argentina", Faction::Verde, 3),
            Territory::new("Chile", Faction::Vermelho, 4),
            Territory::new("Peru", Faction::Verde, 2),
            Territory::new("Uruguai", Faction::Amarelo, 3),
        ])
    }

    /// Build a world from an explicit territory list
    ///
    /// Intended for scenario setup in tests; the list is expected to hold
    /// exactly [`TERRITORY_COUNT`] entries.
    pub fn from_territories(territories: Vec<Territory>) -> Self {
        debug_assert_eq!(territories.len(), TERRITORY_COUNT);
        Self { territories }
    }

    pub fn get(&self, index: usize) -> Option<&Territory> {
        self.territories.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Territory> {
        self.territories.iter()
    }

    pub fn len(&self) -> usize {
        self.territories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    /// Number of territories currently held by the given faction
    pub fn count_owned_by(&self, faction: Faction) -> usize {
        self.territories
            .iter()
            .filter(|t| t.owner == faction)
            .count()
    }

    /// Whether the given faction still holds any territory
    pub fn has_faction(&self, faction: Faction) -> bool {
        self.territories.iter().any(|t| t.owner == faction)
    }

    /// Remove one troop from the territory, returning the remaining count.
    ///
    /// Battle-resolver only. The resolver's garrison precondition keeps
    /// counts from underflowing; saturating here is the backstop.
    pub(crate) fn lose_troop(&mut self, index: usize) -> u32 {
        let territory = &mut self.territories[index];
        territory.troops = territory.troops.saturating_sub(1);
        territory.troops
    }

    /// Hand the territory to a new owner with a fresh conquest garrison.
    ///
    /// Battle-resolver only. A territory is never left at zero troops
    /// between turns; capture immediately restores the garrison floor.
    pub(crate) fn capture(&mut self, index: usize, new_owner: Faction) {
        let territory = &mut self.territories[index];
        territory.owner = new_owner;
        territory.troops = CONQUEST_GARRISON;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_map_layout() {
        let world = World::south_america();
        assert_eq!(world.len(), TERRITORY_COUNT);

        let expected = [
            ("Brasil", Faction::Azul, 5),
            ("Argentina", Faction::Verde, 3),
            ("Chile", Faction::Vermelho, 4),
            ("Peru", Faction::Verde, 2),
            ("Uruguai", Faction::Amarelo, 3),
        ];
        for (i, (name, owner, troops)) in expected.iter().enumerate() {
            let territory = world.get(i).unwrap();
            assert_eq!(territory.name(), *name);
            assert_eq!(territory.owner(), *owner);
            assert_eq!(territory.troops(), *troops);
        }
    }

    #[test]
    fn test_count_owned_by() {
        let world = World::south_america();
        assert_eq!(world.count_owned_by(Faction::Azul), 1);
        assert_eq!(world.count_owned_by(Faction::Verde), 2);
        assert_eq!(world.count_owned_by(Faction::Vermelho), 1);
        assert_eq!(world.count_owned_by(Faction::Amarelo), 1);
    }

    #[test]
    fn test_has_faction() {
        let mut world = World::south_america();
        assert!(world.has_faction(Faction::Verde));

        world.capture(1, Faction::Azul);
        world.capture(3, Faction::Azul);
        assert!(!world.has_faction(Faction::Verde));
    }

    #[test]
    fn test_lose_troop_returns_remaining() {
        let mut world = World::south_america();
        assert_eq!(world.lose_troop(1), 2);
        assert_eq!(world.lose_troop(1), 1);
        assert_eq!(world.lose_troop(1), 0);
        // Saturates rather than underflowing
        assert_eq!(world.lose_troop(1), 0);
    }

    #[test]
    fn test_capture_restores_garrison() {
        let mut world = World::south_america();
        while world.lose_troop(3) > 0 {}
        world.capture(3, Faction::Azul);

        let peru = world.get(3).unwrap();
        assert_eq!(peru.owner(), Faction::Azul);
        assert_eq!(peru.troops(), CONQUEST_GARRISON);
    }

    #[test]
    fn test_get_out_of_range() {
        let world = World::south_america();
        assert!(world.get(TERRITORY_COUNT).is_none());
    }
}
