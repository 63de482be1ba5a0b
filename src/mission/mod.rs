//! Secret missions and victory evaluation

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::{CONQUER_TARGET, ELIMINATION_TARGET};
use crate::core::types::Faction;
use crate::world::World;

/// A secret victory condition, drawn once at session start and fixed for
/// the session's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mission {
    /// Wipe the target army off the map entirely
    EliminateFaction(Faction),
    /// Hold at least this many territories
    ConquerCount(usize),
}

impl Mission {
    /// Draw a mission uniformly from the pool
    pub fn draw(rng: &mut impl Rng) -> Self {
        let mission = match rng.gen_range(0..2) {
            0 => Mission::EliminateFaction(ELIMINATION_TARGET),
            _ => Mission::ConquerCount(CONQUER_TARGET),
        };
        tracing::debug!("mission drawn: {:?}", mission);
        mission
    }

    /// Whether the victory condition currently holds
    ///
    /// Pure read over the world; safe to call any number of times per turn.
    pub fn is_complete(&self, world: &World, player: Faction) -> bool {
        match self {
            Mission::EliminateFaction(target) => !world.has_faction(*target),
            Mission::ConquerCount(minimum) => world.count_owned_by(player) >= *minimum,
        }
    }

    /// Fixed narrative for the mission panel
    pub fn describe(&self) -> String {
        match self {
            Mission::EliminateFaction(target) => format!(
                "Destroy the {} army completely! (conquer every {} territory)",
                target, target
            ),
            Mission::ConquerCount(minimum) => format!(
                "Conquer at least {} territories for your army! (hold {} or more)",
                minimum, minimum
            ),
        }
    }
}
