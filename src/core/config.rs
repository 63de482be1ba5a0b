//! Gameplay constants, all tunable values in one place

use crate::core::types::Faction;

/// Number of territories on the map
///
/// The map layout is fixed for the whole session; territory identity is
/// the positional index into the world, stable from start to finish.
pub const TERRITORY_COUNT: usize = 5;

/// Faces on each battle die
pub const DIE_SIDES: u32 = 6;

/// Minimum garrison required to launch an attack
///
/// An attacking territory can lose up to two troops in a single round
/// (one for the battle, one to garrison a captured territory), so this
/// floor keeps troop counts from ever going negative.
pub const MIN_ATTACK_TROOPS: u32 = 2;

/// Garrison placed in a territory at the moment it is captured
pub const CONQUEST_GARRISON: u32 = 1;

/// Territories the player must hold for the conquest mission
pub const CONQUER_TARGET: usize = 3;

/// Army the elimination mission is drawn against
pub const ELIMINATION_TARGET: Faction = Faction::Verde;
