//! One round of combat between two territories
//!
//! Indices are 0-based storage indices; the presentation layer owns the
//! 1-based display adjustment. Ties favor the defender (strict `>`).

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::config::{DIE_SIDES, MIN_ATTACK_TROOPS};
use crate::core::types::Faction;
use crate::world::World;

/// A rejected attack request. No world mutation occurs on any of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AttackError {
    #[error("territory {0} does not exist")]
    OutOfRange(usize),

    #[error("a territory cannot attack itself")]
    SelfAttack,

    #[error("the attacking territory does not belong to the {0} army")]
    NotOwner(Faction),

    #[error("the target territory already belongs to the {0} army")]
    FriendlyTarget(Faction),

    #[error("at least 2 troops are required to attack")]
    InsufficientTroops,
}

/// One six-sided die per side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DicePair {
    pub attacker: u32,
    pub defender: u32,
}

impl DicePair {
    pub fn roll(rng: &mut impl Rng) -> Self {
        Self {
            attacker: rng.gen_range(1..=DIE_SIDES),
            defender: rng.gen_range(1..=DIE_SIDES),
        }
    }
}

/// How the round went for the defending territory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleDisposition {
    /// Tie or defender roll won; the attacker lost one troop
    DefenderHeld,
    /// Attacker roll won; the defender lost one troop but kept the territory
    DefenderLostTroop,
    /// The defending garrison hit zero and the territory changed hands
    TerritoryCaptured,
}

/// Result of one resolved round, for the presentation layer to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOutcome {
    pub origin: usize,
    pub target: usize,
    pub dice: DicePair,
    pub disposition: BattleDisposition,
    /// Troops left in the attacking territory after the round
    pub origin_troops: u32,
    /// Troops left in the defending territory after the round
    pub target_troops: u32,
    /// Owner of the defending territory after the round
    pub target_owner: Faction,
}

impl AttackOutcome {
    pub fn captured(&self) -> bool {
        self.disposition == BattleDisposition::TerritoryCaptured
    }
}

/// Resolve one round of combat, drawing one die per side from `rng`
///
/// # Arguments
/// * `origin` - 0-based index of the attacking territory
/// * `target` - 0-based index of the defending territory
/// * `player` - faction launching the attack
///
/// # Returns
/// The outcome record on success; the violated rule otherwise, with the
/// world untouched.
pub fn resolve_attack(
    world: &mut World,
    origin: usize,
    target: usize,
    player: Faction,
    rng: &mut impl Rng,
) -> Result<AttackOutcome, AttackError> {
    validate(world, origin, target, player)?;
    let dice = DicePair::roll(rng);
    Ok(apply(world, origin, target, player, dice))
}

/// Resolve one round of combat with forced dice
///
/// Same validation and battle math as [`resolve_attack`]; the dice are
/// supplied by the caller instead of drawn, so deterministic scenarios
/// are expressible.
pub fn resolve_attack_with_dice(
    world: &mut World,
    origin: usize,
    target: usize,
    player: Faction,
    dice: DicePair,
) -> Result<AttackOutcome, AttackError> {
    validate(world, origin, target, player)?;
    Ok(apply(world, origin, target, player, dice))
}

/// Check the attack preconditions, in order, without touching the world
fn validate(
    world: &World,
    origin: usize,
    target: usize,
    player: Faction,
) -> Result<(), AttackError> {
    let attacker = world.get(origin).ok_or(AttackError::OutOfRange(origin))?;
    let defender = world.get(target).ok_or(AttackError::OutOfRange(target))?;

    if origin == target {
        return Err(AttackError::SelfAttack);
    }
    if attacker.owner() != player {
        return Err(AttackError::NotOwner(player));
    }
    if defender.owner() == player {
        return Err(AttackError::FriendlyTarget(player));
    }
    if attacker.troops() < MIN_ATTACK_TROOPS {
        return Err(AttackError::InsufficientTroops);
    }

    Ok(())
}

/// Apply the battle math for an already-validated attack
fn apply(
    world: &mut World,
    origin: usize,
    target: usize,
    player: Faction,
    dice: DicePair,
) -> AttackOutcome {
    let disposition = if dice.attacker > dice.defender {
        let remaining = world.lose_troop(target);
        if remaining == 0 {
            // Capture: the territory flips to the player and one attacker
            // troop moves in as its garrison.
            world.capture(target, player);
            world.lose_troop(origin);
            BattleDisposition::TerritoryCaptured
        } else {
            BattleDisposition::DefenderLostTroop
        }
    } else {
        world.lose_troop(origin);
        BattleDisposition::DefenderHeld
    };

    let attacker = world.get(origin).expect("indices validated before apply");
    let defender = world.get(target).expect("indices validated before apply");

    if disposition == BattleDisposition::TerritoryCaptured {
        tracing::info!("{} captured by the {} army", defender.name(), player);
    }
    tracing::debug!(
        "battle {} -> {}: rolled {} vs {}, {:?}",
        attacker.name(),
        defender.name(),
        dice.attacker,
        dice.defender,
        disposition
    );

    AttackOutcome {
        origin,
        target,
        dice,
        disposition,
        origin_troops: attacker.troops(),
        target_troops: defender.troops(),
        target_owner: defender.owner(),
    }
}
