//! Attack validation and dice battle resolution

pub mod resolver;

pub use resolver::{
    resolve_attack, resolve_attack_with_dice, AttackError, AttackOutcome, BattleDisposition,
    DicePair,
};
