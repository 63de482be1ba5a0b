//! Warfront - Territory-Conquest Console Wargame

pub mod battle;
pub mod core;
pub mod mission;
pub mod session;
pub mod ui;
pub mod world;
