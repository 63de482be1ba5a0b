//! Console presentation - map, menus, prompts, battle reports
//!
//! This layer owns the 1-based territory ids shown to the player and
//! converts them to the core's 0-based indices before any command is
//! built. The core modules never print or read anything.

use std::io::{self, Write};

use crate::battle::{AttackOutcome, BattleDisposition};
use crate::core::types::Faction;
use crate::mission::Mission;
use crate::session::TurnOutcome;
use crate::world::World;

pub fn print_banner(player: Faction) {
    println!("===========================================================");
    println!("                WELCOME TO WARFRONT");
    println!("===========================================================");
    println!();
    println!("You command the {} army!", player);
}

pub fn print_map(world: &World) {
    println!("--- WORLD MAP ---");
    println!("  Id | Territory    | Army      | Troops");
    println!(" ----+--------------+-----------+-------");
    for (i, territory) in world.iter().enumerate() {
        println!(
            "  {:>2} | {:<12} | {:<9} | {:>5}",
            i + 1,
            territory.name(),
            territory.owner(),
            territory.troops()
        );
    }
    println!();
}

pub fn print_mission(mission: Mission) {
    println!("--- YOUR SECRET MISSION ---");
    println!("  {}", mission.describe());
    println!();
}

pub fn print_menu() {
    println!("--- MAIN MENU ---");
    println!("  1 - Attack a territory");
    println!("  2 - Check your mission");
    println!("  0 - Quit the game");
}

/// Render the result of a handled command
pub fn print_outcome(world: &World, outcome: &TurnOutcome) {
    match outcome {
        TurnOutcome::Battle(battle) => print_battle(world, battle),
        TurnOutcome::Rejected(rule) => println!("\nAttack rejected: {}.", rule),
        TurnOutcome::Victory => {
            println!("\nCONGRATULATIONS! YOU COMPLETED YOUR MISSION!");
            println!("You are the great winner of the war!");
        }
        TurnOutcome::MissionIncomplete => {
            println!("\nYour mission is not complete yet.");
            println!("Keep fighting for victory!");
        }
        TurnOutcome::Quit => println!("\nLeaving the battlefield. Until the next war!"),
    }
}

fn print_battle(world: &World, outcome: &AttackOutcome) {
    let origin_name = territory_name(world, outcome.origin);
    let target_name = territory_name(world, outcome.target);

    println!("\nDice rolled:");
    println!("  Attacker ({}): {}", origin_name, outcome.dice.attacker);
    println!("  Defender ({}): {}", target_name, outcome.dice.defender);

    match outcome.disposition {
        BattleDisposition::DefenderHeld => {
            println!("\nThe defender resisted! The attacker lost 1 troop.");
        }
        BattleDisposition::DefenderLostTroop => {
            println!("\nThe attacker won! The defender lost 1 troop.");
        }
        BattleDisposition::TerritoryCaptured => {
            println!(
                "\nTERRITORY CAPTURED! {} now belongs to the {} army!",
                target_name, outcome.target_owner
            );
        }
    }

    println!("\nState after the battle:");
    println!("  {}: {} troops", origin_name, outcome.origin_troops);
    println!(
        "  {}: {} troops ({})",
        target_name, outcome.target_troops, outcome.target_owner
    );
}

fn territory_name(world: &World, index: usize) -> &str {
    world.get(index).map(|t| t.name()).unwrap_or("?")
}

/// Print a prompt and read one trimmed line from stdin
pub fn read_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Pause until the player presses ENTER
pub fn wait_for_enter(prompt: &str) -> io::Result<()> {
    read_line(prompt).map(|_| ())
}

/// Prompt for a territory by its 1-based display id
///
/// Returns the 0-based storage index, or `None` when the input is not a
/// positive number. Ids beyond the map are passed through so the resolver
/// reports them as out of range.
pub fn prompt_territory_id(prompt: &str) -> io::Result<Option<usize>> {
    let raw = read_line(prompt)?;
    Ok(parse_territory_id(&raw))
}

/// Convert a raw 1-based id string to a 0-based index
pub fn parse_territory_id(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok()?.checked_sub(1)
}
