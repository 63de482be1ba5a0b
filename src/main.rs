//! Warfront - Entry Point
//!
//! Interactive console loop around the session core: renders the map,
//! mission panel, and menu, parses player input, and feeds commands to
//! the session until victory or quit.

use clap::Parser;

use warfront::core::error::Result;
use warfront::core::types::Faction;
use warfront::session::{Command, Session};
use warfront::ui;

#[derive(Parser)]
#[command(name = "warfront", about = "Territory-conquest console wargame")]
struct Cli {
    /// Seed for the mission draw and the dice; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Army color to command
    #[arg(long, default_value = "Azul")]
    player: Faction,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("warfront=info")
        .init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(rand::random);

    let mut session = Session::new(cli.player, seed);

    ui::print_banner(session.player());
    println!();
    ui::print_mission(session.mission());
    ui::wait_for_enter("Press ENTER to begin...")?;

    while !session.is_terminated() {
        println!();
        ui::print_map(session.world());
        ui::print_mission(session.mission());
        ui::print_menu();

        let choice = ui::read_line("\nChoose an option: ")?;
        let outcome = match choice.as_str() {
            "1" => match read_attack_command()? {
                Some(command) => session.handle(command),
                None => {
                    println!("\nThat is not a territory id on the map.");
                    ui::wait_for_enter("\nPress ENTER to continue...")?;
                    continue;
                }
            },
            "2" => session.handle(Command::CheckMission),
            "0" => session.handle(Command::Quit),
            _ => {
                println!("\nInvalid option! Try again.");
                ui::wait_for_enter("\nPress ENTER to continue...")?;
                continue;
            }
        };

        ui::print_outcome(session.world(), &outcome);

        if !session.is_terminated() {
            ui::wait_for_enter("\nPress ENTER to continue...")?;
        }
    }

    Ok(())
}

/// Collect origin and target for an attack, in 1-based display ids
///
/// Returns `None` when either input is not a positive number; ids beyond
/// the map go through so the resolver reports them.
fn read_attack_command() -> Result<Option<Command>> {
    println!("\n--- ATTACK PHASE ---");

    let origin = ui::prompt_territory_id("Choose the ORIGIN territory (attacker): ")?;
    let target = ui::prompt_territory_id("Choose the TARGET territory (defender): ")?;

    match (origin, target) {
        (Some(origin), Some(target)) => Ok(Some(Command::Attack { origin, target })),
        _ => Ok(None),
    }
}
