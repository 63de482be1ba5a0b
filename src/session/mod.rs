//! Session controller - the turn state machine
//!
//! Owns the world, the drawn mission, and the dice RNG. The core never
//! blocks or touches stdin/stdout; the presentation layer feeds it
//! already-parsed commands and renders the outcomes.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::battle::{self, AttackError, AttackOutcome};
use crate::core::types::Faction;
use crate::mission::Mission;
use crate::world::World;

/// A player command, parsed and index-adjusted by the presentation layer
///
/// Attack indices are 0-based storage indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Attack { origin: usize, target: usize },
    CheckMission,
    Quit,
}

/// Phase of the session state machine
///
/// `Attacking` and `CheckingMission` are passed through synchronously
/// while a command is being handled; `Terminated` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingCommand,
    Attacking,
    CheckingMission,
    Terminated,
}

/// What handling a command produced, for the presentation layer to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// An attack was resolved; the record carries dice and troop state
    Battle(AttackOutcome),
    /// The attack violated a rule; nothing changed
    Rejected(AttackError),
    /// The mission is complete and the session has terminated
    Victory,
    /// The mission is not complete yet; keep fighting
    MissionIncomplete,
    /// The session has terminated without victory
    Quit,
}

/// One player's game from setup to termination
#[derive(Debug)]
pub struct Session {
    world: World,
    mission: Mission,
    player: Faction,
    state: SessionState,
    rng: ChaCha8Rng,
}

impl Session {
    /// Start a session on the reference map with a freshly drawn mission
    pub fn new(player: Faction, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mission = Mission::draw(&mut rng);
        tracing::info!(
            "session started: player={}, seed={}, mission={:?}",
            player,
            seed,
            mission
        );
        Self {
            world: World::south_america(),
            mission,
            player,
            state: SessionState::AwaitingCommand,
            rng,
        }
    }

    /// Build a session from explicit parts
    ///
    /// Scenario setup hook: lets tests pin the world and mission instead
    /// of drawing them.
    pub fn from_parts(world: World, mission: Mission, player: Faction, seed: u64) -> Self {
        Self {
            world,
            mission,
            player,
            state: SessionState::AwaitingCommand,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn mission(&self) -> Mission {
        self.mission
    }

    pub fn player(&self) -> Faction {
        self.player
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state == SessionState::Terminated
    }

    /// Handle one command and return to `AwaitingCommand` or `Terminated`
    ///
    /// Commands arriving after termination are answered with
    /// [`TurnOutcome::Quit`]; the terminated state is absorbing.
    pub fn handle(&mut self, command: Command) -> TurnOutcome {
        if self.is_terminated() {
            return TurnOutcome::Quit;
        }

        match command {
            Command::Attack { origin, target } => {
                self.state = SessionState::Attacking;
                let result =
                    battle::resolve_attack(&mut self.world, origin, target, self.player, &mut self.rng);
                self.state = SessionState::AwaitingCommand;
                match result {
                    Ok(outcome) => TurnOutcome::Battle(outcome),
                    Err(rule) => {
                        tracing::debug!("attack rejected: {}", rule);
                        TurnOutcome::Rejected(rule)
                    }
                }
            }
            Command::CheckMission => {
                self.state = SessionState::CheckingMission;
                if self.mission.is_complete(&self.world, self.player) {
                    self.state = SessionState::Terminated;
                    tracing::info!("mission complete, session over");
                    TurnOutcome::Victory
                } else {
                    self.state = SessionState::AwaitingCommand;
                    TurnOutcome::MissionIncomplete
                }
            }
            Command::Quit => {
                self.state = SessionState::Terminated;
                tracing::info!("session quit by player");
                TurnOutcome::Quit
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Territory;

    const PLAYER: Faction = Faction::Azul;

    fn nearly_won_world() -> World {
        World::from_territories(vec![
            Territory::new("Brasil", Faction::Azul, 5),
            Territory::new("Argentina", Faction::Azul, 1),
            Territory::new("Chile", Faction::Azul, 2),
            Territory::new("Peru", Faction::Verde, 2),
            Territory::new("Uruguai", Faction::Amarelo, 3),
        ])
    }

    #[test]
    fn test_new_session_awaits_commands() {
        let session = Session::new(PLAYER, 1);
        assert_eq!(session.state(), SessionState::AwaitingCommand);
        assert!(!session.is_terminated());
        assert_eq!(session.world().len(), 5);
    }

    #[test]
    fn test_quit_terminates() {
        let mut session = Session::new(PLAYER, 1);
        assert_eq!(session.handle(Command::Quit), TurnOutcome::Quit);
        assert!(session.is_terminated());
    }

    #[test]
    fn test_terminated_is_absorbing() {
        let mut session = Session::new(PLAYER, 1);
        session.handle(Command::Quit);

        assert_eq!(
            session.handle(Command::Attack { origin: 0, target: 1 }),
            TurnOutcome::Quit
        );
        assert_eq!(session.handle(Command::CheckMission), TurnOutcome::Quit);
        assert!(session.is_terminated());
    }

    #[test]
    fn test_incomplete_mission_returns_to_awaiting() {
        let mut session = Session::new(PLAYER, 1);
        let outcome = session.handle(Command::CheckMission);
        assert_eq!(outcome, TurnOutcome::MissionIncomplete);
        assert_eq!(session.state(), SessionState::AwaitingCommand);
    }

    #[test]
    fn test_complete_mission_wins_and_terminates() {
        let mut session =
            Session::from_parts(nearly_won_world(), Mission::ConquerCount(3), PLAYER, 1);
        assert_eq!(session.handle(Command::CheckMission), TurnOutcome::Victory);
        assert!(session.is_terminated());
    }

    #[test]
    fn test_rejected_attack_keeps_session_alive() {
        let mut session = Session::new(PLAYER, 1);
        let outcome = session.handle(Command::Attack { origin: 0, target: 0 });
        assert_eq!(outcome, TurnOutcome::Rejected(AttackError::SelfAttack));
        assert_eq!(session.state(), SessionState::AwaitingCommand);
    }

    #[test]
    fn test_attack_resolves_and_reports_dice() {
        let mut session = Session::new(PLAYER, 1);
        match session.handle(Command::Attack { origin: 0, target: 1 }) {
            TurnOutcome::Battle(outcome) => {
                assert!((1..=6).contains(&outcome.dice.attacker));
                assert!((1..=6).contains(&outcome.dice.defender));
                assert_eq!(outcome.origin, 0);
                assert_eq!(outcome.target, 1);
            }
            other => panic!("expected a battle outcome, got {:?}", other),
        }
        assert_eq!(session.state(), SessionState::AwaitingCommand);
    }

    #[test]
    fn test_same_seed_same_session() {
        let mut a = Session::new(PLAYER, 99);
        let mut b = Session::new(PLAYER, 99);
        assert_eq!(a.mission(), b.mission());

        let command = Command::Attack { origin: 0, target: 1 };
        assert_eq!(a.handle(command), b.handle(command));
    }
}
