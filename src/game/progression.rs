//! The progression controller: a small state machine that owns one
//! playthrough's mutable state.
//!
//! ```text
//! AwaitingIdentity -> AwaitingCharacter -> InMission(i) -> MissionResolved(i, outcome)
//!     MissionResolved(i, Correct)   -> InMission(i + 1) | Completed
//!     MissionResolved(i, Incorrect) -> Restarting -> AwaitingIdentity
//! ```
//!
//! Every transition checks the current phase; driving the controller out of
//! order returns [`GameError::InvalidTransition`].

use log::info;

use crate::game::catalog::Catalog;
use crate::game::error::{GameError, GameResult};
use crate::game::evaluator::{evaluate, Outcome};
use crate::game::mission::{Character, CharacterTrack, MissionDefinition};

/// Name used when the player leaves the name prompt blank.
pub const DEFAULT_PLAYER_NAME: &str = "Agent";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingIdentity,
    AwaitingCharacter,
    InMission(usize),
    MissionResolved(usize, Outcome),
    Restarting,
    Completed,
}

/// Mutable state of a single attempt. Replaced wholesale on restart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerSession {
    pub player_name: String,
    pub character: Option<Character>,
    /// 0-based cursor into the track.
    pub current_index: usize,
    pub completed_count: usize,
}

/// Summary handed back once a track is finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub player_name: String,
    pub character: Character,
    pub completed: usize,
    pub total: usize,
    /// Attempts taken, counting the successful one.
    pub attempts: usize,
}

pub struct Progression<'c> {
    catalog: &'c Catalog,
    track: Option<&'c CharacterTrack>,
    session: PlayerSession,
    phase: Phase,
    attempts: usize,
}

impl<'c> Progression<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            track: None,
            session: PlayerSession::default(),
            phase: Phase::AwaitingIdentity,
            attempts: 1,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> &PlayerSession {
        &self.session
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn track(&self) -> Option<&'c CharacterTrack> {
        self.track
    }

    /// The mission currently awaiting an answer, if any.
    pub fn current_mission(&self) -> Option<&'c MissionDefinition> {
        match self.phase {
            Phase::InMission(i) => self.track.and_then(|t| t.get(i)),
            _ => None,
        }
    }

    fn invalid(&self, action: &'static str) -> GameError {
        GameError::InvalidTransition {
            action,
            phase: self.phase,
        }
    }

    pub fn submit_name(&mut self, name: &str) -> GameResult<()> {
        if self.phase != Phase::AwaitingIdentity {
            return Err(self.invalid("submit a name"));
        }
        let name = name.trim();
        self.session.player_name = if name.is_empty() {
            DEFAULT_PLAYER_NAME.to_string()
        } else {
            name.to_string()
        };
        self.phase = Phase::AwaitingCharacter;
        Ok(())
    }

    /// Resolve the character's track and enter the first mission.
    ///
    /// A character missing from the catalog leaves the phase unchanged and
    /// returns [`GameError::CharacterNotFound`]; callers treat it as fatal.
    pub fn choose_character(&mut self, character: Character) -> GameResult<&'c CharacterTrack> {
        if self.phase != Phase::AwaitingCharacter {
            return Err(self.invalid("choose a character"));
        }
        let track = self.catalog.track(character)?;
        info!(
            "{} chose {character} ({} missions)",
            self.session.player_name,
            track.len()
        );
        self.session.character = Some(character);
        self.track = Some(track);
        self.phase = Phase::InMission(0);
        Ok(track)
    }

    pub fn answer(&mut self, selected: &str) -> GameResult<Outcome> {
        let Phase::InMission(i) = self.phase else {
            return Err(self.invalid("answer"));
        };
        let mission = self
            .current_mission()
            .ok_or_else(|| self.invalid("answer"))?;
        let outcome = evaluate(mission, selected)?;
        if outcome == Outcome::Correct {
            self.session.completed_count += 1;
        }
        self.phase = Phase::MissionResolved(i, outcome);
        Ok(outcome)
    }

    /// Leave a resolved mission: next mission, completion, or restart.
    pub fn advance(&mut self) -> GameResult<Phase> {
        let Phase::MissionResolved(i, outcome) = self.phase else {
            return Err(self.invalid("advance"));
        };
        let total = self.track.map_or(0, CharacterTrack::len);
        self.phase = match outcome {
            Outcome::Correct => {
                self.session.current_index = i + 1;
                if i + 1 < total {
                    Phase::InMission(i + 1)
                } else {
                    info!(
                        "{} completed all {total} missions",
                        self.session.player_name
                    );
                    Phase::Completed
                }
            }
            Outcome::Incorrect => {
                info!(
                    "{} failed mission {} of {total}",
                    self.session.player_name,
                    i + 1
                );
                Phase::Restarting
            }
        };
        Ok(self.phase)
    }

    /// Discard the failed attempt and wait for a new identity.
    pub fn restart(&mut self) -> GameResult<()> {
        if self.phase != Phase::Restarting {
            return Err(self.invalid("restart"));
        }
        self.session = PlayerSession::default();
        self.track = None;
        self.attempts += 1;
        self.phase = Phase::AwaitingIdentity;
        info!("Restarting, attempt {}", self.attempts);
        Ok(())
    }

    pub fn report(&self) -> GameResult<SessionReport> {
        match (self.phase, self.session.character, self.track) {
            (Phase::Completed, Some(character), Some(track)) => Ok(SessionReport {
                player_name: self.session.player_name.clone(),
                character,
                completed: self.session.completed_count,
                total: track.len(),
                attempts: self.attempts,
            }),
            _ => Err(self.invalid("report")),
        }
    }
}
