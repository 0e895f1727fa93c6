pub mod catalog;
pub mod error;
pub mod evaluator;
pub mod mission;
pub mod progression;
pub mod shuffle;

#[cfg(test)]
mod script;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use log::{debug, info};
use rand::Rng;

use crate::console::{Presenter, Prompter};
use catalog::Catalog;
use mission::Character;
use progression::{Phase, Progression, SessionReport, DEFAULT_PLAYER_NAME};
use shuffle::shuffle;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

pub const USAGE: &str = "\
Usage: poi-directive [catalog.json|-] [seed] [pace_ms]\n\
\n\
  catalog.json  mission catalog to play instead of the built-in one\n\
  seed          seed for the option shuffler (random when omitted)\n\
  pace_ms       pause between steps in milliseconds (default 1500)\n\
\n\
Logging: set RUST_LOG=info or RUST_LOG=debug for verbose output";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Custom catalog file. `None` plays the built-in catalog.
    pub catalog_path: Option<PathBuf>,
    pub seed: Option<u64>,
    pub pace: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            seed: None,
            pace: Duration::from_millis(1500),
        }
    }
}

impl GameConfig {
    /// Build from positional arguments (program name already stripped).
    pub fn from_args(args: &[String]) -> Result<Self> {
        let defaults = Self::default();
        if let Some(extra) = args.get(3) {
            bail!("unexpected argument {extra:?}");
        }

        let catalog_path = args
            .first()
            .filter(|s| s.as_str() != "-")
            .map(PathBuf::from);
        let seed = args
            .get(1)
            .map(|s| s.parse::<u64>())
            .transpose()
            .context("seed must be an unsigned integer")?;
        let pace = args
            .get(2)
            .map(|s| s.parse::<u64>().map(Duration::from_millis))
            .transpose()
            .context("pace_ms must be an unsigned integer")?
            .unwrap_or(defaults.pace);

        Ok(Self {
            catalog_path,
            seed,
            pace,
        })
    }
}

// ---------------------------------------------------------------------------
// Session: runs attempts until one completes
// ---------------------------------------------------------------------------

const NAME_LABEL: &str = "What is your name?";
const CHARACTER_LABEL: &str = "Choose your character:";

/// Play until the player finishes a track.
///
/// A wrong answer sends the whole session back to the name prompt. Only an
/// unknown character or a collaborator failure ends the session early.
pub fn run<C, R>(console: &mut C, catalog: &Catalog, rng: &mut R) -> Result<SessionReport>
where
    C: Prompter + Presenter,
    R: Rng + ?Sized,
{
    let mut progression = Progression::new(catalog);
    let roster: Vec<String> = Character::ALL.iter().map(|c| c.menu_label()).collect();

    loop {
        match progression.phase() {
            Phase::AwaitingIdentity => {
                info!("Attempt {} started", progression.attempts());
                console.introduction();
                let name = console.text(NAME_LABEL, Some(DEFAULT_PLAYER_NAME))?;
                progression.submit_name(&name)?;
            }
            Phase::AwaitingCharacter => {
                let label = console.select(CHARACTER_LABEL, &roster)?;
                let character = Character::from_label(&label)?;
                progression.choose_character(character)?;
                console.character_chosen(character);
            }
            Phase::InMission(i) => {
                let mission = progression
                    .current_mission()
                    .with_context(|| format!("no mission at index {i}"))?;
                console.mission(mission);
                let options = shuffle(&mission.options, rng);
                debug!("Options presented as {options:?}");
                let selected = console.select(&mission.prompt, &options)?;
                let outcome = progression.answer(&selected)?;
                console.outcome(&progression.session().player_name, outcome);
            }
            Phase::MissionResolved(..) => {
                let next = progression.advance()?;
                if next != Phase::Restarting {
                    let total = progression.track().map_or(0, |t| t.len());
                    console.progress(progression.session().completed_count, total);
                }
            }
            Phase::Restarting => {
                console.restarting(&progression.session().player_name);
                progression.restart()?;
            }
            Phase::Completed => {
                let report = progression.report()?;
                console.completed(&report);
                return Ok(report);
            }
        }
    }
}
