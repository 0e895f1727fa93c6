//! Error types for the mission engine.

use std::path::PathBuf;

use thiserror::Error;

use crate::game::mission::Character;
use crate::game::progression::Phase;

pub type GameResult<T> = Result<T, GameError>;

/// Errors raised while driving a playthrough.
#[derive(Debug, Error)]
pub enum GameError {
    /// The chosen character has no track, or the label names nobody on the roster.
    #[error("character not found: {0}")]
    CharacterNotFound(String),

    /// The prompt handed back something that was never offered.
    #[error("invalid selection {selected:?} for mission {sequence}")]
    InvalidSelection { selected: String, sequence: u32 },

    /// The controller was driven out of order.
    #[error("cannot {action} while {phase:?}")]
    InvalidTransition { action: &'static str, phase: Phase },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Data-integrity problems found while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{0} has more than one track")]
    DuplicateTrack(Character),

    #[error("{0} has no missions")]
    EmptyTrack(Character),

    #[error("{character}: mission numbers must increase from 1, found {found} after {previous}")]
    SequenceOrder {
        character: Character,
        previous: u32,
        found: u32,
    },

    #[error("{character} mission {sequence} offers no options")]
    EmptyOptions { character: Character, sequence: u32 },

    #[error("{character} mission {sequence} lists {option:?} twice")]
    DuplicateOption {
        character: Character,
        sequence: u32,
        option: String,
    },

    #[error("{character} mission {sequence}: correct option {correct:?} is not offered")]
    CorrectOptionMissing {
        character: Character,
        sequence: u32,
        correct: String,
    },

    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("cannot read catalog {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
