use std::fmt;

use serde::Deserialize;

use crate::game::error::GameError;

/// The fixed roster of playable characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Character {
    JohnReese,
    HaroldFinch,
    SameenShaw,
    Root,
}

impl Character {
    /// Every character, in the order the selection menu lists them.
    pub const ALL: [Character; 4] = [
        Character::JohnReese,
        Character::HaroldFinch,
        Character::SameenShaw,
        Character::Root,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Character::JohnReese => "John Reese",
            Character::HaroldFinch => "Harold Finch",
            Character::SameenShaw => "Sameen Shaw",
            Character::Root => "Root",
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            Character::JohnReese => "Former Special Forces operative",
            Character::HaroldFinch => "Reclusive billionaire and tech genius",
            Character::SameenShaw => "Former government operative with a tough demeanor",
            Character::Root => "Mysterious hacker with a deep connection to the Machine",
        }
    }

    /// The line shown in the selection menu, e.g. `"Root: Mysterious hacker ..."`.
    pub fn menu_label(self) -> String {
        format!("{}: {}", self.name(), self.tagline())
    }

    /// Resolve a menu label (or a bare name) back to a character.
    ///
    /// Only the part before the first `:` is compared.
    pub fn from_label(label: &str) -> Result<Self, GameError> {
        let name = label.split_once(':').map_or(label, |(name, _)| name).trim();
        Character::ALL
            .into_iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| GameError::CharacterNotFound(name.to_string()))
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single decision point in a character's story.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MissionDefinition {
    /// Story arc the mission belongs to.
    pub season: u32,
    /// 1-based position within the track.
    pub sequence: u32,
    /// Narrative shown before the question.
    pub description: String,
    /// The question put to the player.
    pub prompt: String,
    /// Selectable answers in canonical order.
    pub options: Vec<String>,
    /// The one answer that advances the story. Always a member of `options`.
    pub correct: String,
}

impl MissionDefinition {
    pub fn offers(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

/// The ordered missions played by one character.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CharacterTrack {
    pub character: Character,
    pub missions: Vec<MissionDefinition>,
}

impl CharacterTrack {
    pub fn len(&self) -> usize {
        self.missions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MissionDefinition> {
        self.missions.get(index)
    }
}
