use std::collections::{HashMap, HashSet};
use std::path::Path;

use log::{debug, trace};
use serde::Deserialize;

use crate::game::error::{CatalogError, GameError, GameResult};
use crate::game::mission::{Character, CharacterTrack, MissionDefinition};

/// Read-only lookup of every character's mission track.
#[derive(Debug, Clone)]
pub struct Catalog {
    tracks: HashMap<Character, CharacterTrack>,
}

/// On-disk shape of a catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    tracks: Vec<CharacterTrack>,
}

impl Catalog {
    /// Build a catalog, rejecting any track that breaks the data invariants.
    pub fn new(tracks: impl IntoIterator<Item = CharacterTrack>) -> Result<Self, CatalogError> {
        let mut map = HashMap::new();
        for track in tracks {
            validate_track(&track)?;
            let character = track.character;
            if map.insert(character, track).is_some() {
                return Err(CatalogError::DuplicateTrack(character));
            }
        }
        debug!("Catalog loaded with {} tracks", map.len());
        Ok(Self { tracks: map })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.tracks)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn track(&self, character: Character) -> GameResult<&CharacterTrack> {
        self.tracks
            .get(&character)
            .ok_or_else(|| GameError::CharacterNotFound(character.to_string()))
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

fn validate_track(track: &CharacterTrack) -> Result<(), CatalogError> {
    let character = track.character;
    if track.is_empty() {
        return Err(CatalogError::EmptyTrack(character));
    }

    let mut previous = 0;
    for mission in &track.missions {
        trace!("Validating {character} mission {}", mission.sequence);

        let in_order = if previous == 0 {
            mission.sequence == 1
        } else {
            mission.sequence > previous
        };
        if !in_order {
            return Err(CatalogError::SequenceOrder {
                character,
                previous,
                found: mission.sequence,
            });
        }
        previous = mission.sequence;

        if mission.options.is_empty() {
            return Err(CatalogError::EmptyOptions {
                character,
                sequence: mission.sequence,
            });
        }

        let mut seen = HashSet::new();
        for option in &mission.options {
            if !seen.insert(option.as_str()) {
                return Err(CatalogError::DuplicateOption {
                    character,
                    sequence: mission.sequence,
                    option: option.clone(),
                });
            }
        }

        if !mission.offers(&mission.correct) {
            return Err(CatalogError::CorrectOptionMissing {
                character,
                sequence: mission.sequence,
                correct: mission.correct.clone(),
            });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Person of Interest scenario
// ---------------------------------------------------------------------------

fn mission(
    season: u32,
    sequence: u32,
    description: &str,
    prompt: &str,
    options: [&str; 4],
    correct: &str,
) -> MissionDefinition {
    MissionDefinition {
        season,
        sequence,
        description: description.into(),
        prompt: prompt.into(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct: correct.into(),
    }
}

/// The built-in catalog: four missions for each member of the team.
pub fn person_of_interest() -> Result<Catalog, CatalogError> {
    let reese = CharacterTrack {
        character: Character::JohnReese,
        missions: vec![
            mission(
                1,
                1,
                "Reese investigates a lead on a new threat in the city.",
                "🔍 A lead on a dangerous group emerges. What do you do?",
                [
                    "Investigate the lead immediately 🚔",
                    "Set up surveillance and wait for more information 📹",
                    "Alert local law enforcement 🚓",
                    "Ignore the lead for now 🕵️‍♂️",
                ],
                "Investigate the lead immediately 🚔",
            ),
            mission(
                1,
                2,
                "Reese faces off against a dangerous adversary.",
                "💥 You encounter a known adversary. What is your strategy?",
                [
                    "Confront the adversary directly 💪",
                    "Gather intelligence and plan a careful attack 🕵️‍♂️",
                    "Seek help from allies 🤝",
                    "Retreat and regroup 🏃‍♂️",
                ],
                "Gather intelligence and plan a careful attack 🕵️‍♂️",
            ),
            mission(
                1,
                3,
                "Reese uncovers a conspiracy.",
                "🕵️‍♂️ You find evidence of a conspiracy. What is your next move?",
                [
                    "Investigate further to uncover the plot 🕵️‍♂️",
                    "Report the findings to the authorities 🗂️",
                    "Confront the people involved 😡",
                    "Destroy the evidence and leave it alone 🚫",
                ],
                "Investigate further to uncover the plot 🕵️‍♂️",
            ),
            mission(
                1,
                4,
                "Reese is tasked with rescuing a key witness.",
                "🚨 A witness is in danger. How do you proceed?",
                [
                    "Plan a covert rescue operation 🕵️‍♂️",
                    "Alert the police and coordinate with them 🚓",
                    "Attempt a direct rescue 🚨",
                    "Gather more information before taking action 🕵️‍♂️",
                ],
                "Plan a covert rescue operation 🕵️‍♂️",
            ),
        ],
    };

    let finch = CharacterTrack {
        character: Character::HaroldFinch,
        missions: vec![
            mission(
                2,
                1,
                "Finch works to protect the Machine from being discovered.",
                "🛡️ You need to secure a location for the Machine. What is your approach?",
                [
                    "Use advanced encryption to secure communications 🔐",
                    "Relocate the Machine to a new secure location 🏢",
                    "Employ additional security measures 🛡️",
                    "Leave it as it is and monitor for threats 🕵️‍♂️",
                ],
                "Use advanced encryption to secure communications 🔐",
            ),
            mission(
                2,
                2,
                "Finch faces ethical dilemmas about the Machine’s use.",
                "⚖️ The Machine’s capabilities are questioned. How do you respond?",
                [
                    "Explain the benefits of the Machine 💬",
                    "Restrict its use to essential operations only 🔒",
                    "Seek external opinions on its use 🗣️",
                    "Reevaluate the Machine’s capabilities 🔍",
                ],
                "Explain the benefits of the Machine 💬",
            ),
            mission(
                2,
                3,
                "Finch faces a cyber attack on his systems.",
                "💻 A hacker is attempting to breach your systems. How do you handle it?",
                [
                    "Deploy countermeasures to stop the attack 🛡️",
                    "Identify and trace the hacker 🔍",
                    "Isolate affected systems and analyze the breach 🕵️‍♂️",
                    "Wait and see if the attack subsides on its own ⏳",
                ],
                "Deploy countermeasures to stop the attack 🛡️",
            ),
            mission(
                2,
                4,
                "Finch needs to recruit a new ally.",
                "🤝 You need to bring someone into your team. What is your strategy?",
                [
                    "Offer them a high-stakes mission 🎯",
                    "Persuade them with a compelling argument 💬",
                    "Provide evidence of the Machine’s capabilities 💻",
                    "Gain their trust through small tasks 🕵️‍♂️",
                ],
                "Provide evidence of the Machine’s capabilities 💻",
            ),
        ],
    };

    let shaw = CharacterTrack {
        character: Character::SameenShaw,
        missions: vec![
            mission(
                3,
                1,
                "Shaw is undercover in a hostile environment.",
                "🔍 You’re undercover and need to blend in. What is your approach?",
                [
                    "Use a false identity and blend in 👤",
                    "Gather intel from informants 🗣️",
                    "Directly confront the organization 😠",
                    "Coordinate with law enforcement 🚓",
                ],
                "Use a false identity and blend in 👤",
            ),
            mission(
                3,
                2,
                "Shaw must negotiate with a dangerous contact.",
                "🗣️ You need to negotiate with a dangerous contact. What’s your approach?",
                [
                    "Be firm and assertive 💪",
                    "Offer them something valuable 💎",
                    "Attempt to manipulate their emotions 😈",
                    "Seek a middle ground and compromise 🤝",
                ],
                "Be firm and assertive 💪",
            ),
            mission(
                3,
                3,
                "Shaw encounters a betrayal within her team.",
                "💔 One of your team members has betrayed you. What do you do?",
                [
                    "Confront them directly 😠",
                    "Investigate the reasons behind the betrayal 🔍",
                    "Remove them from the team immediately 🚫",
                    "Seek reconciliation and understand their motives 🤝",
                ],
                "Investigate the reasons behind the betrayal 🔍",
            ),
            mission(
                3,
                4,
                "Shaw faces a moral dilemma during a high-stakes operation.",
                "⚖️ You are faced with a difficult decision during an operation. How do you handle it?",
                [
                    "Prioritize the mission objectives over personal morals 💼",
                    "Balance mission success with ethical considerations ⚖️",
                    "Seek advice from a trusted ally 🤝",
                    "Abort the mission and reassess the situation 🛑",
                ],
                "Balance mission success with ethical considerations ⚖️",
            ),
        ],
    };

    let root = CharacterTrack {
        character: Character::Root,
        missions: vec![
            mission(
                4,
                1,
                "Root uncovers a hidden agenda within the organization.",
                "🕵️‍♀️ You discover a hidden agenda. What is your course of action?",
                [
                    "Investigate further to uncover the truth 🔍",
                    "Alert the highest authority 🗣️",
                    "Confront the people involved 😡",
                    "Keep the information to yourself for now 🤫",
                ],
                "Investigate further to uncover the truth 🔍",
            ),
            mission(
                4,
                2,
                "Root faces a challenge in decrypting sensitive data.",
                "💻 You need to decrypt sensitive data. What is your strategy?",
                [
                    "Use advanced decryption tools 🔐",
                    "Seek help from an expert 🧠",
                    "Attempt a manual decryption 🛠️",
                    "Wait for a breakthrough from the Machine 🕵️‍♀️",
                ],
                "Use advanced decryption tools 🔐",
            ),
            mission(
                4,
                3,
                "Root must decode a cryptic message.",
                "🗝️ A cryptic message needs to be decoded. How do you proceed?",
                [
                    "Use pattern recognition techniques 🔍",
                    "Consult with experts in cryptography 🧠",
                    "Attempt to decode manually 🛠️",
                    "Wait for further instructions from the Machine 🕵️‍♀️",
                ],
                "Use pattern recognition techniques 🔍",
            ),
            mission(
                4,
                4,
                "Root is tasked with recruiting a key ally.",
                "🤝 You need to recruit a key ally. What is your approach?",
                [
                    "Present compelling evidence of your cause 🗂️",
                    "Offer them a significant reward 💎",
                    "Build a personal relationship 🤝",
                    "Demonstrate the benefits of joining you 💼",
                ],
                "Present compelling evidence of your cause 🗂️",
            ),
        ],
    };

    Catalog::new([reese, finch, shaw, root])
}
