use log::debug;

use crate::game::error::{GameError, GameResult};
use crate::game::mission::MissionDefinition;

/// Result of judging one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

/// Judge `selected` against the mission's correct option.
///
/// Comparison is exact string equality. A selection that the mission never
/// offered is an integration error, not a wrong answer.
pub fn evaluate(mission: &MissionDefinition, selected: &str) -> GameResult<Outcome> {
    if !mission.offers(selected) {
        return Err(GameError::InvalidSelection {
            selected: selected.to_string(),
            sequence: mission.sequence,
        });
    }

    let outcome = if selected == mission.correct {
        Outcome::Correct
    } else {
        Outcome::Incorrect
    };
    debug!(
        "Mission {}-{}: {selected:?} is {outcome:?}",
        mission.season, mission.sequence
    );
    Ok(outcome)
}
