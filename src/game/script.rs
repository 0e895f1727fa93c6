//! Scripted collaborators for driving whole sessions in tests.

use std::collections::VecDeque;

use anyhow::{anyhow, bail, Result};

use crate::console::{Presenter, Prompter};
use crate::game::evaluator::Outcome;
use crate::game::mission::{Character, MissionDefinition};
use crate::game::progression::SessionReport;

/// One scripted player reply, consumed in order.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Answer a text prompt. Empty falls back to the prompt's default.
    Text(String),
    /// Pick this character from the roster menu.
    Character(Character),
    /// Return an arbitrary label from a select prompt.
    Label(String),
    /// Pick the current mission's correct option.
    Correct,
    /// Pick any option other than the correct one.
    Wrong,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Introduction,
    CharacterChosen(Character),
    Mission(u32, u32),
    Outcome(String, Outcome),
    Progress(usize, usize),
    Restarting(String),
    Completed(SessionReport),
}

pub struct ScriptedConsole {
    replies: VecDeque<Reply>,
    mission: Option<MissionDefinition>,
    pub events: Vec<Event>,
    /// Option lists exactly as each select prompt received them.
    pub offered: Vec<Vec<String>>,
}

impl ScriptedConsole {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: replies.into_iter().collect(),
            mission: None,
            events: Vec::new(),
            offered: Vec::new(),
        }
    }

    fn next_reply(&mut self, label: &str) -> Result<Reply> {
        self.replies
            .pop_front()
            .ok_or_else(|| anyhow!("script exhausted at {label:?}"))
    }

    fn current_mission(&self) -> Result<&MissionDefinition> {
        self.mission
            .as_ref()
            .ok_or_else(|| anyhow!("no mission has been presented"))
    }
}

impl Prompter for ScriptedConsole {
    fn text(&mut self, label: &str, default: Option<&str>) -> Result<String> {
        match self.next_reply(label)? {
            Reply::Text(text) if text.is_empty() => Ok(default.unwrap_or_default().to_string()),
            Reply::Text(text) => Ok(text),
            other => bail!("expected text reply for {label:?}, got {other:?}"),
        }
    }

    fn select(&mut self, label: &str, options: &[String]) -> Result<String> {
        self.offered.push(options.to_vec());
        let pick = match self.next_reply(label)? {
            Reply::Character(character) => character.menu_label(),
            Reply::Label(raw) => return Ok(raw),
            Reply::Correct => self.current_mission()?.correct.clone(),
            Reply::Wrong => {
                let mission = self.current_mission()?;
                options
                    .iter()
                    .find(|o| **o != mission.correct)
                    .cloned()
                    .ok_or_else(|| anyhow!("mission {} has no wrong option", mission.sequence))?
            }
            other => bail!("expected a selection for {label:?}, got {other:?}"),
        };
        if !options.contains(&pick) {
            bail!("{pick:?} was not offered for {label:?}");
        }
        Ok(pick)
    }
}

impl Presenter for ScriptedConsole {
    fn introduction(&mut self) {
        self.events.push(Event::Introduction);
    }

    fn character_chosen(&mut self, character: Character) {
        self.events.push(Event::CharacterChosen(character));
    }

    fn mission(&mut self, mission: &MissionDefinition) {
        self.events.push(Event::Mission(mission.season, mission.sequence));
        self.mission = Some(mission.clone());
    }

    fn outcome(&mut self, player_name: &str, outcome: Outcome) {
        self.events
            .push(Event::Outcome(player_name.to_string(), outcome));
    }

    fn progress(&mut self, completed: usize, total: usize) {
        self.events.push(Event::Progress(completed, total));
    }

    fn restarting(&mut self, player_name: &str) {
        self.events.push(Event::Restarting(player_name.to_string()));
    }

    fn completed(&mut self, report: &SessionReport) {
        self.events.push(Event::Completed(report.clone()));
    }
}
