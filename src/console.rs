use std::fmt;
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::{bail, Result};
use colored::Colorize;
use log::warn;

use crate::game::evaluator::Outcome;
use crate::game::mission::{Character, MissionDefinition};
use crate::game::progression::SessionReport;

// ---------------------------------------------------------------------------
// Collaborator seams
// ---------------------------------------------------------------------------

/// Collects input from the player.
pub trait Prompter {
    /// Ask for free text. A blank answer yields `default` when one is given.
    fn text(&mut self, label: &str, default: Option<&str>) -> Result<String>;

    /// Ask the player to pick one of `options`. The returned value is always
    /// one of them.
    fn select(&mut self, label: &str, options: &[String]) -> Result<String>;
}

/// Shows the story to the player. Nothing is returned.
pub trait Presenter {
    fn introduction(&mut self);
    fn character_chosen(&mut self, character: Character);
    fn mission(&mut self, mission: &MissionDefinition);
    fn outcome(&mut self, player_name: &str, outcome: Outcome);
    fn progress(&mut self, completed: usize, total: usize);
    fn restarting(&mut self, player_name: &str);
    fn completed(&mut self, report: &SessionReport);
}

// ---------------------------------------------------------------------------
// Terminal
// ---------------------------------------------------------------------------

const TITLE: &str = "Person of Interest: The Machine's Directive";
const BAR_WIDTH: usize = 20;

/// Line-oriented implementation of both collaborators, normally over
/// stdin/stdout.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    /// Pause after each decision and before a restart.
    pace: Duration,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W, pace: Duration) -> Self {
        Self {
            input,
            output,
            pace,
        }
    }

    fn pause(&self) {
        if !self.pace.is_zero() {
            thread::sleep(self.pace);
        }
    }

    /// Presentation has no way to report failure, so a broken output is logged.
    fn say(&mut self, text: impl fmt::Display) {
        if let Err(err) = writeln!(self.output, "{text}") {
            warn!("failed to write to terminal: {err}");
        }
    }

    fn read_line(&mut self, label: &str) -> Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed while waiting for {label:?}");
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for Terminal<R, W> {
    fn text(&mut self, label: &str, default: Option<&str>) -> Result<String> {
        match default {
            Some(default) => write!(self.output, "{} {label} [{default}] ", "?".green())?,
            None => write!(self.output, "{} {label} ", "?".green())?,
        }
        let input = self.read_line(label)?;
        if input.is_empty() {
            return Ok(default.unwrap_or_default().to_string());
        }
        Ok(input)
    }

    fn select(&mut self, label: &str, options: &[String]) -> Result<String> {
        if options.is_empty() {
            bail!("nothing to choose from for {label:?}");
        }
        writeln!(self.output, "{} {label}", "?".green())?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "  {}. {option}", i + 1)?;
        }
        loop {
            write!(self.output, "> ")?;
            let input = self.read_line(label)?;
            match input.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(options[n - 1].clone()),
                _ => writeln!(self.output, "  Pick a number between 1 and {}.", options.len())?,
            }
        }
    }
}

/// `Progress |#####---------------| 25% | 1/4 Missions`
fn progress_bar(completed: usize, total: usize) -> String {
    let denom = total.max(1);
    let done = completed.min(denom);
    let filled = BAR_WIDTH * done / denom;
    format!(
        "Progress |{}{}| {}% | {completed}/{total} Missions",
        "#".repeat(filled).green(),
        "-".repeat(BAR_WIDTH - filled),
        done * 100 / denom
    )
}

const RULE: &str = "========================================";

impl<R: BufRead, W: Write> Presenter for Terminal<R, W> {
    fn introduction(&mut self) {
        self.say(format!("\n{RULE}"));
        self.say(TITLE.bold().cyan());
        self.say(RULE);
        self.say(" WELCOME TO THE GAME ".on_blue());
        self.say("You are a member of a covert team using advanced technology to prevent");
        self.say("crimes before they happen. Make crucial decisions and navigate through");
        self.say("dangerous missions to shape the future of New York City.");
        self.say("Remember, every choice you make influences the outcome.\n");
    }

    fn character_chosen(&mut self, character: Character) {
        self.say(format!(
            "\nYou have chosen {character}. Let's begin your mission!"
        ));
    }

    fn mission(&mut self, mission: &MissionDefinition) {
        self.say("");
        self.say(
            format!("Season {} - Mission {}", mission.season, mission.sequence)
                .yellow()
                .bold(),
        );
        self.say(format!("\n{}\n", mission.description));
    }

    fn outcome(&mut self, player_name: &str, outcome: Outcome) {
        self.say("Processing your decision...");
        self.pause();
        match outcome {
            Outcome::Correct => self.say(
                format!("Good job, {player_name}. You made the right choice!").green(),
            ),
            Outcome::Incorrect => {
                self.say(format!("Mission failed, {player_name}. Try again!").red())
            }
        }
    }

    fn progress(&mut self, completed: usize, total: usize) {
        self.say(format!("\n{}", progress_bar(completed, total)));
    }

    fn restarting(&mut self, player_name: &str) {
        self.say("");
        self.say(format!("You've lost, {player_name}. Restarting the game...").red());
        self.pause();
    }

    fn completed(&mut self, report: &SessionReport) {
        self.say(format!("\n{RULE}"));
        self.say(
            format!("   Congratulations, {}!", report.player_name)
                .bold()
                .magenta(),
        );
        self.say(RULE);
        self.say(
            "You have successfully completed the game. Your actions have influenced the fate of New York City and the future of the team."
                .green(),
        );
        self.say(format!(
            "  {}: {} / {} missions completed",
            report.character, report.completed, report.total
        ));
        if report.attempts > 1 {
            self.say(format!("  It took you {} attempts.", report.attempts));
        }
        self.say(format!("{RULE}\n"));
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::game::progression::DEFAULT_PLAYER_NAME;

    fn terminal(input: &str) -> Terminal<Cursor<Vec<u8>>, Vec<u8>> {
        colored::control::set_override(false);
        Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), Duration::ZERO)
    }

    fn shown(terminal: &Terminal<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(&terminal.output).into_owned()
    }

    fn options() -> Vec<String> {
        ["Fight", "Talk", "Run"].iter().map(|o| o.to_string()).collect()
    }

    #[test]
    fn test_select_asks_again_until_number_in_range() {
        let mut term = terminal("9\nx\n2\n");
        assert_eq!(term.select("What now?", &options()).unwrap(), "Talk");
        let out = shown(&term);
        assert_eq!(out.matches("Pick a number between 1 and 3.").count(), 2);
        assert!(out.contains("  1. Fight\n  2. Talk\n  3. Run\n"));
    }

    #[test]
    fn test_select_trims_input() {
        let mut term = terminal("  3 \n");
        assert_eq!(term.select("What now?", &options()).unwrap(), "Run");
    }

    #[test]
    fn test_select_rejects_empty_menu() {
        let mut term = terminal("1\n");
        assert!(term.select("What now?", &[]).is_err());
    }

    #[test]
    fn test_blank_text_uses_default() {
        let mut term = terminal("\n");
        let name = term.text("What is your name?", Some(DEFAULT_PLAYER_NAME)).unwrap();
        assert_eq!(name, DEFAULT_PLAYER_NAME);
        assert!(shown(&term).contains("What is your name? [Agent] "));

        let mut term = terminal("  Sam  \n");
        assert_eq!(term.text("What is your name?", Some(DEFAULT_PLAYER_NAME)).unwrap(), "Sam");
    }

    #[test]
    fn test_closed_input_names_the_prompt() {
        let mut term = terminal("");
        let err = term.text("What is your name?", None).unwrap_err();
        assert!(err.to_string().contains("What is your name?"), "{err}");

        let mut term = terminal("7\n");
        let err = term.select("Choose your character:", &options()).unwrap_err();
        assert!(err.to_string().contains("input closed"), "{err}");
    }

    #[test]
    fn test_progress_line_written_to_output() {
        let mut term = terminal("");
        term.progress(2, 4);
        assert!(shown(&term).contains("Progress |##########----------| 50% | 2/4 Missions"));
    }

    #[test]
    fn test_progress_bar_fills_proportionally() {
        colored::control::set_override(false);
        assert_eq!(
            progress_bar(1, 4),
            "Progress |#####---------------| 25% | 1/4 Missions"
        );
        assert_eq!(
            progress_bar(4, 4),
            "Progress |####################| 100% | 4/4 Missions"
        );
    }

    #[test]
    fn test_progress_bar_zero_total() {
        colored::control::set_override(false);
        assert_eq!(
            progress_bar(0, 0),
            "Progress |--------------------| 0% | 0/0 Missions"
        );
    }
}
