//! Interactive logging session.
//!
//! The session is a small state machine driven by a [`Prompter`]:
//! confirm creation, then repeatedly choose a category, type a message and
//! decide whether to continue.

use crate::error::{CliError, Result};
use changelog::{Category, EntryStore};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use std::fmt;
use tracing::debug;

pub const NO_CREATION_OPTED: &str = "User chose not to set a CHANGELOG";
pub const UNKNOWN_LOG_MESSAGE: &str = "No or Unknown log message was provided";
pub const LOG_MESSAGE_TOO_LONG: &str = "Sorry, log message is too long!";

/// One entry of the "Type of log?" menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Log(Category),
    BulkEdit,
    Exit,
}

impl Choice {
    /// Menu entries in display order: categories first, then the extras
    pub fn menu() -> Vec<Choice> {
        Category::ALL
            .into_iter()
            .map(Choice::Log)
            .chain([Choice::BulkEdit, Choice::Exit])
            .collect()
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Log(category) => f.write_str(category.as_str()),
            Self::BulkEdit => f.write_str("BULK EDIT IN EDITOR"),
            Self::Exit => f.write_str("EXIT!"),
        }
    }
}

/// Checks a log message against the length limit
pub fn validate_log_message(message: &str, limit: usize) -> std::result::Result<(), &'static str> {
    if message.chars().count() > limit {
        Err(LOG_MESSAGE_TOO_LONG)
    } else {
        Ok(())
    }
}

/// The questions a session asks
pub trait Prompter {
    fn confirm_creation(&mut self) -> Result<bool>;
    fn choose_log_type(&mut self, choices: &[Choice]) -> Result<Choice>;
    fn log_message(&mut self, limit: usize) -> Result<String>;
    fn more_logs(&mut self) -> Result<bool>;
}

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Write these entries to the changelog
    Build(EntryStore),
    /// Hand these entries to the bulk editor first
    BulkEdit(EntryStore),
    /// Leave without writing anything
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ConfirmCreation,
    ChooseCategory,
    EnterMessage(Category),
    ContinueOrStop,
}

pub struct Session<'a, P: Prompter> {
    prompter: &'a mut P,
    message_limit: usize,
}

impl<'a, P: Prompter> Session<'a, P> {
    pub fn new(prompter: &'a mut P, message_limit: usize) -> Self {
        Self {
            prompter,
            message_limit,
        }
    }

    /// Runs the session on top of `entries` until the user stops, exits or
    /// asks for a bulk edit.
    ///
    /// # Errors
    /// `Aborted` when creation is declined or a message is empty or too long;
    /// prompt failures are passed through.
    pub fn run(&mut self, entries: EntryStore) -> Result<SessionOutcome> {
        let menu = Choice::menu();
        let mut entries = entries;
        let mut state = State::ConfirmCreation;

        loop {
            debug!(?state, entries = entries.len(), "session step");
            state = match state {
                State::ConfirmCreation => {
                    if !self.prompter.confirm_creation()? {
                        return Err(CliError::Aborted(NO_CREATION_OPTED.to_string()));
                    }
                    State::ChooseCategory
                }
                State::ChooseCategory => match self.prompter.choose_log_type(&menu)? {
                    Choice::Log(category) => State::EnterMessage(category),
                    Choice::BulkEdit => return Ok(SessionOutcome::BulkEdit(entries)),
                    Choice::Exit => return Ok(SessionOutcome::Exit),
                },
                State::EnterMessage(category) => {
                    let message = self.prompter.log_message(self.message_limit)?;
                    let message = message.trim();
                    if message.is_empty() {
                        return Err(CliError::Aborted(UNKNOWN_LOG_MESSAGE.to_string()));
                    }
                    validate_log_message(message, self.message_limit)
                        .map_err(|reason| CliError::Aborted(reason.to_string()))?;
                    entries = entries.with_entry(category, message);
                    State::ContinueOrStop
                }
                State::ContinueOrStop => {
                    if self.prompter.more_logs()? {
                        State::ChooseCategory
                    } else {
                        return Ok(SessionOutcome::Build(entries));
                    }
                }
            };
        }
    }
}

/// Terminal prompts
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm_creation(&mut self) -> Result<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt("Create/Edit a CHANGELOG?")
            .default(true)
            .interact()?)
    }

    fn choose_log_type(&mut self, choices: &[Choice]) -> Result<Choice> {
        let idx = Select::with_theme(&self.theme)
            .with_prompt("Type of log?")
            .items(choices)
            .default(0)
            .interact()?;
        choices
            .get(idx)
            .copied()
            .ok_or_else(|| CliError::Other(format!("No log type at menu position {idx}")))
    }

    fn log_message(&mut self, limit: usize) -> Result<String> {
        Ok(Input::<String>::with_theme(&self.theme)
            .with_prompt("Log message:")
            .validate_with(move |input: &String| validate_log_message(input, limit))
            .interact_text()?)
    }

    fn more_logs(&mut self) -> Result<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt("Set more logs?")
            .default(false)
            .interact()?)
    }
}
