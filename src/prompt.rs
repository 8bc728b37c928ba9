//! User interaction for collecting answers.
//! The [`Prompter`] trait hides where answers come from: the terminal through
//! dialoguer, or the questions' defaults when running without input.

use crate::error::{Error, Result};
use dialoguer::{Confirm, Input, Select};

/// Source of interactive answers.
pub trait Prompter {
    /// Asks for free text. An empty answer is allowed.
    fn text(&self, prompt: &str, default: Option<String>) -> Result<String>;

    /// Asks a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;

    /// Asks to pick one of `choices`, returning its index.
    fn select(&self, prompt: &str, choices: &[String], default: usize) -> Result<usize>;
}

/// Terminal prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&self, prompt: &str, default: Option<String>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
        if let Some(default) = default {
            input = input.default(default);
        }
        input.interact_text().map_err(|e| Error::PromptError(e.to_string()))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn select(&self, prompt: &str, choices: &[String], default: usize) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .default(default)
            .items(choices)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}

/// Non-interactive prompter: every question takes its default.
#[derive(Debug, Default)]
pub struct DefaultsPrompter;

impl Prompter for DefaultsPrompter {
    fn text(&self, _prompt: &str, default: Option<String>) -> Result<String> {
        Ok(default.unwrap_or_default())
    }

    fn confirm(&self, _prompt: &str, default: bool) -> Result<bool> {
        Ok(default)
    }

    fn select(&self, _prompt: &str, _choices: &[String], default: usize) -> Result<usize> {
        Ok(default)
    }
}
