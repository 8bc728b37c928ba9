//! Answer collection: merges preloaded answers from files, stdin and the
//! command line, then asks for whatever is still missing.

use crate::config::{Question, ValueType};
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use crate::variables::{Answers, NAME_KEY};
use indexmap::IndexMap;
use regex::Regex;
use std::io::Read;

/// Prompt used when the project name was not given.
pub const NAME_PROMPT: &str = "What is the name of your app?";

/// Parses a `KEY=VALUE` pair. `true` and `false` become booleans.
pub fn parse_var(s: &str) -> Result<(String, serde_json::Value)> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| Error::ValidationError(format!("expected KEY=VALUE, got '{s}'")))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(Error::ValidationError(format!("missing key in '{s}'")));
    }

    let value = match value {
        "true" => serde_json::Value::Bool(true),
        "false" => serde_json::Value::Bool(false),
        other => serde_json::Value::String(other.to_string()),
    };

    Ok((key.to_string(), value))
}

/// Parses a JSON object of answers. Blank input means no answers.
pub fn parse_answers(content: &str) -> Result<Answers> {
    let content = content.trim();
    if content.is_empty() {
        return Ok(Answers::new());
    }
    serde_json::from_str(content)
        .map_err(|e| Error::ValidationError(format!("Failed to parse answers as a JSON object: {e}")))
}

pub fn load_from_stdin() -> Result<Answers> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    parse_answers(&buffer)
}

/// Overlays `overrides` on `base`; later sources win.
pub fn merge_answers(mut base: Answers, overrides: Answers) -> Answers {
    for (key, value) in overrides {
        base.insert(key, value);
    }
    base
}

/// Index of the default choice of a single choice question.
pub fn get_single_choice_default(question: &Question) -> usize {
    question
        .default
        .as_ref()
        .and_then(|default| default.as_str())
        .and_then(|default| question.choices.iter().position(|choice| choice == default))
        .unwrap_or(0)
}

pub fn get_text_default(question: &Question) -> Option<String> {
    match &question.default {
        Some(serde_json::Value::String(s)) => Some(s.clone()),
        Some(serde_json::Value::Null) | None => None,
        Some(other) => Some(other.to_string()),
    }
}

pub fn get_yes_no_default(question: &Question) -> bool {
    question.default.as_ref().and_then(|v| v.as_bool()).unwrap_or(false)
}

fn validate(key: &str, question: &Question, answer: &str) -> Result<()> {
    let Some(pattern) = &question.validation else {
        return Ok(());
    };

    let regex = Regex::new(pattern).map_err(|e| {
        Error::ConfigError(format!("invalid validation pattern for '{key}': {e}"))
    })?;

    if regex.is_match(answer) {
        Ok(())
    } else {
        Err(Error::ValidationError(format!(
            "answer '{answer}' for '{key}' does not match '{pattern}'"
        )))
    }
}

/// Asks one question. `None` means the question was left unanswered.
fn ask(prompt: &dyn Prompter, key: &str, question: &Question) -> Result<Option<serde_json::Value>> {
    let help = if question.help.is_empty() { key } else { question.help.as_str() };

    match question.value_type {
        ValueType::Bool => {
            let answer = prompt.confirm(help, get_yes_no_default(question))?;
            Ok(Some(serde_json::Value::Bool(answer)))
        }
        ValueType::Str if !question.choices.is_empty() => {
            let index = prompt.select(help, &question.choices, get_single_choice_default(question))?;
            let choice = question.choices.get(index).ok_or_else(|| {
                Error::PromptError(format!("no choice at position {index} for '{key}'"))
            })?;
            Ok(Some(serde_json::Value::String(choice.clone())))
        }
        ValueType::Str => {
            let default = get_text_default(question);
            let answer = prompt.text(help, default.clone())?;
            if answer.is_empty() && default.is_none() {
                return Ok(None);
            }
            validate(key, question, &answer)?;
            Ok(Some(serde_json::Value::String(answer)))
        }
    }
}

/// Completes the preloaded answers.
///
/// The project name is asked for when missing. Every question without a
/// preloaded answer is asked in manifest order; a blank text answer to a
/// question without default is left out. Preloaded answers for keys that are
/// not questions are kept as they are.
pub fn get_answers(
    prompt: &dyn Prompter,
    questions: &IndexMap<String, Question>,
    preloaded: Answers,
) -> Result<Answers> {
    let mut answers = preloaded;

    if !answers.contains_key(NAME_KEY) {
        let name = prompt.text(NAME_PROMPT, None)?;
        if name.trim().is_empty() {
            return Err(Error::ValidationError("a project name is required".to_string()));
        }
        answers.insert(NAME_KEY.to_string(), serde_json::Value::String(name));
    }

    for (key, question) in questions {
        if key == NAME_KEY {
            continue;
        }

        if let Some(preloaded) = answers.get(key) {
            if let (ValueType::Str, Some(text)) = (question.value_type, preloaded.as_str()) {
                validate(key, question, text)?;
            }
            continue;
        }

        if let Some(value) = ask(prompt, key, question)? {
            answers.insert(key.clone(), value);
        }
    }

    Ok(answers)
}
