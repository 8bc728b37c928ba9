//! Template variables shared by every pipeline task.

use indexmap::IndexMap;
use serde::Serialize;

use crate::slug::slugify;

/// Key holding the normalized project name.
pub const NAME_KEY: &str = "name";

/// Key holding the version of the tool that generated the project.
pub const VERSION_KEY: &str = "bisonVersion";

/// Key holding the optional remote repository URL.
pub const GITHUB_REPO_KEY: &str = "githubRepo";

/// Version tag stamped into every generated project.
pub const BISON_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Raw answers collected from the user, keyed by option name.
pub type Answers = IndexMap<String, serde_json::Value>;

/// Flat, ordered mapping used for template substitution.
///
/// Built once per invocation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Variables(IndexMap<String, serde_json::Value>);

impl Variables {
    /// Merges the normalized name, the version tag and the answers.
    ///
    /// The resulting order is `name`, `bisonVersion`, then the remaining
    /// answers in their original order. A raw `name` answer is replaced by its
    /// slug; an answer named `bisonVersion` replaces the version tag.
    pub fn build(answers: &Answers, version: &str) -> Self {
        let raw_name = answers.get(NAME_KEY).map(value_as_text).unwrap_or_default();

        let mut vars = IndexMap::with_capacity(answers.len() + 2);
        vars.insert(NAME_KEY.to_string(), serde_json::Value::String(slugify(&raw_name)));
        vars.insert(VERSION_KEY.to_string(), serde_json::Value::String(version.to_string()));

        for (key, value) in answers.iter().filter(|(key, _)| key.as_str() != NAME_KEY) {
            vars.insert(key.clone(), value.clone());
        }

        Self(vars)
    }

    /// The normalized project name.
    pub fn name(&self) -> &str {
        self.0.get(NAME_KEY).and_then(|v| v.as_str()).unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &serde_json::Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders the mapping as a JSON object for the template engine.
    pub fn to_context(&self) -> serde_json::Value {
        serde_json::Value::Object(self.0.clone().into_iter().collect())
    }
}

/// Textual form of an answer: strings as-is, anything else as JSON.
pub(crate) fn value_as_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
