//! Text groupings to be aligned and laid out
//!
//! Groupings come either as one line of text per grouping, or as a JSON list of
//! records carrying the text plus routing data for the scene-assembly layer.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::InputError;
use crate::input::{read_source, InputFormat};

/// A unit of text shown as one visual block
///
/// Only `text` is read by the aligner and packer. `style`, `options` and
/// `extra` are carried through untouched for the caller.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Grouping {
    /// Missing in a record means an empty grouping, which the aligner skips
    #[serde(rename = "group", default)]
    pub text: String,

    /// Layout style tag, e.g. `group_basic` or `word_impact`
    #[serde(
        rename = "animation_style",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub style: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub options: BTreeSet<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Grouping {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn with_option(mut self, option: impl Into<String>) -> Self {
        self.options.insert(option.into());
        self
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.contains(option)
    }
}

impl AsRef<str> for Grouping {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Parse plain-text groupings: one per non-blank line, trimmed
pub fn from_text_str(content: &str) -> Vec<Grouping> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Grouping::new)
        .collect()
}

/// Parse a JSON list of grouping records
pub fn from_json_str(content: &str) -> Result<Vec<Grouping>, serde_json::Error> {
    serde_json::from_str(content)
}

/// Load groupings, choosing the encoding from the file extension
pub fn load(path: &Path) -> Result<Vec<Grouping>, InputError> {
    let content = read_source(path)?;
    let groupings = match InputFormat::from_path(path) {
        InputFormat::Json => from_json_str(&content).map_err(|e| InputError::json(path, e))?,
        InputFormat::Text => from_text_str(&content),
    };
    tracing::debug!(path = %path.display(), groupings = groupings.len(), "loaded groupings");
    Ok(groupings)
}

/// Greedily wrap `text` into lines of at most `max_chars` characters
///
/// Words are joined with single spaces. A word longer than the budget is put
/// on a line of its own rather than split. Characters, not bytes, are counted.
pub fn wrap_lines(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + word_len + 1 > max_chars {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
