//! Shared helpers for reading transcript and grouping files

use std::path::Path;

use crate::error::InputError;

/// Encoding of an input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Text,
}

impl InputFormat {
    /// `.json` (any case) is JSON, anything else plain text
    pub fn from_path(path: &Path) -> Self {
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            InputFormat::Json
        } else {
            InputFormat::Text
        }
    }
}

pub(crate) fn read_source(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|e| InputError::io(path, e))
}
