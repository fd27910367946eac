//! Project configuration loaded from TOML
//!
//! Every key is optional; missing keys take the defaults below.
//!
//! ```toml
//! [container]
//! width = 1920
//! height = 1080
//! padding = 25
//!
//! [text]
//! font = "Bahnschrift"
//! typeface = "Regular"
//! size = 130
//! max_chars_per_line = 12
//!
//! [packing]
//! orientation = "random"   # or "horizontal", "vertical"
//! seed = 42
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::layout::{Container, OrientationPolicy, PackingConfig, TextStyle};

/// Default character budget for one wrapped line
pub const DEFAULT_MAX_CHARS_PER_LINE: usize = 12;

/// Settings shared by the aligner, the wrapper and the packer
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectConfig {
    pub packing: PackingConfig,
    pub max_chars_per_line: usize,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// TOML structure for deserializing project files
#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct TomlProject {
    container: TomlContainer,
    text: TomlText,
    packing: TomlPacking,
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TomlContainer {
    width: f64,
    height: f64,
    padding: f64,
}

impl Default for TomlContainer {
    fn default() -> Self {
        let container = Container::default();
        Self {
            width: container.width,
            height: container.height,
            padding: container.padding,
        }
    }
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TomlText {
    font: String,
    typeface: String,
    size: f64,
    max_chars_per_line: usize,
}

impl Default for TomlText {
    fn default() -> Self {
        let style = TextStyle::default();
        Self {
            font: style.font,
            typeface: style.typeface,
            size: style.size,
            max_chars_per_line: DEFAULT_MAX_CHARS_PER_LINE,
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct TomlPacking {
    orientation: OrientationPolicy,
    seed: Option<u64>,
}

impl ProjectConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlProject = toml::from_str(content)?;

        Ok(ProjectConfig {
            packing: PackingConfig {
                container: Container::new(
                    parsed.container.width,
                    parsed.container.height,
                    parsed.container.padding,
                ),
                style: TextStyle::new(parsed.text.font, parsed.text.size)
                    .with_typeface(parsed.text.typeface),
                orientation: parsed.packing.orientation,
                seed: parsed.packing.seed,
            },
            max_chars_per_line: parsed.text.max_chars_per_line,
        })
    }

    pub fn new() -> Self {
        Self {
            packing: PackingConfig::default(),
            max_chars_per_line: DEFAULT_MAX_CHARS_PER_LINE,
        }
    }

    pub fn with_max_chars_per_line(mut self, max_chars: usize) -> Self {
        self.max_chars_per_line = max_chars;
        self
    }
}
