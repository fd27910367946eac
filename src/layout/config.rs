//! Configuration for the shelf packer

use super::measure::TextStyle;
use super::orientation::{OrientationChooser, OrientationPolicy};
use super::types::Container;

/// Configuration options for a packing run
#[derive(Debug, Clone, PartialEq)]
pub struct PackingConfig {
    /// Area words are packed into
    pub container: Container,

    /// Font the oracle measures with
    pub style: TextStyle,

    /// Tie-break when a word fits both ways
    pub orientation: OrientationPolicy,

    /// Seed for the random tie-break; `None` draws from the OS
    pub seed: Option<u64>,
}

impl Default for PackingConfig {
    fn default() -> Self {
        Self {
            container: Container::default(),
            style: TextStyle::default(),
            orientation: OrientationPolicy::Random,
            seed: None,
        }
    }
}

impl PackingConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the container size
    pub fn with_container_size(mut self, width: f64, height: f64) -> Self {
        self.container.width = width;
        self.container.height = height;
        self
    }

    /// Set the padding added after every word
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.container.padding = padding;
        self
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_orientation(mut self, orientation: OrientationPolicy) -> Self {
        self.orientation = orientation;
        self
    }

    /// Make random tie-breaks reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the tie-break strategy this configuration describes
    pub fn chooser(&self) -> Box<dyn OrientationChooser> {
        self.orientation.chooser(self.seed)
    }
}
