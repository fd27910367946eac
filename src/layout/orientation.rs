//! Tie-break strategies for when a word fits both ways

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::types::Orientation;

/// Picks an orientation for a label that fits both horizontally and vertically
pub trait OrientationChooser {
    fn choose(&mut self, label: &str) -> Orientation;
}

impl<F> OrientationChooser for F
where
    F: FnMut(&str) -> Orientation,
{
    fn choose(&mut self, label: &str) -> Orientation {
        self(label)
    }
}

/// Always pick the same orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlwaysOrientation(pub Orientation);

impl OrientationChooser for AlwaysOrientation {
    fn choose(&mut self, _label: &str) -> Orientation {
        self.0
    }
}

/// Pick uniformly at random between the two orientations
#[derive(Debug, Clone)]
pub struct RandomOrientation {
    rng: StdRng,
}

impl RandomOrientation {
    /// Seeded from the operating system
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence of choices
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl OrientationChooser for RandomOrientation {
    fn choose(&mut self, _label: &str) -> Orientation {
        if self.rng.random_bool(0.5) {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// Tie-break policy as written in configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrientationPolicy {
    #[default]
    Random,
    Horizontal,
    Vertical,
}

impl OrientationPolicy {
    /// Build the chooser for this policy; `seed` only affects `Random`
    pub fn chooser(self, seed: Option<u64>) -> Box<dyn OrientationChooser> {
        match self {
            OrientationPolicy::Random => match seed {
                Some(seed) => Box::new(RandomOrientation::seeded(seed)),
                None => Box::new(RandomOrientation::from_os_rng()),
            },
            OrientationPolicy::Horizontal => Box::new(AlwaysOrientation(Orientation::Horizontal)),
            OrientationPolicy::Vertical => Box::new(AlwaysOrientation(Orientation::Vertical)),
        }
    }
}
