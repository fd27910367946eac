//! Core types for the shelf packer

use serde::{Deserialize, Serialize};

/// Width and height in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The same size turned on its side
    pub fn swapped(self) -> Self {
        Self::new(self.height, self.width)
    }

    /// Grow both dimensions by `padding`
    pub fn padded(self, padding: f64) -> Self {
        Self::new(self.width + padding, self.height + padding)
    }
}

/// An axis-aligned box in top-left, y-down coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if this bounding box overlaps another with positive area
    ///
    /// Boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Check if this box lies inside `[0, width] x [0, height]`
    pub fn within(&self, width: f64, height: f64) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.right() <= width && self.bottom() <= height
    }
}

/// Orientation of a placed rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Rotation in degrees handed to the renderer
    pub fn degrees(self) -> u16 {
        match self {
            Orientation::Horizontal => 0,
            Orientation::Vertical => 90,
        }
    }

    /// Size of a rectangle of intrinsic `size` laid out in this orientation
    pub fn apply(self, size: Size) -> Size {
        match self {
            Orientation::Horizontal => size,
            Orientation::Vertical => size.swapped(),
        }
    }
}

/// Fixed packing area for one run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub width: f64,
    pub height: f64,
    /// Gap added to the right and bottom of every rectangle
    pub padding: f64,
}

impl Container {
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new(1920.0, 1080.0, 25.0)
    }
}

/// A placed word in center-origin, y-up coordinates
///
/// `width` and `height` describe the occupied area after rotation, so a
/// vertical placement reports the intrinsic dimensions swapped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    pub label: String,
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: u16,
}

impl Placement {
    pub fn orientation(&self) -> Orientation {
        if self.rotation == 90 {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }

    /// Dimensions as measured before rotation
    pub fn intrinsic_size(&self) -> Size {
        match self.orientation() {
            Orientation::Horizontal => Size::new(self.width, self.height),
            Orientation::Vertical => Size::new(self.height, self.width),
        }
    }
}
