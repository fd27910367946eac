//! Conversion between the packer's and the host's coordinate systems
//!
//! The packer works with the origin at the container's top-left corner and y
//! pointing down, which is how shelves stack. The host expects the origin at
//! the container's center with y pointing up:
//!
//! ```text
//! x' = x - width / 2
//! y' = height / 2 - y
//! ```

use super::types::Container;

/// Convert a top-left, y-down point to center-origin, y-up
pub fn to_center_origin(x: f64, y: f64, container: &Container) -> (f64, f64) {
    (x - container.width / 2.0, container.height / 2.0 - y)
}

/// Convert a center-origin, y-up point back to top-left, y-down
pub fn from_center_origin(x: f64, y: f64, container: &Container) -> (f64, f64) {
    (x + container.width / 2.0, container.height / 2.0 - y)
}
