//! Shelf packing of rendered words into a fixed container
//!
//! The packer takes labels in order, asks a [`MeasureText`] oracle for each
//! label's size, and places it on the current shelf horizontally or rotated by
//! 90°. See [`shelf`] for the algorithm and [`transform`] for the coordinate
//! conversion applied to the output.

pub mod config;
pub mod measure;
pub mod orientation;
pub mod shelf;
pub mod transform;
pub mod types;

pub use config::PackingConfig;
pub use measure::{CachedMeasure, FixedMeasure, MeasureText, MonospaceMeasure, TextStyle};
pub use orientation::{AlwaysOrientation, OrientationChooser, OrientationPolicy, RandomOrientation};
pub use shelf::{pack, DroppedLabel, PackedLayout, ShelfPacker, ShelfPlacement, ShelfState};
pub use transform::{from_center_origin, to_center_origin};
pub use types::*;

/// Pack `labels` with the container, style and tie-break from `config`
pub fn pack_with_config<I, S, M>(labels: I, config: &PackingConfig, measure: &M) -> PackedLayout
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    M: MeasureText + ?Sized,
{
    let mut chooser = config.chooser();
    pack(
        labels,
        config.container,
        &config.style,
        measure,
        chooser.as_mut(),
    )
}
