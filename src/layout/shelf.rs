//! Single-pass shelf packing
//!
//! Labels are placed left to right on horizontal shelves, in input order. When
//! a label does not fit on the current shelf, a new shelf opens directly below
//! the tallest footprint of the current one. Labels that fit nowhere are dropped.
//!
//! Positions are computed with a top-left origin and y pointing down, then
//! converted once to the center-origin, y-up convention of the host.

use serde::Serialize;

use super::measure::{MeasureText, TextStyle};
use super::orientation::OrientationChooser;
use super::transform::to_center_origin;
use super::types::{BoundingBox, Container, Orientation, Placement, Size};

/// Scratch state for one packing run
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShelfState {
    pub cursor_x: f64,
    pub shelf_y: f64,
    pub shelf_height: f64,
}

impl ShelfState {
    /// Top edge of the shelf that would open below this one
    pub fn next_shelf_y(&self) -> f64 {
        self.shelf_y + self.shelf_height
    }

    fn open_next_shelf(&mut self) {
        self.shelf_y = self.next_shelf_y();
        self.cursor_x = 0.0;
        self.shelf_height = 0.0;
    }
}

/// A label the packer could not fit anywhere
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DroppedLabel {
    pub index: usize,
    pub label: String,
    pub size: Size,
}

/// A placement before coordinate conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ShelfPlacement {
    pub index: usize,
    pub label: String,
    pub orientation: Orientation,
    /// Occupied size after rotation, without padding
    pub size: Size,
    /// Padded box in top-left coordinates
    pub footprint: BoundingBox,
    pub shelf: usize,
}

impl ShelfPlacement {
    /// Center of the unpadded rectangle in top-left coordinates
    pub fn center(&self) -> (f64, f64) {
        (
            self.footprint.x + self.size.width / 2.0,
            self.footprint.y + self.size.height / 2.0,
        )
    }
}

/// Result of a packing run
#[derive(Debug, Clone, PartialEq)]
pub struct PackedLayout {
    pub container: Container,
    /// Placements in input order, in top-left coordinates
    pub shelf_placements: Vec<ShelfPlacement>,
    pub dropped: Vec<DroppedLabel>,
}

impl PackedLayout {
    /// Placements converted to the center-origin, y-up convention
    pub fn placements(&self) -> Vec<Placement> {
        self.shelf_placements
            .iter()
            .map(|p| {
                let (x, y) = p.center();
                let (center_x, center_y) = to_center_origin(x, y, &self.container);
                Placement {
                    label: p.label.clone(),
                    center_x,
                    center_y,
                    width: p.size.width,
                    height: p.size.height,
                    rotation: p.orientation.degrees(),
                }
            })
            .collect()
    }

    /// Number of shelves holding at least one placement
    pub fn shelf_count(&self) -> usize {
        self.shelf_placements
            .last()
            .map(|p| p.shelf + 1)
            .unwrap_or(0)
    }

    pub fn is_complete(&self) -> bool {
        self.dropped.is_empty()
    }
}

/// Shelf packer for one container and text style
pub struct ShelfPacker<'m, M: ?Sized> {
    container: Container,
    style: TextStyle,
    measure: &'m M,
}

impl<'m, M: MeasureText + ?Sized> ShelfPacker<'m, M> {
    pub fn new(container: Container, style: TextStyle, measure: &'m M) -> Self {
        Self {
            container,
            style,
            measure,
        }
    }

    /// Pack `labels` in order, asking `chooser` whenever both orientations fit
    pub fn pack<I, S, C>(&self, labels: I, chooser: &mut C) -> PackedLayout
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        C: OrientationChooser + ?Sized,
    {
        let container = self.container;
        let mut state = ShelfState::default();
        let mut shelf_index = 0;
        let mut shelf_placements = Vec::new();
        let mut dropped = Vec::new();

        for (index, label) in labels.into_iter().enumerate() {
            let label = label.as_ref();
            let size = self.measure.measure(label, &self.style);

            loop {
                let fits = |orientation: Orientation, at: &ShelfState| {
                    let footprint = orientation.apply(size).padded(container.padding);
                    at.cursor_x + footprint.width <= container.width
                        && at.shelf_y + footprint.height <= container.height
                };
                let horizontal = fits(Orientation::Horizontal, &state);
                let vertical = fits(Orientation::Vertical, &state);

                let orientation = match (horizontal, vertical) {
                    (true, true) => Some(chooser.choose(label)),
                    (true, false) => Some(Orientation::Horizontal),
                    (false, true) => Some(Orientation::Vertical),
                    (false, false) => None,
                };

                if let Some(orientation) = orientation {
                    let placed = orientation.apply(size);
                    let footprint = placed.padded(container.padding);
                    let bounds = BoundingBox::new(
                        state.cursor_x,
                        state.shelf_y,
                        footprint.width,
                        footprint.height,
                    );
                    state.cursor_x += footprint.width;
                    state.shelf_height = state.shelf_height.max(footprint.height);

                    tracing::debug!(
                        label = %label,
                        x = bounds.x,
                        y = bounds.y,
                        rotation = orientation.degrees(),
                        shelf = shelf_index,
                        "placed label"
                    );
                    shelf_placements.push(ShelfPlacement {
                        index,
                        label: label.to_string(),
                        orientation,
                        size: placed,
                        footprint: bounds,
                        shelf: shelf_index,
                    });
                    break;
                }

                let next = ShelfState {
                    cursor_x: 0.0,
                    shelf_y: state.next_shelf_y(),
                    shelf_height: 0.0,
                };
                let fits_on_next_shelf = fits(Orientation::Horizontal, &next)
                    || fits(Orientation::Vertical, &next);

                // An empty shelf reopening at the same spot would retry forever
                let is_new_position = state.cursor_x > 0.0 || state.shelf_height > 0.0;

                if fits_on_next_shelf && is_new_position {
                    state.open_next_shelf();
                    shelf_index += 1;
                    continue;
                }

                tracing::warn!(
                    label = %label,
                    width = size.width,
                    height = size.height,
                    "label cannot fit in container, skipping"
                );
                dropped.push(DroppedLabel {
                    index,
                    label: label.to_string(),
                    size,
                });
                break;
            }
        }

        PackedLayout {
            container,
            shelf_placements,
            dropped,
        }
    }
}

/// Pack `labels` into `container` in one call
pub fn pack<I, S, M, C>(
    labels: I,
    container: Container,
    style: &TextStyle,
    measure: &M,
    chooser: &mut C,
) -> PackedLayout
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    M: MeasureText + ?Sized,
    C: OrientationChooser + ?Sized,
{
    ShelfPacker::new(container, style.clone(), measure).pack(labels, chooser)
}
