//! Measurement oracles that report a label's rendered size
//!
//! Real text metrics belong to the rendering host. The packer only needs
//! something implementing [`MeasureText`], which keeps it testable with stubs.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::types::Size;

/// Font settings a label is rendered with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub font: String,
    pub typeface: String,
    /// Font size in pixels
    pub size: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font: "Bahnschrift".to_string(),
            typeface: "Regular".to_string(),
            size: 130.0,
        }
    }
}

impl TextStyle {
    pub fn new(font: impl Into<String>, size: f64) -> Self {
        Self {
            font: font.into(),
            size,
            ..Self::default()
        }
    }

    pub fn with_typeface(mut self, typeface: impl Into<String>) -> Self {
        self.typeface = typeface.into();
        self
    }
}

/// Reports the pixel size of `label` rendered in `style`
///
/// Calls are expected to be pure: the same label and style give the same size.
pub trait MeasureText {
    fn measure(&self, label: &str, style: &TextStyle) -> Size;
}

impl<F> MeasureText for F
where
    F: Fn(&str, &TextStyle) -> Size,
{
    fn measure(&self, label: &str, style: &TextStyle) -> Size {
        self(label, style)
    }
}

/// Every label has the same size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMeasure(pub Size);

impl MeasureText for FixedMeasure {
    fn measure(&self, _label: &str, _style: &TextStyle) -> Size {
        self.0
    }
}

/// Rough estimate for a monospaced face
///
/// Width is `chars * size * advance`, height is `size * line_height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    /// Glyph advance as a fraction of the font size
    pub advance: f64,
    /// Line height as a fraction of the font size
    pub line_height: f64,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self {
            advance: 0.6,
            line_height: 1.2,
        }
    }
}

impl MeasureText for MonospaceMeasure {
    fn measure(&self, label: &str, style: &TextStyle) -> Size {
        let chars = label.chars().count() as f64;
        Size::new(
            chars * style.size * self.advance,
            style.size * self.line_height,
        )
    }
}

/// Memoizes another oracle per label and style
///
/// Useful when measuring is expensive, e.g. when it renders the text.
#[derive(Debug)]
pub struct CachedMeasure<M> {
    inner: M,
    cache: RefCell<HashMap<(String, String, String, u64), Size>>,
}

impl<M: MeasureText> CachedMeasure<M> {
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Number of distinct measurements stored
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }
}

impl<M: MeasureText> MeasureText for CachedMeasure<M> {
    fn measure(&self, label: &str, style: &TextStyle) -> Size {
        let key = (
            label.to_string(),
            style.font.clone(),
            style.typeface.clone(),
            style.size.to_bits(),
        );
        if let Some(size) = self.cache.borrow().get(&key) {
            return *size;
        }
        let size = self.inner.measure(label, style);
        self.cache.borrow_mut().insert(key, size);
        size
    }
}
