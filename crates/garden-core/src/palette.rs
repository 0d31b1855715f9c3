//! Fixed color palette for garden rendering.

use serde::{Deserialize, Serialize};

use crate::errors::GardenError;

/// Neutral fill (light gray) for vertices without a color assignment.
///
/// Renderers substitute this when the color mapping is incomplete, e.g.
/// during a transient state between vertex-count changes.
pub const NEUTRAL_COLOR: u32 = 0xFFCCCCCC;

/// Immutable ordered sequence of distinct ARGB colors.
///
/// The palette is fixed for the lifetime of a coloring run; the engine
/// works with color *indices* and only rendering resolves them to values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<u32>,
}

impl Default for Palette {
    /// The reference four-color palette.
    fn default() -> Self {
        Self {
            colors: vec![0xFFFF6B6B, 0xFF4ECDC4, 0xFF0077B6, 0xFFFFD166],
        }
    }
}

impl Palette {
    /// Creates a palette from an ordered list of ARGB colors.
    ///
    /// The list must be non-empty and free of duplicates.
    pub fn new(colors: Vec<u32>) -> Result<Self, GardenError> {
        if colors.is_empty() {
            return Err(GardenError::config("Palette must contain at least one color"));
        }
        for (i, &color) in colors.iter().enumerate() {
            if colors[..i].contains(&color) {
                return Err(GardenError::config(format!(
                    "Duplicate palette color {:#010X} at index {}",
                    color, i
                )));
            }
        }
        Ok(Self { colors })
    }

    /// Number of colors in the palette.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` when the palette holds no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// ARGB value for a color index, `None` when out of range.
    pub fn color(&self, index: usize) -> Option<u32> {
        self.colors.get(index).copied()
    }

    /// All colors in palette order.
    pub fn colors(&self) -> &[u32] {
        &self.colors
    }
}
