//! Deterministic 2D layout for garden graphs.
//!
//! Places vertices evenly on a circle of fixed radius around a fixed
//! center. The layout depends only on the vertex count; identical input
//! always yields identical output, bit for bit, up to the floating-point
//! determinism of the trigonometric functions.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use garden_core::{GardenError, Result};

/// 2D display coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Creates a point from its coordinates.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Placement parameters for the circular layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Circle radius in display units
    pub radius: f32,

    /// Circle center in display coordinates
    pub center: Point,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            radius: 250.0,
            center: Point::new(400.0, 400.0),
        }
    }
}

impl LayoutConfig {
    /// Validates the placement parameters.
    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(GardenError::config(format!(
                "Layout radius must be positive and finite, got {}",
                self.radius
            )));
        }
        if !self.center.x.is_finite() || !self.center.y.is_finite() {
            return Err(GardenError::config(format!(
                "Layout center must be finite, got ({}, {})",
                self.center.x, self.center.y
            )));
        }
        Ok(())
    }
}

/// Places `vertex_count` vertices evenly on a circle.
///
/// Vertex `i` sits at angle `2π·i / vertex_count` on the configured
/// circle, so consecutive indices are spaced by the same arc. Returns an
/// empty sequence for a zero vertex count. Stateless; a negative count is
/// unrepresentable by construction of the argument type.
pub fn circular_layout(vertex_count: usize, config: &LayoutConfig) -> Vec<Point> {
    let mut positions = Vec::with_capacity(vertex_count);

    for i in 0..vertex_count {
        let angle = 2.0 * PI * (i as f32) / (vertex_count as f32);
        positions.push(Point::new(
            config.center.x + config.radius * angle.cos(),
            config.center.y + config.radius * angle.sin(),
        ));
    }

    positions
}
