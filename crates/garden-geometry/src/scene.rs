//! Render-scene assembly.
//!
//! Joins the layout positions and the color mapping by vertex index into
//! draw-ready data. Drawing primitives live outside this crate; the scene
//! is the last common representation before a renderer takes over.

use serde::{Deserialize, Serialize};

use garden_core::{Coloring, EdgeList, Palette, NEUTRAL_COLOR};

use crate::layout::Point;

/// A single garden node ready for drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSprite {
    /// Display position from the layout
    pub position: Point,

    /// ARGB fill color resolved through the palette
    pub color: u32,

    /// 1-based display label ("garden 1" is vertex 0)
    pub label: String,
}

/// Line segment between two connected gardens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeSegment {
    pub from: Point,
    pub to: Point,
}

/// Draw-ready view of one `(vertex_count, edges)` snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub nodes: Vec<NodeSprite>,
    pub edges: Vec<EdgeSegment>,
}

/// Assembles the scene from the engine outputs.
///
/// The color mapping may be incomplete relative to the layout (transient
/// states while inputs are being edited); such vertices, and any color
/// index outside the palette, fall back to [`NEUTRAL_COLOR`]. Edges whose
/// endpoints have no layout position are skipped.
pub fn assemble_scene(
    edges: &EdgeList,
    coloring: &Coloring,
    palette: &Palette,
    positions: &[Point],
) -> Scene {
    let nodes = positions
        .iter()
        .enumerate()
        .map(|(index, &position)| {
            let color = coloring
                .color_of(index)
                .and_then(|c| palette.color(c))
                .unwrap_or(NEUTRAL_COLOR);
            NodeSprite {
                position,
                color,
                label: (index + 1).to_string(),
            }
        })
        .collect();

    let segments = edges
        .iter()
        .filter_map(|edge| {
            let (u, v) = edge.endpoints();
            match (positions.get(u), positions.get(v)) {
                (Some(&from), Some(&to)) => Some(EdgeSegment { from, to }),
                _ => {
                    log::debug!(
                        "Dropping edge ({}, {}) from scene: no layout position",
                        u,
                        v
                    );
                    None
                }
            }
        })
        .collect();

    Scene {
        nodes,
        edges: segments,
    }
}
