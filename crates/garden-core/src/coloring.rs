//! Greedy first-fit coloring engine.
//!
//! Assigns each vertex one of a small fixed number of colors so that no
//! connection joins two same-colored gardens, using only local greedy
//! decisions. There is no backtracking and no optimality guarantee: when a
//! vertex's neighbors already use every palette color, the engine falls
//! back to color 0 and records the resulting conflicts instead of failing.
//!
//! The pass is a pure, single-shot computation. Identical
//! `(graph, palette_size)` inputs always yield the identical mapping; no
//! state is carried between invocations.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::palette::Palette;
use crate::types::{Graph, VertexId};

/// Color assignment produced by the greedy engine.
///
/// Total over all vertices: every vertex gets *some* color index in
/// `[0, palette_size)`, even when the palette was exhausted around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coloring {
    /// Color index for each vertex (vertex index -> color index)
    pub colors: Vec<usize>,

    /// Number of distinct color indices used
    pub distinct_colors: usize,

    /// Number of edges whose endpoints share a color (0 = valid coloring)
    pub conflicts: usize,
}

impl Coloring {
    /// Creates an empty coloring for a zero-vertex graph.
    pub fn empty() -> Self {
        Self {
            colors: Vec::new(),
            distinct_colors: 0,
            conflicts: 0,
        }
    }

    /// Color index assigned to a vertex, `None` when out of range.
    pub fn color_of(&self, vertex: VertexId) -> Option<usize> {
        self.colors.get(vertex).copied()
    }

    /// Counts edges where both endpoints have the same color.
    pub fn validate(&self, graph: &Graph) -> usize {
        let mut conflicts = 0;
        for (u, neighbors) in graph.adjacency.iter().enumerate() {
            for &v in neighbors {
                if u < v && self.colors[u] == self.colors[v] {
                    conflicts += 1;
                }
            }
        }
        conflicts
    }

    /// Checks if the coloring is valid (no conflicts).
    pub fn is_valid(&self) -> bool {
        self.conflicts == 0
    }
}

/// Colors the graph with a single greedy first-fit pass.
///
/// Vertices are processed in ascending index order. Each vertex takes the
/// lowest-indexed palette color not used by its already-colored neighbors;
/// later neighbors are still unassigned at that point and do not constrain
/// the choice. When all `palette_size` colors are taken, the vertex reuses
/// color 0. That fallback can put two neighbors on the same color; the
/// degradation is reported through [`Coloring::conflicts`] and must not be
/// papered over by growing the palette.
///
/// Both the ascending processing order and the lowest-index tie-break are
/// load-bearing: a different order yields a different (if often still
/// valid) mapping.
///
/// `palette_size` is expected to be positive. A zero palette is a caller
/// contract violation; the pass still terminates, assigning the fallback
/// color 0 to every vertex.
pub fn color_graph(graph: &Graph, palette_size: usize) -> Coloring {
    let n = graph.num_vertices;
    let mut assigned: Vec<usize> = Vec::with_capacity(n);

    for v in 0..n {
        // Colors taken by lower-indexed neighbors; `assigned` holds exactly
        // the vertices processed so far.
        let mut used = vec![false; palette_size];
        for &neighbor in &graph.adjacency[v] {
            if let Some(&color) = assigned.get(neighbor) {
                if color < palette_size {
                    used[color] = true;
                }
            }
        }

        let color = match (0..palette_size).find(|&c| !used[c]) {
            Some(c) => c,
            None => {
                log::warn!(
                    "Palette exhausted at vertex {}: reusing color 0 ({} neighbors)",
                    v,
                    graph.adjacency[v].len()
                );
                0
            }
        };
        assigned.push(color);
    }

    let distinct_colors = assigned.iter().collect::<HashSet<_>>().len();
    let mut solution = Coloring {
        colors: assigned,
        distinct_colors,
        conflicts: 0,
    };
    solution.conflicts = solution.validate(graph);

    log::debug!(
        "Colored {} vertices with {} of {} palette colors, {} conflicts",
        n,
        solution.distinct_colors,
        palette_size,
        solution.conflicts
    );

    solution
}

/// Convenience wrapper: colors the graph against a concrete palette.
pub fn color_with_palette(graph: &Graph, palette: &Palette) -> Coloring {
    color_graph(graph, palette.len())
}
