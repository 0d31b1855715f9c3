//! # garden-core
//!
//! Core types and the greedy coloring engine for garden adjacency graphs.
//!
//! A garden network is an undirected graph: gardens are zero-based vertex
//! indices, connections are unordered pairs of distinct indices. This crate
//! defines the data model and the coloring pass:
//! - **Types**: [`Edge`], [`EdgeList`], [`Graph`] adjacency view
//! - **Palette**: fixed ordered color set ([`Palette`])
//! - **Engine**: single-pass greedy first-fit coloring ([`color_graph`])
//! - **Errors**: unified error handling with [`GardenError`]
//!
//! The engine is pure and synchronous: no I/O, no shared state, safe to
//! invoke from any thread. Callers rebuild the graph and rerun the pass
//! whenever the vertex count or the edge sequence changes; there is no
//! incremental update path.

pub mod coloring;
pub mod errors;
pub mod palette;
pub mod types;

// Re-export commonly used items
pub use coloring::{color_graph, color_with_palette, Coloring};
pub use errors::{GardenError, Result};
pub use palette::{Palette, NEUTRAL_COLOR};
pub use types::{Edge, EdgeList, Graph, VertexId};
