//! # garden-geometry
//!
//! Deterministic 2D layout and render-scene assembly for garden graphs.
//!
//! This crate turns engine outputs into display data:
//! - [`circular_layout`] maps vertex indices to evenly spaced points on a
//!   fixed circle
//! - [`assemble_scene`] joins positions and colors by vertex index into
//!   draw-ready nodes and edge segments
//!
//! Both pieces are pure functions; the caller invokes them once per
//! "generate" action and hands the [`Scene`] to a renderer.

pub mod layout;
pub mod scene;

pub use layout::{circular_layout, LayoutConfig, Point};
pub use scene::{assemble_scene, EdgeSegment, NodeSprite, Scene};
