//! Full "generate" flow: edge list -> adjacency -> coloring -> layout ->
//! scene, the way a caller combines the engine outputs for rendering.

use garden_core::{color_with_palette, Edge, EdgeList, Graph, Palette};
use garden_geometry::{assemble_scene, circular_layout, LayoutConfig};

fn edge(a: usize, b: usize) -> Edge {
    Edge::new(a, b).unwrap()
}

#[test]
fn generate_produces_consistent_snapshot() {
    env_logger::try_init().ok();

    let vertex_count = 4;
    let mut edges = EdgeList::new();
    edges.push(edge(0, 1));
    edges.push(edge(0, 2));
    edges.push(edge(0, 3));

    let config = LayoutConfig::default();
    config.validate().unwrap();
    let palette = Palette::default();

    let graph = Graph::from_edges(vertex_count, &edges);
    let coloring = color_with_palette(&graph, &palette);
    let positions = circular_layout(vertex_count, &config);

    let scene = assemble_scene(&edges, &coloring, &palette, &positions);

    assert_eq!(scene.nodes.len(), vertex_count);
    assert_eq!(scene.edges.len(), edges.len());

    // Hub and leaves resolve to the expected palette entries
    assert_eq!(scene.nodes[0].color, palette.color(0).unwrap());
    for leaf in &scene.nodes[1..] {
        assert_eq!(leaf.color, palette.color(1).unwrap());
    }

    // Labels are 1-based for display
    let labels: Vec<&str> = scene.nodes.iter().map(|n| n.label.as_str()).collect();
    assert_eq!(labels, vec!["1", "2", "3", "4"]);

    // Every node sits on the configured circle
    for node in &scene.nodes {
        let dist = node.position.distance(&config.center);
        assert!((dist - config.radius).abs() < 1e-3);
    }
}

#[test]
fn regenerate_after_shrinking_vertex_count() {
    let mut edges = EdgeList::new();
    edges.push(edge(0, 1));
    edges.push(edge(1, 4));

    let config = LayoutConfig::default();
    let palette = Palette::default();

    // First generate with 5 gardens, then shrink to 3 and regenerate;
    // everything is recomputed from the same edge sequence.
    for &vertex_count in &[5usize, 3] {
        let graph = Graph::from_edges(vertex_count, &edges);
        let coloring = color_with_palette(&graph, &palette);
        let positions = circular_layout(vertex_count, &config);
        let scene = assemble_scene(&edges, &coloring, &palette, &positions);

        assert_eq!(scene.nodes.len(), vertex_count);
        let expected_edges = if vertex_count > 4 { 2 } else { 1 };
        assert_eq!(scene.edges.len(), expected_edges);
        assert!(coloring.is_valid());
    }
}

#[test]
fn identical_inputs_yield_identical_scenes() {
    let mut edges = EdgeList::new();
    edges.push(edge(0, 1));
    edges.push(edge(1, 2));
    edges.push(edge(0, 2));

    let config = LayoutConfig::default();
    let palette = Palette::default();

    let build = || {
        let graph = Graph::from_edges(3, &edges);
        let coloring = color_with_palette(&graph, &palette);
        let positions = circular_layout(3, &config);
        assemble_scene(&edges, &coloring, &palette, &positions)
    };

    assert_eq!(build(), build());
}
