use stepwise_fixture::{fixture_rng, random_coloring_graph, stream};
use stepwise_graph::coloring::{check_conflicts, greedy_coloring, next_best_move, ColoringMove};
use stepwise_ir::types::{ColorEdge, ColorGraph, ColorNode};
use stepwise_ir::validate::ValidationError;

fn graph(n: usize, edges: &[(usize, usize)]) -> ColorGraph {
    ColorGraph {
        nodes: (0..n).map(ColorNode::uncolored).collect(),
        edges: edges
            .iter()
            .map(|&(source, target)| ColorEdge { source, target })
            .collect(),
    }
}

#[test]
fn test_greedy_triangle_uses_three_colors() {
    let result = greedy_coloring(&graph(3, &[(0, 1), (1, 2), (0, 2)])).unwrap();
    let colors: Vec<Option<usize>> = result.graph.nodes.iter().map(|n| n.color_index).collect();
    assert_eq!(colors, vec![Some(0), Some(1), Some(2)]);
    assert_eq!(result.colors_used, 3);
    assert_eq!(result.steps.len(), 3);
    assert!(check_conflicts(&result.graph).unwrap().is_empty());
}

#[test]
fn test_greedy_path_alternates() {
    let result = greedy_coloring(&graph(4, &[(0, 1), (1, 2), (2, 3)])).unwrap();
    let colors: Vec<Option<usize>> = result.graph.nodes.iter().map(|n| n.color_index).collect();
    assert_eq!(colors, vec![Some(0), Some(1), Some(0), Some(1)]);
}

#[test]
fn test_greedy_steps_snapshot_colors() {
    let result = greedy_coloring(&graph(2, &[(0, 1)])).unwrap();
    assert_eq!(result.steps[0].colors, vec![Some(0), None]);
    let json = serde_json::to_value(&result.steps[0]).unwrap();
    assert_eq!(json["colors"], serde_json::json!([0, -1]));
}

#[test]
fn test_greedy_ignores_existing_colors() {
    let mut input = graph(2, &[(0, 1)]);
    input.nodes[0].color_index = Some(5);
    let result = greedy_coloring(&input).unwrap();
    assert_eq!(result.graph.nodes[0].color_index, Some(0));
}

#[test]
fn test_greedy_empty_graph_rejected() {
    assert!(greedy_coloring(&ColorGraph::default()).is_err());
}

#[test]
fn test_fixture_colorings_are_proper() {
    for seed in 0..30 {
        let input = random_coloring_graph(&mut fixture_rng(seed, stream::COLORING_GRAPH), 10);
        let result = greedy_coloring(&input).unwrap();
        assert!(check_conflicts(&result.graph).unwrap().is_empty(), "seed {seed}");
        assert!(result.graph.nodes.iter().all(|n| n.color_index.is_some()));
    }
}

#[test]
fn test_dsatur_prefers_saturation_then_degree() {
    // Star around node 1, plus edge 2-3.
    let mut g = graph(4, &[(1, 0), (1, 2), (1, 3), (2, 3)]);
    assert_eq!(
        next_best_move(&g).unwrap(),
        Some(ColoringMove {
            node_id: 1,
            color_index: 0
        })
    );

    g.nodes[1].color_index = Some(0);
    g.nodes[3].color_index = Some(1);
    // Node 2 sees colors {0, 1}; node 0 only {0}.
    assert_eq!(
        next_best_move(&g).unwrap(),
        Some(ColoringMove {
            node_id: 2,
            color_index: 2
        })
    );
}

#[test]
fn test_dsatur_none_when_fully_colored() {
    let mut g = graph(1, &[]);
    g.nodes[0].color_index = Some(0);
    assert_eq!(next_best_move(&g).unwrap(), None);
}

#[test]
fn test_conflict_messages() {
    let mut g = graph(3, &[(0, 1), (1, 2)]);
    g.nodes[0].color_index = Some(2);
    g.nodes[1].color_index = Some(2);
    assert_eq!(
        check_conflicts(&g).unwrap(),
        vec!["Conflict between Node 0 and Node 1 (Color 2)".to_string()]
    );
}

#[test]
fn test_uncolored_pairs_are_not_conflicts() {
    let g = graph(2, &[(0, 1)]);
    assert!(check_conflicts(&g).unwrap().is_empty());
}

#[test]
fn test_hints_reject_oversized_graphs() {
    let g = graph(3000, &[]);
    assert_eq!(
        next_best_move(&g).unwrap_err(),
        ValidationError::TooManyNodes { count: 3000, max: 26 }
    );
    assert!(check_conflicts(&g).is_err());

    let dense: Vec<(usize, usize)> = (0..401).map(|i| (i % 5, (i + 1) % 5)).collect();
    assert!(matches!(
        check_conflicts(&graph(5, &dense)),
        Err(ValidationError::TooManyEdges { count: 401, .. })
    ));
}

#[test]
fn test_hints_accept_empty_graph() {
    assert_eq!(next_best_move(&ColorGraph::default()).unwrap(), None);
    assert!(check_conflicts(&ColorGraph::default()).unwrap().is_empty());
}
