use rand::Rng;
use stepwise_ir::types::{
    ColorEdge, ColorGraph, ColorNode, Edge, Graph, GraphNode, WeightedEdge, WeightedGraph,
};
use stepwise_ir::limits::MAX_GRAPH_NODES;

use crate::letter_id;

const CANVAS_WIDTH: i64 = 800;
const CANVAS_HEIGHT: i64 = 500;
const MARGIN: i64 = 50;

fn random_nodes<R: Rng>(rng: &mut R, count: usize) -> Vec<GraphNode> {
    (0..count)
        .map(|i| GraphNode {
            id: letter_id(i),
            x: rng.gen_range(MARGIN..CANVAS_WIDTH - MARGIN) as f64,
            y: rng.gen_range(MARGIN..CANVAS_HEIGHT - MARGIN) as f64,
        })
        .collect()
}

fn has_edge(edges: &[Edge], a: &str, b: &str) -> bool {
    edges
        .iter()
        .any(|e| (e.source == a && e.target == b) || (e.source == b && e.target == a))
}

/// An unweighted graph in which every node is reachable from node 0.
///
/// A random spanning tree is grown from node 0 first; `count / 2`
/// extra edges are then attempted, skipping self-loops and duplicates.
pub fn random_connected_graph<R: Rng>(rng: &mut R, count: usize) -> Graph {
    let count = count.min(MAX_GRAPH_NODES);
    let nodes = random_nodes(rng, count);
    let mut edges = Vec::new();
    if count == 0 {
        return Graph { nodes, edges };
    }

    let mut connected = vec![0];
    let mut remaining: Vec<usize> = (1..count).collect();
    while !remaining.is_empty() {
        let source = connected[rng.gen_range(0..connected.len())];
        let target = remaining.remove(rng.gen_range(0..remaining.len()));
        edges.push(Edge::new(nodes[source].id.clone(), nodes[target].id.clone()));
        connected.push(target);
    }

    for _ in 0..count / 2 {
        let s = &nodes[rng.gen_range(0..count)].id;
        let t = &nodes[rng.gen_range(0..count)].id;
        if s != t && !has_edge(&edges, s, t) {
            edges.push(Edge::new(s.clone(), t.clone()));
        }
    }

    Graph { nodes, edges }
}

/// A weighted graph with a spanning path `0-1-...-(n-1)` plus `count`
/// extra edge attempts. Weights track on-canvas distance.
pub fn random_weighted_graph<R: Rng>(rng: &mut R, count: usize) -> WeightedGraph {
    let count = count.min(MAX_GRAPH_NODES);
    let mut graph = WeightedGraph {
        nodes: random_nodes(rng, count),
        edges: Vec::new(),
    };

    for i in 1..count {
        add_weighted_edge(rng, &mut graph, i - 1, i);
    }
    for _ in 0..count {
        let i = rng.gen_range(0..count);
        let j = rng.gen_range(0..count);
        if i != j {
            add_weighted_edge(rng, &mut graph, i, j);
        }
    }
    graph
}

fn add_weighted_edge<R: Rng>(rng: &mut R, graph: &mut WeightedGraph, a: usize, b: usize) {
    let (n1, n2) = (&graph.nodes[a], &graph.nodes[b]);
    let duplicate = graph.edges.iter().any(|e| {
        (e.source == n1.id && e.target == n2.id) || (e.source == n2.id && e.target == n1.id)
    });
    if duplicate {
        return;
    }

    let distance = ((n1.x - n2.x).powi(2) + (n1.y - n2.y).powi(2)).sqrt() as i64 / 5;
    let weight = rng.gen_range(distance - 5..distance + 10).max(1);
    let edge = WeightedEdge::new(n1.id.clone(), n2.id.clone(), weight);
    graph.edges.push(edge);
}

/// A coloring instance with integer ids, percentage coordinates and
/// roughly `1.5 * count` edges.
pub fn random_coloring_graph<R: Rng>(rng: &mut R, count: usize) -> ColorGraph {
    let count = count.min(MAX_GRAPH_NODES);
    let nodes: Vec<ColorNode> = (0..count)
        .map(|id| ColorNode {
            x: 10.0 + rng.gen::<f64>() * 80.0,
            y: 10.0 + rng.gen::<f64>() * 80.0,
            ..ColorNode::uncolored(id)
        })
        .collect();

    let mut edges: Vec<ColorEdge> = Vec::new();
    if count > 0 {
        for _ in 0..count * 3 / 2 {
            let u = rng.gen_range(0..count);
            let v = rng.gen_range(0..count);
            let duplicate = edges
                .iter()
                .any(|e| (e.source == u && e.target == v) || (e.source == v && e.target == u));
            if u != v && !duplicate {
                edges.push(ColorEdge {
                    source: u,
                    target: v,
                });
            }
        }
    }

    ColorGraph { nodes, edges }
}
