//! Trees and graphs: BST construction, tree and graph traversals,
//! minimum spanning trees, shortest paths and graph coloring.

pub mod adjacency;
pub mod bst;
pub mod coloring;
pub mod dijkstra;
pub mod mst;
pub mod traversal;
pub mod tree;
