//! Backtracking and greedy puzzle generators: N-Queens, Knight's Tour
//! and nearest-neighbor TSP, each with a single-move hint.

pub mod knights_tour;
pub mod nqueens;
pub mod tsp;
