//! Deterministic random inputs for every generator family.
//!
//! All generators draw from a caller-supplied RNG; [`fixture_rng`] gives
//! each fixture kind its own reproducible stream for a seed.

pub mod array;
pub mod cities;
pub mod graph;
pub mod rng;
pub mod tree;

pub use array::{random_array, random_unique_values};
pub use cities::random_cities;
pub use graph::{random_coloring_graph, random_connected_graph, random_weighted_graph};
pub use rng::{fixture_rng, stream};
pub use tree::random_bst_tree;

/// Node id for the `index`-th generated node: `A`, `B`, ... `Z`.
pub(crate) fn letter_id(index: usize) -> String {
    char::from(b'A' + (index % 26) as u8).to_string()
}
