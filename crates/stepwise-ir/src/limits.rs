//! Product ceilings on input size.
//!
//! These are fixed, not configurable: traces for inputs past them grow
//! too large to animate, and the backtracking generators would no longer
//! finish promptly.

/// Largest array accepted by any search, sort, heap or BST generator.
pub const MAX_ARRAY_LEN: usize = 20;

/// Smallest array accepted by the sort generators.
pub const MIN_SORT_LEN: usize = 2;

/// Largest node count accepted by tree and graph generators.
pub const MAX_GRAPH_NODES: usize = 26;

/// Largest edge count accepted by graph generators.
pub const MAX_GRAPH_EDGES: usize = 400;

/// Largest N-Queens board.
pub const MAX_QUEENS: usize = 12;

/// Side of the Knight's Tour board.
pub const BOARD_SIZE: usize = 8;

/// Largest TSP instance.
pub const MAX_CITIES: usize = 26;

/// Longest Huffman input, in characters.
pub const MAX_TEXT_LEN: usize = 500;

/// Smallest array value or edge weight. Values stay within 32 bits so
/// interpolation spans and path sums cannot overflow.
pub const MIN_VALUE: i64 = i32::MIN as i64;

/// Largest array value or edge weight.
pub const MAX_VALUE: i64 = i32::MAX as i64;

/// Longest bit string accepted by Huffman decode.
pub const MAX_ENCODED_LEN: usize = MAX_TEXT_LEN * 32;
