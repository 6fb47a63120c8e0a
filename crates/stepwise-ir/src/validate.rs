//! Input shape checks run before any step is generated.
//!
//! A failed check aborts the request: no partial trace is ever returned.

use crate::limits::{
    BOARD_SIZE, MAX_ARRAY_LEN, MAX_CITIES, MAX_ENCODED_LEN, MAX_GRAPH_EDGES, MAX_GRAPH_NODES,
    MAX_QUEENS, MAX_TEXT_LEN, MAX_VALUE, MIN_SORT_LEN, MIN_VALUE,
};
use crate::types::{City, Square, WeightedEdge};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Array cannot be empty")]
    EmptyArray,

    #[error("Array must have at least {min} elements")]
    TooFewElements { min: usize },

    #[error("Array size cannot exceed {max} elements")]
    TooManyElements { max: usize },

    #[error("Radix Sort (LSD) requires non-negative integers for this visualization.")]
    NegativeValue { value: i64 },

    #[error("Value {value} is outside the supported range {min}..={max}")]
    ValueOutOfRange { value: i64, min: i64, max: i64 },

    #[error("Graph must contain at least one node")]
    EmptyGraph,

    #[error("Graph has {count} nodes (max {max})")]
    TooManyNodes { count: usize, max: usize },

    #[error("Graph has {count} edges (max {max})")]
    TooManyEdges { count: usize, max: usize },

    #[error("Edge {from}-{to} has negative weight {weight}; shortest paths need non-negative weights")]
    NegativeWeight { from: String, to: String, weight: i64 },

    #[error("Edge {from}-{to} has weight {weight} outside the supported range {min}..={max}")]
    WeightOutOfRange {
        from: String,
        to: String,
        weight: i64,
        min: i64,
        max: i64,
    },

    #[error("Board size must be between 1 and {max} (got {n})")]
    BoardSize { n: i64, max: usize },

    #[error("Square ({row}, {col}) is off the {BOARD_SIZE}x{BOARD_SIZE} board")]
    SquareOffBoard { row: i64, col: i64 },

    #[error("Board must have {expected} cells (got {len})")]
    BoardShape { len: usize, expected: usize },

    #[error("At least one city is required")]
    EmptyCities,

    #[error("Too many cities ({count}, max {max})")]
    TooManyCities { count: usize, max: usize },

    #[error("Text cannot be empty")]
    EmptyText,

    #[error("Text is too long ({len} characters, max {max})")]
    TextTooLong { len: usize, max: usize },

    #[error("Encoded text is too long ({len} bits, max {max})")]
    EncodedTooLong { len: usize, max: usize },

    #[error("Too many symbols ({count}, max {max})")]
    TooManySymbols { count: usize, max: usize },
}

/// Searches, heaps and BST builds accept a single element.
pub fn validate_search_array(array: &[i64]) -> Result<(), ValidationError> {
    if array.is_empty() {
        return Err(ValidationError::EmptyArray);
    }
    if array.len() > MAX_ARRAY_LEN {
        return Err(ValidationError::TooManyElements { max: MAX_ARRAY_LEN });
    }
    if let Some(&value) = array.iter().find(|v| !(MIN_VALUE..=MAX_VALUE).contains(*v)) {
        return Err(ValidationError::ValueOutOfRange {
            value,
            min: MIN_VALUE,
            max: MAX_VALUE,
        });
    }
    Ok(())
}

pub fn validate_sort_array(array: &[i64]) -> Result<(), ValidationError> {
    validate_search_array(array)?;
    if array.len() < MIN_SORT_LEN {
        return Err(ValidationError::TooFewElements { min: MIN_SORT_LEN });
    }
    Ok(())
}

/// LSD radix sort buckets on decimal digits and cannot place negatives.
pub fn validate_radix_array(array: &[i64]) -> Result<(), ValidationError> {
    validate_sort_array(array)?;
    if let Some(&value) = array.iter().find(|v| **v < 0) {
        return Err(ValidationError::NegativeValue { value });
    }
    Ok(())
}

pub fn validate_graph_size(nodes: usize, edges: usize) -> Result<(), ValidationError> {
    if nodes == 0 {
        return Err(ValidationError::EmptyGraph);
    }
    if nodes > MAX_GRAPH_NODES {
        return Err(ValidationError::TooManyNodes {
            count: nodes,
            max: MAX_GRAPH_NODES,
        });
    }
    if edges > MAX_GRAPH_EDGES {
        return Err(ValidationError::TooManyEdges {
            count: edges,
            max: MAX_GRAPH_EDGES,
        });
    }
    Ok(())
}

/// Upper bounds only: hint and check operations accept an empty graph.
pub fn validate_graph_ceiling(nodes: usize, edges: usize) -> Result<(), ValidationError> {
    if nodes == 0 {
        return Ok(());
    }
    validate_graph_size(nodes, edges)
}

pub fn validate_edge_weights(edges: &[WeightedEdge]) -> Result<(), ValidationError> {
    match edges
        .iter()
        .find(|e| !(MIN_VALUE..=MAX_VALUE).contains(&e.weight))
    {
        Some(edge) => Err(ValidationError::WeightOutOfRange {
            from: edge.source.clone(),
            to: edge.target.clone(),
            weight: edge.weight,
            min: MIN_VALUE,
            max: MAX_VALUE,
        }),
        None => Ok(()),
    }
}

pub fn validate_non_negative_weights(edges: &[WeightedEdge]) -> Result<(), ValidationError> {
    match edges.iter().find(|e| e.weight < 0) {
        Some(edge) => Err(ValidationError::NegativeWeight {
            from: edge.source.clone(),
            to: edge.target.clone(),
            weight: edge.weight,
        }),
        None => Ok(()),
    }
}

pub fn validate_queens(n: i64) -> Result<usize, ValidationError> {
    match usize::try_from(n) {
        Ok(size) if (1..=MAX_QUEENS).contains(&size) => Ok(size),
        _ => Err(ValidationError::BoardSize { n, max: MAX_QUEENS }),
    }
}

/// Convert raw client coordinates into a square on the knight's board.
pub fn validate_square(row: i64, col: i64) -> Result<Square, ValidationError> {
    let on_board = |v: i64| usize::try_from(v).ok().filter(|v| *v < BOARD_SIZE);
    match (on_board(row), on_board(col)) {
        (Some(r), Some(c)) => Ok(Square::new(r, c)),
        _ => Err(ValidationError::SquareOffBoard { row, col }),
    }
}

pub fn validate_board_cells(len: usize) -> Result<(), ValidationError> {
    let expected = BOARD_SIZE * BOARD_SIZE;
    if len != expected {
        return Err(ValidationError::BoardShape { len, expected });
    }
    Ok(())
}

pub fn validate_cities(cities: &[City]) -> Result<(), ValidationError> {
    if cities.is_empty() {
        return Err(ValidationError::EmptyCities);
    }
    if cities.len() > MAX_CITIES {
        return Err(ValidationError::TooManyCities {
            count: cities.len(),
            max: MAX_CITIES,
        });
    }
    Ok(())
}

/// Upper bound only: an empty city list has no next move.
pub fn validate_city_ceiling(cities: &[City]) -> Result<(), ValidationError> {
    if cities.is_empty() {
        return Ok(());
    }
    validate_cities(cities)
}

pub fn validate_encoded(encoded: &str) -> Result<(), ValidationError> {
    if encoded.len() > MAX_ENCODED_LEN {
        return Err(ValidationError::EncodedTooLong {
            len: encoded.len(),
            max: MAX_ENCODED_LEN,
        });
    }
    Ok(())
}

pub fn validate_symbol_count(count: usize) -> Result<(), ValidationError> {
    if count > MAX_TEXT_LEN {
        return Err(ValidationError::TooManySymbols {
            count,
            max: MAX_TEXT_LEN,
        });
    }
    Ok(())
}

pub fn validate_text(text: &str) -> Result<(), ValidationError> {
    let len = text.chars().count();
    if len == 0 {
        return Err(ValidationError::EmptyText);
    }
    if len > MAX_TEXT_LEN {
        return Err(ValidationError::TextTooLong {
            len,
            max: MAX_TEXT_LEN,
        });
    }
    Ok(())
}
