use stepwise_ir::types::{City, WeightedEdge};
use stepwise_ir::validate::*;

#[test]
fn test_search_array_bounds() {
    assert_eq!(validate_search_array(&[]), Err(ValidationError::EmptyArray));
    assert!(validate_search_array(&[7]).is_ok());
    assert!(validate_search_array(&[0; 20]).is_ok());
    assert_eq!(
        validate_search_array(&[0; 21]),
        Err(ValidationError::TooManyElements { max: 20 })
    );
}

#[test]
fn test_sort_array_requires_two_elements() {
    assert_eq!(validate_sort_array(&[]), Err(ValidationError::EmptyArray));
    assert_eq!(
        validate_sort_array(&[1]),
        Err(ValidationError::TooFewElements { min: 2 })
    );
    assert!(validate_sort_array(&[2, 1]).is_ok());
}

#[test]
fn test_radix_rejects_negatives_with_distinct_error() {
    let err = validate_radix_array(&[3, -4, 5]).unwrap_err();
    assert_eq!(err, ValidationError::NegativeValue { value: -4 });
    assert!(err.to_string().contains("non-negative"));
    // Size errors still take precedence.
    assert_eq!(
        validate_radix_array(&[-1]),
        Err(ValidationError::TooFewElements { min: 2 })
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(ValidationError::EmptyArray.to_string(), "Array cannot be empty");
    assert_eq!(
        ValidationError::TooFewElements { min: 2 }.to_string(),
        "Array must have at least 2 elements"
    );
    assert_eq!(
        ValidationError::TooManyElements { max: 20 }.to_string(),
        "Array size cannot exceed 20 elements"
    );
}

#[test]
fn test_graph_size() {
    assert_eq!(validate_graph_size(0, 0), Err(ValidationError::EmptyGraph));
    assert!(validate_graph_size(26, 10).is_ok());
    assert!(matches!(
        validate_graph_size(27, 0),
        Err(ValidationError::TooManyNodes { count: 27, .. })
    ));
    assert!(matches!(
        validate_graph_size(5, 401),
        Err(ValidationError::TooManyEdges { count: 401, .. })
    ));
}

#[test]
fn test_negative_weight_detected() {
    let edges = vec![WeightedEdge::new("A", "B", 3), WeightedEdge::new("B", "C", -2)];
    let err = validate_non_negative_weights(&edges).unwrap_err();
    assert!(err.to_string().contains("B-C"));
}

#[test]
fn test_queens_range() {
    assert_eq!(validate_queens(1), Ok(1));
    assert_eq!(validate_queens(12), Ok(12));
    assert!(validate_queens(0).is_err());
    assert!(validate_queens(-3).is_err());
    assert!(validate_queens(13).is_err());
}

#[test]
fn test_square_on_board() {
    let square = validate_square(7, 0).unwrap();
    assert_eq!((square.row, square.col), (7, 0));
    assert!(validate_square(8, 0).is_err());
    assert!(validate_square(0, -1).is_err());
    assert!(validate_board_cells(64).is_ok());
    assert!(validate_board_cells(63).is_err());
}

#[test]
fn test_cities_and_text() {
    assert_eq!(validate_cities(&[]), Err(ValidationError::EmptyCities));
    let city = City { id: 0, x: 0.0, y: 0.0 };
    assert!(validate_cities(&[city]).is_ok());
    assert_eq!(validate_text(""), Err(ValidationError::EmptyText));
    assert!(validate_text("aaab").is_ok());
    assert!(matches!(
        validate_text(&"x".repeat(501)),
        Err(ValidationError::TextTooLong { len: 501, .. })
    ));
}

#[test]
fn test_values_outside_32_bit_range_rejected() {
    assert_eq!(
        validate_search_array(&[i64::MIN, 0, i64::MAX]),
        Err(ValidationError::ValueOutOfRange {
            value: i64::MIN,
            min: i32::MIN as i64,
            max: i32::MAX as i64,
        })
    );
    assert!(matches!(
        validate_sort_array(&[1, i64::MAX]),
        Err(ValidationError::ValueOutOfRange { value: i64::MAX, .. })
    ));
    assert!(validate_sort_array(&[i32::MIN as i64, i32::MAX as i64]).is_ok());
}

#[test]
fn test_edge_weight_range() {
    let edge = |weight| WeightedEdge {
        source: "A".into(),
        target: "B".into(),
        weight,
    };
    assert!(validate_edge_weights(&[edge(i32::MAX as i64), edge(-5)]).is_ok());
    assert!(matches!(
        validate_edge_weights(&[edge(1), edge(i64::MAX)]),
        Err(ValidationError::WeightOutOfRange { weight: i64::MAX, .. })
    ));
}

#[test]
fn test_ceiling_checks_allow_empty_input() {
    assert!(validate_graph_ceiling(0, 0).is_ok());
    assert!(validate_graph_ceiling(26, 400).is_ok());
    assert_eq!(
        validate_graph_ceiling(3000, 0),
        Err(ValidationError::TooManyNodes { count: 3000, max: 26 })
    );
    assert!(validate_city_ceiling(&[]).is_ok());
    let cities: Vec<City> = (0..27).map(|i| City { id: i, x: i as f64, y: 0.0 }).collect();
    assert!(matches!(
        validate_city_ceiling(&cities),
        Err(ValidationError::TooManyCities { count: 27, .. })
    ));
    assert!(validate_encoded(&"0".repeat(16_000)).is_ok());
    assert!(matches!(
        validate_encoded(&"0".repeat(16_001)),
        Err(ValidationError::EncodedTooLong { len: 16_001, .. })
    ));
    assert!(validate_symbol_count(500).is_ok());
    assert_eq!(
        validate_symbol_count(501),
        Err(ValidationError::TooManySymbols { count: 501, max: 500 })
    );
}
