use stepwise_ir::parse::{parse_request, request_from_value};
use stepwise_ir::request::{
    KnightHintRequest, MstRequest, QueensHintRequest, QueensSolveRequest, SortRequest,
    TreeTraversalRequest,
};
use stepwise_ir::types::{ColorGraph, TraversalType};

#[test]
fn test_sort_request_defaults_to_ascending() {
    let req: SortRequest = parse_request(r#"{"array": [3, 1, 2]}"#).unwrap();
    assert!(req.ascending);
    assert_eq!(req.array, vec![3, 1, 2]);

    let req: SortRequest = parse_request(r#"{"array": [3, 1], "ascending": false}"#).unwrap();
    assert!(!req.ascending);
}

#[test]
fn test_tree_request_traversal_type() {
    let req: TreeTraversalRequest = parse_request(
        r#"{
            "nodes": [{"id": "A", "value": 50}],
            "edges": [],
            "startNodeId": "A",
            "traversalType": "InOrder"
        }"#,
    )
    .unwrap();
    assert_eq!(req.traversal_type, TraversalType::InOrder);
    assert_eq!(req.nodes[0].x, 0.0);

    let req: TreeTraversalRequest =
        parse_request(r#"{"nodes": [{"id": "A", "value": 1}]}"#).unwrap();
    assert_eq!(req.traversal_type, TraversalType::PreOrder);
    assert!(req.start_node_id.is_empty());
}

#[test]
fn test_mst_request_optional_start() {
    let req: MstRequest = request_from_value(serde_json::json!({
        "nodes": [{"id": "A"}, {"id": "B"}],
        "edges": [{"source": "A", "target": "B", "weight": 4}]
    }))
    .unwrap();
    assert!(req.start_node_id.is_none());
    assert_eq!(req.edges[0].weight, 4);
}

#[test]
fn test_queens_board_sentinels() {
    let req: QueensHintRequest = parse_request(r#"{"currentBoard": [1, 3, -1, -1]}"#).unwrap();
    assert_eq!(req.current_board, vec![Some(1), Some(3), None, None]);

    let req: QueensHintRequest = parse_request(r#"{"board": [-1, 0]}"#).unwrap();
    assert_eq!(req.current_board, vec![None, Some(0)]);

    let req: QueensSolveRequest = parse_request("{}").unwrap();
    assert_eq!(req.n, 8);
}

#[test]
fn test_knight_hint_request() {
    let mut board = vec![-1; 64];
    board[0] = 0;
    let req: KnightHintRequest = request_from_value(serde_json::json!({
        "board": board,
        "currentRow": 0,
        "currentCol": 0
    }))
    .unwrap();
    assert_eq!(req.board.len(), 64);
    assert_eq!(req.board[0], 0);
}

#[test]
fn test_color_graph_uncolored_sentinel() {
    let graph: ColorGraph = parse_request(
        r#"{
            "nodes": [{"id": 0, "colorIndex": 2}, {"id": 1, "colorIndex": -1}, {"id": 2}],
            "edges": [{"source": 0, "target": 1}]
        }"#,
    )
    .unwrap();
    assert_eq!(graph.nodes[0].color_index, Some(2));
    assert_eq!(graph.nodes[1].color_index, None);
    assert_eq!(graph.nodes[2].color_index, None);
    assert_eq!(graph.neighbors(1), vec![0]);

    let json = serde_json::to_value(&graph).unwrap();
    assert_eq!(json["nodes"][1]["colorIndex"], -1);
}

#[test]
fn test_invalid_json_is_parse_error() {
    let result: Result<SortRequest, _> = parse_request("not json");
    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("JSON parse error"));
}
