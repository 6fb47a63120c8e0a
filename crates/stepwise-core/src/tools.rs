//! Tool table: argument decoding, generator dispatch and result encoding.
//!
//! Every tool takes a camelCase JSON object and returns the generator's
//! result serialized as JSON. Hint tools answer `{"found": false}` when
//! there is no move to suggest.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use stepwise_array::heap::{build_heap, HeapKind};
use stepwise_array::search::{binary_search, interpolation_search, linear_search};
use stepwise_array::sort::{bubble_sort, heap_sort, merge_sort, quick_sort, radix_sort};
use stepwise_array::Order;
use stepwise_fixture::{
    fixture_rng, random_array, random_bst_tree, random_cities, random_coloring_graph,
    random_connected_graph, random_weighted_graph, stream,
};
use stepwise_graph::bst::bst_build;
use stepwise_graph::coloring::{check_conflicts, greedy_coloring, next_best_move};
use stepwise_graph::dijkstra::{dijkstra_next_move, dijkstra_solve};
use stepwise_graph::mst::{kruskal, prim};
use stepwise_graph::traversal::{graph_bfs, graph_dfs};
use stepwise_graph::tree::{tree_bfs, tree_dfs};
use stepwise_huffman::{huffman_build, huffman_decode, next_merge, HuffmanError, HuffmanNode};
use stepwise_ir::limits::MAX_ARRAY_LEN;
use stepwise_ir::parse::{request_from_value, ParseError};
use stepwise_ir::request::{
    BstRequest, ColoringRequest, FixtureRequest, GraphTraversalRequest, HeapRequest,
    HuffmanBuildRequest, KnightHintRequest, KnightSolveRequest, MergeHintRequest, MstRequest,
    PathRequest, QueensHintRequest, QueensSolveRequest, SearchRequest, SortRequest,
    TreeTraversalRequest, TspHintRequest, TspSolveRequest,
};
use stepwise_ir::ValidationError;
use stepwise_puzzle::knights_tour::{knights_tour_next_move, knights_tour_solve};
use stepwise_puzzle::nqueens::{nqueens_next_move, nqueens_solve};
use stepwise_puzzle::tsp::{tsp_next_move, tsp_solve};

#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Huffman(#[from] HuffmanError),

    #[error("Failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

/// Arguments of `huffman_decode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HuffmanDecodeRequest {
    #[serde(default)]
    pub encoded: String,
    #[serde(default)]
    pub tree_root: Option<HuffmanNode>,
}

// ── Dispatch ─────────────────────────────────────────────────────────

fn run<Req, Out, E>(args: Value, generate: impl FnOnce(Req) -> Result<Out, E>) -> Result<Value, ToolError>
where
    Req: DeserializeOwned,
    Out: Serialize,
    ToolError: From<E>,
{
    let request: Req = request_from_value(args)?;
    let output = generate(request)?;
    Ok(serde_json::to_value(output)?)
}

/// `{"found": true, ...fields}` or `{"found": false}`.
fn found(hint: Option<Value>) -> Value {
    match hint {
        Some(Value::Object(mut fields)) => {
            fields.insert("found".into(), Value::Bool(true));
            Value::Object(fields)
        }
        Some(other) => json!({ "found": true, "value": other }),
        None => json!({ "found": false }),
    }
}

fn fixture_count(request: &FixtureRequest, default: usize) -> usize {
    request.count.unwrap_or(default).max(1)
}

/// Run the tool `name` on `args`.
pub fn call_tool(name: &str, args: Value) -> Result<Value, ToolError> {
    match name {
        // Searches
        "linear_search" => run(args, |r: SearchRequest| linear_search(&r.array, r.target)),
        "binary_search" => run(args, |r: SearchRequest| binary_search(&r.array, r.target)),
        "interpolation_search" => {
            run(args, |r: SearchRequest| interpolation_search(&r.array, r.target))
        }

        // Sorts and heaps
        "bubble_sort" => run(args, |r: SortRequest| {
            bubble_sort(&r.array, Order::from_ascending(r.ascending))
        }),
        "quick_sort" => run(args, |r: SortRequest| {
            quick_sort(&r.array, Order::from_ascending(r.ascending))
        }),
        "merge_sort" => run(args, |r: SortRequest| {
            merge_sort(&r.array, Order::from_ascending(r.ascending))
        }),
        "heap_sort" => run(args, |r: SortRequest| {
            heap_sort(&r.array, Order::from_ascending(r.ascending))
        }),
        "radix_sort" => run(args, |r: SortRequest| {
            radix_sort(&r.array, Order::from_ascending(r.ascending))
        }),
        "build_heap" => run(args, |r: HeapRequest| {
            build_heap(&r.array, HeapKind::from_max(r.max_heap))
        }),

        // Trees and graphs
        "bst_build" => run(args, |r: BstRequest| bst_build(&r.array)),
        "tree_bfs" => run(args, |r: TreeTraversalRequest| {
            tree_bfs(&r.nodes, &r.edges, &r.start_node_id)
        }),
        "tree_dfs" => run(args, |r: TreeTraversalRequest| {
            tree_dfs(&r.nodes, &r.edges, &r.start_node_id, r.traversal_type)
        }),
        "graph_bfs" => run(args, |r: GraphTraversalRequest| {
            graph_bfs(&r.nodes, &r.edges, &r.start_node_id)
        }),
        "graph_dfs" => run(args, |r: GraphTraversalRequest| {
            graph_dfs(&r.nodes, &r.edges, &r.start_node_id)
        }),
        "prim" => run(args, |r: MstRequest| {
            prim(&r.nodes, &r.edges, r.start_node_id.as_deref())
        }),
        "kruskal" => run(args, |r: MstRequest| kruskal(&r.nodes, &r.edges)),
        "dijkstra_solve" => run(args, |r: PathRequest| {
            dijkstra_solve(&r.nodes, &r.edges, &r.start_node_id, &r.target_node_id)
        }),
        "dijkstra_next_move" => run(args, |r: PathRequest| {
            dijkstra_next_move(&r.nodes, &r.edges, &r.start_node_id, &r.target_node_id)
                .map(|next| found(next.map(|id| json!({ "nextNodeId": id }))))
        }),

        // Puzzles
        "nqueens_solve" => run(args, |r: QueensSolveRequest| nqueens_solve(r.n)),
        "nqueens_next_move" => run(args, |r: QueensHintRequest| {
            nqueens_next_move(&r.current_board)
                .map(|sq| found(sq.map(|sq| json!({ "row": sq.row, "col": sq.col }))))
        }),
        "knights_tour_solve" => run(args, |r: KnightSolveRequest| {
            knights_tour_solve(r.start_row, r.start_col)
        }),
        "knights_tour_next_move" => run(args, |r: KnightHintRequest| {
            knights_tour_next_move(&r.board, r.current_row, r.current_col)
                .map(|sq| found(sq.map(|sq| json!({ "row": sq.row, "col": sq.col }))))
        }),
        "coloring_solve" => run(args, |r: ColoringRequest| greedy_coloring(&r.graph)),
        "coloring_next_move" => run(args, |r: ColoringRequest| {
            let hint = next_best_move(&r.graph)?.map(serde_json::to_value).transpose()?;
            Ok::<_, ToolError>(found(hint))
        }),
        "coloring_conflicts" => run(args, |r: ColoringRequest| {
            Ok::<_, ToolError>(json!({ "conflicts": check_conflicts(&r.graph)? }))
        }),
        "tsp_solve" => run(args, |r: TspSolveRequest| tsp_solve(&r.cities)),
        "tsp_next_move" => run(args, |r: TspHintRequest| {
            let next = tsp_next_move(&r.cities, &r.current_path)?;
            Ok::<_, ToolError>(found(next.map(|i| json!({ "nextCityIndex": i }))))
        }),

        // Compression
        "huffman_build" => run(args, |r: HuffmanBuildRequest| huffman_build(&r.text)),
        "huffman_decode" => run(args, |r: HuffmanDecodeRequest| {
            let decoded = match r.tree_root.as_ref() {
                Some(root) => huffman_decode(&r.encoded, root)?,
                None => String::new(),
            };
            Ok::<_, ToolError>(json!({ "decoded": decoded }))
        }),
        "huffman_next_merge" => run(args, |r: MergeHintRequest| {
            let hint = next_merge(&r.frequencies)?.map(serde_json::to_value).transpose()?;
            Ok::<_, ToolError>(found(hint.map(|merge| json!({ "merge": merge }))))
        }),

        // Fixtures
        "generate_array" => run(args, |r: FixtureRequest| {
            let mut rng = fixture_rng(r.seed, stream::ARRAY);
            let len = fixture_count(&r, 10).min(MAX_ARRAY_LEN);
            Ok::<_, ToolError>(json!({ "array": random_array(&mut rng, len, 1..=99) }))
        }),
        "generate_tree" => run(args, |r: FixtureRequest| {
            let mut rng = fixture_rng(r.seed, stream::TREE);
            Ok::<_, ToolError>(random_bst_tree(&mut rng, fixture_count(&r, 7)))
        }),
        "generate_graph" => run(args, |r: FixtureRequest| {
            let mut rng = fixture_rng(r.seed, stream::GRAPH);
            Ok::<_, ToolError>(random_connected_graph(&mut rng, fixture_count(&r, 8)))
        }),
        "generate_weighted_graph" => run(args, |r: FixtureRequest| {
            let mut rng = fixture_rng(r.seed, stream::WEIGHTED_GRAPH);
            Ok::<_, ToolError>(random_weighted_graph(&mut rng, fixture_count(&r, 5)))
        }),
        "generate_coloring_graph" => run(args, |r: FixtureRequest| {
            let mut rng = fixture_rng(r.seed, stream::COLORING_GRAPH);
            Ok::<_, ToolError>(random_coloring_graph(&mut rng, fixture_count(&r, 8)))
        }),
        "generate_cities" => run(args, |r: FixtureRequest| {
            let mut rng = fixture_rng(r.seed, stream::CITIES);
            Ok::<_, ToolError>(json!({ "cities": random_cities(&mut rng, fixture_count(&r, 10)) }))
        }),

        _ => Err(ToolError::UnknownTool(name.to_string())),
    }
}

// ── Tool definitions ─────────────────────────────────────────────────

fn tool(name: &str, description: &str, properties: Value, required: &[&str]) -> Value {
    json!({
        "name": name,
        "description": description,
        "inputSchema": {
            "type": "object",
            "properties": properties,
            "required": required,
        }
    })
}

fn integer_array() -> Value {
    json!({ "type": "array", "items": { "type": "integer" } })
}

fn objects(description: &str) -> Value {
    json!({ "type": "array", "items": { "type": "object" }, "description": description })
}

fn search_props() -> Value {
    json!({ "array": integer_array(), "target": { "type": "integer" } })
}

fn sort_props() -> Value {
    json!({
        "array": integer_array(),
        "ascending": { "type": "boolean", "description": "Defaults to true" }
    })
}

fn graph_props() -> Value {
    json!({
        "nodes": objects("Nodes with string ids"),
        "edges": objects("Undirected edges {source, target}"),
        "startNodeId": { "type": "string" }
    })
}

fn weighted_props() -> Value {
    json!({
        "nodes": objects("Nodes with string ids"),
        "edges": objects("Undirected edges {source, target, weight}"),
        "startNodeId": { "type": "string" },
        "targetNodeId": { "type": "string" }
    })
}

fn tree_props() -> Value {
    json!({
        "nodes": objects("Tree nodes {id, value, x, y}"),
        "edges": objects("Parent to child edges"),
        "startNodeId": { "type": "string" },
        "traversalType": { "type": "string", "enum": ["PreOrder", "InOrder", "PostOrder"] }
    })
}

fn coloring_props() -> Value {
    json!({
        "graph": {
            "type": "object",
            "description": "{nodes: [{id, x, y, colorIndex}], edges: [{source, target}]}"
        }
    })
}

fn fixture_props() -> Value {
    json!({ "seed": { "type": "integer" }, "count": { "type": "integer" } })
}

fn cities_props() -> Value {
    json!({
        "cities": objects("Cities {id, x, y}"),
        "currentPath": integer_array()
    })
}

/// Every tool the server answers, in `tools/list` form.
pub fn tool_definitions() -> Vec<Value> {
    let sorts = [
        ("bubble_sort", "Bubble sort with early exit"),
        ("quick_sort", "Quick sort, last-element pivot"),
        ("merge_sort", "Top-down merge sort"),
        ("heap_sort", "In-place heap sort"),
        ("radix_sort", "LSD radix sort on non-negative integers"),
    ];
    let fixtures = [
        ("generate_array", "Seeded random integer array"),
        ("generate_tree", "Seeded random BST-shaped tree"),
        ("generate_graph", "Seeded random connected graph"),
        ("generate_weighted_graph", "Seeded random weighted graph"),
        ("generate_coloring_graph", "Seeded random graph for coloring"),
        ("generate_cities", "Seeded random TSP cities"),
    ];

    let mut tools = vec![
        tool("linear_search", "Linear search trace", search_props(), &["array", "target"]),
        tool("binary_search", "Binary search trace on a sorted copy", search_props(), &["array", "target"]),
        tool(
            "interpolation_search",
            "Interpolation search trace on a sorted copy",
            search_props(),
            &["array", "target"],
        ),
    ];
    tools.extend(
        sorts
            .iter()
            .map(|(name, description)| tool(name, description, sort_props(), &["array"])),
    );
    tools.extend([
        tool(
            "build_heap",
            "Bottom-up heap construction",
            json!({ "array": integer_array(), "maxHeap": { "type": "boolean" } }),
            &["array"],
        ),
        tool("bst_build", "Binary search tree insertion with layout", json!({ "array": integer_array() }), &["array"]),
        tool("tree_bfs", "Level-order tree traversal", tree_props(), &["nodes"]),
        tool("tree_dfs", "Pre-, in- or post-order tree traversal", tree_props(), &["nodes"]),
        tool("graph_bfs", "Breadth-first graph traversal", graph_props(), &["nodes"]),
        tool("graph_dfs", "Depth-first graph traversal", graph_props(), &["nodes"]),
        tool("prim", "Prim's minimum spanning tree", weighted_props(), &["nodes"]),
        tool("kruskal", "Kruskal's minimum spanning tree", weighted_props(), &["nodes"]),
        tool(
            "dijkstra_solve",
            "Dijkstra shortest path",
            weighted_props(),
            &["nodes", "startNodeId", "targetNodeId"],
        ),
        tool(
            "dijkstra_next_move",
            "Next hop on a shortest path",
            weighted_props(),
            &["nodes", "startNodeId", "targetNodeId"],
        ),
        tool("nqueens_solve", "N-Queens backtracking trace", json!({ "n": { "type": "integer" } }), &[]),
        tool(
            "nqueens_next_move",
            "Next safe queen placement",
            json!({ "currentBoard": integer_array() }),
            &["currentBoard"],
        ),
        tool(
            "knights_tour_solve",
            "Knight's Tour by Warnsdorff's rule",
            json!({ "startRow": { "type": "integer" }, "startCol": { "type": "integer" } }),
            &["startRow", "startCol"],
        ),
        tool(
            "knights_tour_next_move",
            "Warnsdorff's next knight move",
            json!({
                "board": integer_array(),
                "currentRow": { "type": "integer" },
                "currentCol": { "type": "integer" }
            }),
            &["board", "currentRow", "currentCol"],
        ),
        tool("coloring_solve", "Greedy graph coloring", coloring_props(), &["graph"]),
        tool("coloring_next_move", "DSatur coloring hint", coloring_props(), &["graph"]),
        tool("coloring_conflicts", "Adjacent nodes sharing a color", coloring_props(), &["graph"]),
        tool("tsp_solve", "Nearest-neighbor TSP tour", cities_props(), &["cities"]),
        tool("tsp_next_move", "Nearest unvisited city", cities_props(), &["cities"]),
        tool("huffman_build", "Huffman tree, codes and encoding", json!({ "text": { "type": "string" } }), &["text"]),
        tool(
            "huffman_decode",
            "Decode a bit string with a Huffman tree",
            json!({ "encoded": { "type": "string" }, "treeRoot": { "type": "object" } }),
            &["encoded", "treeRoot"],
        ),
        tool(
            "huffman_next_merge",
            "Two lowest-frequency nodes to merge next",
            json!({ "frequencies": { "type": "object" } }),
            &["frequencies"],
        ),
    ]);
    tools.extend(
        fixtures
            .iter()
            .map(|(name, description)| tool(name, description, fixture_props(), &[])),
    );
    tools.push(tool("status", "Engine status and limits", json!({}), &[]));
    tools
}

/// Tool names from [`tool_definitions`].
pub fn tool_names() -> Vec<String> {
    tool_definitions()
        .iter()
        .filter_map(|t| t["name"].as_str().map(str::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn test_found_wraps_object() {
        assert_eq!(found(Some(json!({ "row": 1 }))), json!({ "row": 1, "found": true }));
        assert_eq!(found(None), json!({ "found": false }));
    }

    #[test]
    fn test_every_listed_tool_dispatches() {
        for name in tool_names() {
            if name == "status" {
                continue;
            }
            let err = call_tool(&name, json!({})).err();
            assert!(
                !matches!(err, Some(ToolError::UnknownTool(_))),
                "{name} is listed but not dispatched"
            );
        }
    }

    #[test]
    fn test_frequencies_type() {
        let args = json!({ "frequencies": { "a": 1, "b": 2 } });
        let request: MergeHintRequest = request_from_value(args).unwrap();
        let expected: BTreeMap<String, u64> =
            [("a".to_string(), 1), ("b".to_string(), 2)].into();
        assert_eq!(request.frequencies, expected);
    }
}
