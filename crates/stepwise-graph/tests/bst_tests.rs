use stepwise_graph::bst::{bst_build, BstStepKind};
use stepwise_ir::validate::ValidationError;

#[test]
fn test_bst_step_sequence() {
    let result = bst_build(&[50, 30, 70]).unwrap();
    let kinds: Vec<BstStepKind> = result.steps.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            BstStepKind::InsertRoot,
            BstStepKind::Compare,
            BstStepKind::InsertLeft,
            BstStepKind::Compare,
            BstStepKind::InsertRight,
            BstStepKind::Complete,
        ]
    );
    assert_eq!(result.steps[0].nodes.len(), 1);
    assert_eq!(result.steps[1].compare_value, Some(50));
    assert_eq!(result.steps[1].highlight_value, Some(30));
}

#[test]
fn test_bst_compare_step_per_descent_level() {
    let result = bst_build(&[50, 30, 40]).unwrap();
    let compares = result
        .steps
        .iter()
        .filter(|s| s.kind == BstStepKind::Compare && s.highlight_value == Some(40))
        .count();
    assert_eq!(compares, 2);
}

#[test]
fn test_bst_layout_is_deterministic_preorder() {
    let result = bst_build(&[50, 30, 70, 20]).unwrap();
    let last = result.steps.last().unwrap();
    let ids: Vec<&str> = last.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["n0", "n1", "n3", "n2"]);
    let xs: Vec<f64> = last.nodes.iter().map(|n| n.x).collect();
    assert_eq!(xs, vec![400.0, 200.0, 100.0, 600.0]);
    let ys: Vec<f64> = last.nodes.iter().map(|n| n.y).collect();
    assert_eq!(ys, vec![50.0, 130.0, 210.0, 130.0]);
    assert_eq!(last.edges.len(), 3);
    assert_eq!(last.edges[0].source, "n0");
    assert_eq!(last.edges[0].target, "n1");

    let again = bst_build(&[50, 30, 70, 20]).unwrap();
    assert_eq!(result, again);
}

#[test]
fn test_bst_duplicate_is_skipped() {
    let result = bst_build(&[5, 5]).unwrap();
    let kinds: Vec<BstStepKind> = result.steps.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            BstStepKind::InsertRoot,
            BstStepKind::Compare,
            BstStepKind::Skip,
            BstStepKind::Complete
        ]
    );
    assert_eq!(result.steps.last().unwrap().nodes.len(), 1);
}

#[test]
fn test_bst_validation() {
    assert_eq!(bst_build(&[]).unwrap_err(), ValidationError::EmptyArray);
    let long: Vec<i64> = (0..21).collect();
    assert!(bst_build(&long).is_err());
}

#[test]
fn test_bst_step_serializes_camel_case() {
    let result = bst_build(&[1]).unwrap();
    let json = serde_json::to_value(&result.steps[0]).unwrap();
    assert_eq!(json["kind"], "InsertRoot");
    assert_eq!(json["highlightValue"], 1);
    assert!(json["compareValue"].is_null());
}
