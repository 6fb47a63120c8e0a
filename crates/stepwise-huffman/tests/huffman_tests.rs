use std::collections::BTreeMap;

use stepwise_huffman::{
    codebook, decode, encode, huffman_build, huffman_decode, next_merge, HuffmanError, HuffmanNode,
    MergeSuggestion,
};
use stepwise_ir::ValidationError;

#[test]
fn test_aaab_round_trip() {
    let result = huffman_build("aaab").unwrap();
    assert!(result.codes[&'a'].len() <= result.codes[&'b'].len());
    assert_eq!(decode(&result.encoded_text, &result.tree_root), "aaab");
    assert_eq!(result.original_size, 32);
    assert_eq!(result.compressed_size, 4);
}

#[test]
fn test_frequent_symbol_gets_shorter_code() {
    let result = huffman_build("aaaaaaabbbcd").unwrap();
    assert!(result.codes[&'a'].len() < result.codes[&'c'].len());
    assert!(result.codes[&'a'].len() < result.codes[&'d'].len());
}

#[test]
fn test_one_merge_per_symbol_but_one() {
    let result = huffman_build("abracadabra").unwrap();
    assert_eq!(result.frequencies.len(), 5);
    assert_eq!(result.steps.len(), 4);
    assert_eq!(result.tree_root.frequency, 11);
    let last = result.steps.last().unwrap();
    assert_eq!(last.queue.len(), 1);
    assert_eq!(last.merged.frequency, 11);
}

#[test]
fn test_first_merge_takes_lowest_oldest_pair() {
    // c and d both occur once; c appears first.
    let result = huffman_build("aabcd").unwrap();
    let first = &result.steps[0];
    assert_eq!(first.left.label, "b");
    assert_eq!(first.right.label, "c");
    assert_eq!(first.merged.label, "bc");
    assert_eq!(first.merged.frequency, 2);
}

#[test]
fn test_queue_snapshot_is_priority_ordered() {
    let result = huffman_build("the quick brown fox").unwrap();
    for step in &result.steps {
        let freqs: Vec<u64> = step.queue.iter().map(|e| e.frequency).collect();
        let mut sorted = freqs.clone();
        sorted.sort_unstable();
        assert_eq!(freqs, sorted);
    }
}

#[test]
fn test_single_symbol_gets_one_bit() {
    let result = huffman_build("zzzz").unwrap();
    assert_eq!(result.codes[&'z'], "0");
    assert_eq!(result.encoded_text, "0000");
    assert!(result.steps.is_empty());
    assert_eq!(decode(&result.encoded_text, &result.tree_root), "zzzz");
}

#[test]
fn test_codes_are_prefix_free() {
    let result = huffman_build("mississippi river").unwrap();
    let codes: Vec<&String> = result.codes.values().collect();
    for (i, a) in codes.iter().enumerate() {
        for (j, b) in codes.iter().enumerate() {
            if i != j {
                assert!(!b.starts_with(a.as_str()), "{a} prefixes {b}");
            }
        }
    }
}

#[test]
fn test_text_validation() {
    assert_eq!(
        huffman_build("").unwrap_err(),
        HuffmanError::Validation(ValidationError::EmptyText)
    );
    let long = "x".repeat(501);
    assert!(matches!(
        huffman_build(&long).unwrap_err(),
        HuffmanError::Validation(ValidationError::TextTooLong { len: 501, max: 500 })
    ));
}

#[test]
fn test_encode_unknown_symbol() {
    let root = HuffmanNode::merge(HuffmanNode::leaf('a', 1), HuffmanNode::leaf('b', 1));
    let codes = codebook(&root);
    assert_eq!(
        encode("abc", &codes).unwrap_err(),
        HuffmanError::UnknownSymbol { character: 'c' }
    );
}

#[test]
fn test_decode_runs_off_tree() {
    let root = HuffmanNode::wrap(HuffmanNode::leaf('a', 2));
    assert_eq!(decode("001", &root), "aa");
}

#[test]
fn test_decode_drops_partial_code() {
    let result = huffman_build("abcabcabd").unwrap();
    let mut bits = result.encoded_text.clone();
    bits.pop();
    let decoded = decode(&bits, &result.tree_root);
    assert_eq!(decoded, "abcabcab");
}

#[test]
fn test_tree_round_trips_through_json() {
    let result = huffman_build("hello").unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert!(json["encodedText"].is_string());
    assert_eq!(json["treeRoot"]["character"], "*");
    let root: HuffmanNode = serde_json::from_value(json["treeRoot"].clone()).unwrap();
    assert_eq!(decode(&result.encoded_text, &root), "hello");
}

#[test]
fn test_next_merge_lowest_pair() {
    let frequencies: BTreeMap<String, u64> =
        [("a", 5), ("b", 2), ("c", 1), ("d", 2)].map(|(k, v)| (k.to_string(), v)).into();
    assert_eq!(
        next_merge(&frequencies).unwrap(),
        Some(MergeSuggestion {
            left_char: "c".into(),
            left_freq: 1,
            right_char: "b".into(),
            right_freq: 2,
        })
    );
}

#[test]
fn test_next_merge_needs_two_entries() {
    let mut frequencies = BTreeMap::new();
    assert_eq!(next_merge(&frequencies).unwrap(), None);
    frequencies.insert("ab".to_string(), 3);
    assert_eq!(next_merge(&frequencies).unwrap(), None);
}

#[test]
fn test_next_merge_rejects_oversized_maps() {
    let frequencies: BTreeMap<String, u64> = (0..501).map(|i| (format!("s{i}"), 1)).collect();
    assert_eq!(
        next_merge(&frequencies).unwrap_err(),
        ValidationError::TooManySymbols { count: 501, max: 500 }
    );
}

#[test]
fn test_checked_decode_rejects_long_input() {
    let result = huffman_build("abc").unwrap();
    assert_eq!(
        huffman_decode(&result.encoded_text, &result.tree_root).unwrap(),
        "abc"
    );
    let err = huffman_decode(&"1".repeat(16_001), &result.tree_root).unwrap_err();
    assert_eq!(
        err,
        HuffmanError::Validation(ValidationError::EncodedTooLong { len: 16_001, max: 16_000 })
    );
}
