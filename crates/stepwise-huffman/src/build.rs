//! Tree construction over a stable min-priority queue.
//!
//! Queue entries are ordered by frequency, then by the order they entered
//! the queue: leaves in first-appearance order, merged nodes after every
//! earlier entry. Equal frequencies therefore pop oldest first.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};

use serde::{Deserialize, Serialize};
use stepwise_ir::validate::validate_text;
use stepwise_ir::Trace;
use tracing::debug;

use crate::codec::{codebook, encode};
use crate::node::HuffmanNode;
use crate::HuffmanError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueEntry {
    /// Characters under the node, left to right.
    pub label: String,
    pub frequency: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeStep {
    pub left: QueueEntry,
    pub right: QueueEntry,
    pub merged: QueueEntry,
    pub description: String,
    /// Queue after the merged node was pushed, lowest priority first.
    pub queue: Vec<QueueEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HuffmanResult {
    pub codes: BTreeMap<char, String>,
    pub encoded_text: String,
    pub tree_root: HuffmanNode,
    /// Eight bits per input character.
    pub original_size: usize,
    pub compressed_size: usize,
    /// Character counts in first-appearance order.
    pub frequencies: Vec<QueueEntry>,
    pub steps: Vec<MergeStep>,
}

struct Queued {
    node: HuffmanNode,
    label: String,
    seq: usize,
}

impl Queued {
    fn entry(&self) -> QueueEntry {
        QueueEntry {
            label: self.label.clone(),
            frequency: self.node.frequency,
        }
    }

    fn key(&self) -> (u64, usize) {
        (self.node.frequency, self.seq)
    }
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Queued {}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Queued {
    // Reversed: BinaryHeap is a max-heap.
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

/// Character counts in the order each character first appears.
pub fn count_frequencies(text: &str) -> Vec<(char, u64)> {
    let mut counts: Vec<(char, u64)> = Vec::new();
    for c in text.chars() {
        match counts.iter_mut().find(|(seen, _)| *seen == c) {
            Some((_, n)) => *n += 1,
            None => counts.push((c, 1)),
        }
    }
    counts
}

fn snapshot(queue: &BinaryHeap<Queued>) -> Vec<QueueEntry> {
    let mut pending: Vec<&Queued> = queue.iter().collect();
    pending.sort_by_key(|q| q.key());
    pending.into_iter().map(Queued::entry).collect()
}

/// Build the tree for `text` and everything derived from it.
pub fn huffman_build(text: &str) -> Result<HuffmanResult, HuffmanError> {
    validate_text(text)?;

    let counts = count_frequencies(text);
    let frequencies: Vec<QueueEntry> = counts
        .iter()
        .map(|&(c, frequency)| QueueEntry {
            label: c.to_string(),
            frequency,
        })
        .collect();

    let mut queue: BinaryHeap<Queued> = counts
        .iter()
        .enumerate()
        .map(|(seq, &(c, frequency))| Queued {
            node: HuffmanNode::leaf(c, frequency),
            label: c.to_string(),
            seq,
        })
        .collect();
    let mut seq = queue.len();
    let mut trace = Trace::new();

    while queue.len() > 1 {
        let (Some(left), Some(right)) = (queue.pop(), queue.pop()) else {
            break;
        };
        let (left_entry, right_entry) = (left.entry(), right.entry());
        let merged = Queued {
            label: format!("{}{}", left.label, right.label),
            node: HuffmanNode::merge(left.node, right.node),
            seq,
        };
        seq += 1;
        let merged_entry = merged.entry();
        queue.push(merged);

        trace.record(MergeStep {
            description: format!(
                "Merge '{}' ({}) and '{}' ({}) into a node of frequency {}.",
                left_entry.label,
                left_entry.frequency,
                right_entry.label,
                right_entry.frequency,
                merged_entry.frequency
            ),
            left: left_entry,
            right: right_entry,
            merged: merged_entry,
            queue: snapshot(&queue),
        });
    }

    let tree_root = match queue.pop() {
        Some(root) if root.node.is_leaf() => HuffmanNode::wrap(root.node),
        Some(root) => root.node,
        None => return Err(stepwise_ir::ValidationError::EmptyText.into()),
    };

    let codes = codebook(&tree_root);
    let encoded_text = encode(text, &codes)?;
    let compressed_size = encoded_text.len();
    let original_size = text.chars().count() * 8;

    debug!(
        symbols = codes.len(),
        merges = trace.len(),
        original_size,
        compressed_size,
        "huffman tree built"
    );
    Ok(HuffmanResult {
        codes,
        encoded_text,
        tree_root,
        original_size,
        compressed_size,
        frequencies,
        steps: trace.into_steps(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_keep_first_appearance_order() {
        assert_eq!(
            count_frequencies("banana"),
            vec![('b', 1), ('a', 3), ('n', 2)]
        );
    }

    #[test]
    fn test_queue_pops_lowest_then_oldest() {
        let mut queue = BinaryHeap::new();
        for (seq, (c, f)) in [('x', 2), ('y', 1), ('z', 1)].into_iter().enumerate() {
            queue.push(Queued {
                node: HuffmanNode::leaf(c, f),
                label: c.to_string(),
                seq,
            });
        }
        let order: Vec<String> = std::iter::from_fn(|| queue.pop().map(|q| q.label)).collect();
        assert_eq!(order, vec!["y", "z", "x"]);
    }
}
