use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use stepwise_ir::validate::{validate_symbol_count, ValidationError};

/// The pair a player should merge next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeSuggestion {
    pub left_char: String,
    pub left_freq: u64,
    pub right_char: String,
    pub right_freq: u64,
}

/// Two lowest-frequency entries of a live frequency map, lower first.
/// Equal frequencies are ordered by label. `None` with fewer than two
/// entries.
pub fn next_merge(
    frequencies: &BTreeMap<String, u64>,
) -> Result<Option<MergeSuggestion>, ValidationError> {
    validate_symbol_count(frequencies.len())?;
    let mut entries: Vec<(&String, &u64)> = frequencies.iter().collect();
    // BTreeMap iteration is already label-ordered; the stable sort keeps it.
    entries.sort_by_key(|(_, freq)| **freq);
    Ok(match entries.as_slice() {
        [(left, lf), (right, rf), ..] => Some(MergeSuggestion {
            left_char: (*left).clone(),
            left_freq: **lf,
            right_char: (*right).clone(),
            right_freq: **rf,
        }),
        _ => None,
    })
}
