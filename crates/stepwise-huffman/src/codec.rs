use std::collections::BTreeMap;

use stepwise_ir::validate::validate_encoded;

use crate::node::HuffmanNode;
use crate::HuffmanError;

/// Code for every leaf: `0` for a left edge, `1` for a right edge.
pub fn codebook(root: &HuffmanNode) -> BTreeMap<char, String> {
    let mut codes = BTreeMap::new();
    let mut pending = vec![(root, String::new())];
    while let Some((node, code)) = pending.pop() {
        if node.is_leaf() {
            codes.insert(node.character, code);
            continue;
        }
        if let Some(right) = node.right.as_deref() {
            pending.push((right, format!("{code}1")));
        }
        if let Some(left) = node.left.as_deref() {
            pending.push((left, format!("{code}0")));
        }
    }
    codes
}

pub fn encode(text: &str, codes: &BTreeMap<char, String>) -> Result<String, HuffmanError> {
    let mut bits = String::new();
    for character in text.chars() {
        let code = codes
            .get(&character)
            .ok_or(HuffmanError::UnknownSymbol { character })?;
        bits.push_str(code);
    }
    Ok(bits)
}

/// Walk `root` bit by bit, emitting a character at each leaf.
///
/// Decoding stops at the first bit that leads nowhere (a missing child or
/// a character other than `0`/`1`); whatever was decoded before it is
/// returned. A trailing partial code is dropped.
pub fn decode(encoded: &str, root: &HuffmanNode) -> String {
    let mut decoded = String::new();
    let mut current = root;
    for bit in encoded.chars() {
        let Some(next) = current.child(bit) else {
            break;
        };
        if next.is_leaf() {
            decoded.push(next.character);
            current = root;
        } else {
            current = next;
        }
    }
    decoded
}

/// [`decode`] for untrusted input: the bit string is length-checked first.
pub fn huffman_decode(encoded: &str, root: &HuffmanNode) -> Result<String, HuffmanError> {
    validate_encoded(encoded)?;
    Ok(decode(encoded, root))
}
