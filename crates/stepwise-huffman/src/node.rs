use serde::{Deserialize, Serialize};

/// Character on internal nodes.
pub const INTERNAL: char = '*';

/// One node of a Huffman tree. Leaves carry a real character; internal
/// nodes carry [`INTERNAL`] and the sum of their children's frequencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HuffmanNode {
    pub character: char,
    pub frequency: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Box<HuffmanNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<HuffmanNode>>,
}

impl HuffmanNode {
    pub fn leaf(character: char, frequency: u64) -> Self {
        Self {
            character,
            frequency,
            left: None,
            right: None,
        }
    }

    pub fn merge(left: HuffmanNode, right: HuffmanNode) -> Self {
        Self {
            character: INTERNAL,
            frequency: left.frequency + right.frequency,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    /// An internal root over a lone leaf, so a one-symbol text still gets
    /// a one-bit code.
    pub fn wrap(only: HuffmanNode) -> Self {
        Self {
            character: INTERNAL,
            frequency: only.frequency,
            left: Some(Box::new(only)),
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn child(&self, bit: char) -> Option<&HuffmanNode> {
        match bit {
            '0' => self.left.as_deref(),
            '1' => self.right.as_deref(),
            _ => None,
        }
    }
}
