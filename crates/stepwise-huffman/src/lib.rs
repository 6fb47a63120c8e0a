//! Huffman coding: frequency counting, tree construction with a merge
//! trace, codebook derivation, encode, decode and a next-merge hint.

pub mod build;
pub mod codec;
pub mod hint;
pub mod node;

pub use build::{huffman_build, HuffmanResult, MergeStep, QueueEntry};
pub use codec::{codebook, decode, encode, huffman_decode};
pub use hint::{next_merge, MergeSuggestion};
pub use node::HuffmanNode;

use stepwise_ir::ValidationError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HuffmanError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Character {character:?} has no code in this tree")]
    UnknownSymbol { character: char },
}
