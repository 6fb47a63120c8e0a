//! Step-trace generators over integer arrays: searches, sorts and
//! standalone heap construction.
//!
//! Every generator validates its input first, works on a private copy
//! of the caller's array and snapshots the whole array into each step.

pub mod heap;
pub mod order;
pub mod search;
pub mod sort;

pub use order::Order;
