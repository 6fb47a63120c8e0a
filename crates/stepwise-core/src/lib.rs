//! JSON-RPC tool server over every trace generator.

pub mod limits;
pub mod mcp;
pub mod server;
pub mod tools;
