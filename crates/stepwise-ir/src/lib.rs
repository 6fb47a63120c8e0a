pub mod limits;
pub mod parse;
pub mod request;
pub mod sentinel;
pub mod trace;
pub mod types;
pub mod validate;

pub use trace::Trace;
pub use validate::ValidationError;
