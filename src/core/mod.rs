//! Crate-wide error type.

pub mod error;

pub use error::{TenpaiError, TenpaiResult};
