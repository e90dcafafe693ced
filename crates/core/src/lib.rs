//! `stockroom-core` — domain building blocks shared by the stockroom crates.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod error;
pub mod input;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use input::{item_from_value, quantity_from_str, quantity_from_value};
pub use value_object::{ItemName, ValueObject};
