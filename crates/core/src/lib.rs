//! `stockbook-core` — domain building blocks for the stock ledger.
//!
//! This crate contains **pure domain** primitives (no IO, no console, no clock).

pub mod arg;
pub mod error;
pub mod item;
pub mod value_object;

pub use arg::ArgKind;
pub use error::{DomainError, DomainResult};
pub use item::ItemName;
pub use value_object::ValueObject;
