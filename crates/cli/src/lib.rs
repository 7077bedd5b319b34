//! `stockbook` command-line demonstration.
//!
//! Drives a [`StockLedger`](stockbook_inventory::StockLedger) through a fixed
//! add / remove / report / save / load sequence and prints the results.

pub mod config;
pub mod demo;
pub mod literal;

pub use config::DemoConfig;
pub use demo::{DemoError, run};
pub use literal::LiteralError;
