//! The demonstration routine.

use std::path::Path;

use anyhow::Context;
use thiserror::Error;

use stockbook_core::DomainError;
use stockbook_inventory::{Console, StockLedger, StoreError};

use crate::config::DemoConfig;
use crate::literal;

/// Status literal parsed and echoed at the end of the demo.
pub const STATUS_LITERAL: &str = "{'status': 'ok'}";

#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Run the demo against `ledger`.
///
/// Validation failures are printed as `Error: <message>` and the demo carries
/// on. Storage failures abort it.
pub fn run<C: Console>(ledger: &mut StockLedger<C>, config: &DemoConfig) -> anyhow::Result<()> {
    match stock_scenario(ledger, &config.data_path) {
        Ok(()) => {}
        Err(DemoError::Domain(err)) => ledger.console().line(&format!("Error: {err}")),
        Err(DemoError::Store(err)) => {
            return Err(err).with_context(|| {
                format!("stock file {} could not be used", config.data_path.display())
            });
        }
    }

    let status = literal::parse(STATUS_LITERAL).context("failed to parse status literal")?;
    ledger.console().line(&status.to_string());
    Ok(())
}

fn stock_scenario<C: Console>(ledger: &mut StockLedger<C>, path: &Path) -> Result<(), DemoError> {
    ledger.add_item("apple", 10)?;
    ledger.add_item("banana", 2)?;
    ledger.add_item("orange", 1)?;
    ledger.remove_item("apple", 3);

    ledger
        .console()
        .line(&format!("Apple stock: {}", ledger.get_qty("apple")));
    ledger
        .console()
        .line(&format!("Low items: {:?}", ledger.check_low_items_default()));

    ledger.save_data(path)?;
    ledger.load_data(path)?;
    ledger.print_data();
    Ok(())
}
