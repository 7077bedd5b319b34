use std::path::Path;

use chrono::{Local, NaiveDateTime};
use serde_json::Value;

use stockbook_core::{ArgKind, DomainError, DomainResult, ItemName};

use crate::activity::ActivityEntry;
use crate::console::{Console, StdoutConsole};
use crate::store::{JsonFileStore, StockMap, StockStore, StoreError};

/// Threshold used by [`StockLedger::check_low_items_default`].
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Header line printed before the per-item report.
pub const REPORT_HEADER: &str = "Items Report";

/// What a removal did to the ledger.
///
/// Removals never fail: problems are reported on the console and surface here
/// as a no-op outcome.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Quantity was reduced and the item is still stocked.
    Decremented { remaining: i64 },
    /// Quantity reached zero or below; the item was dropped from the ledger.
    Depleted,
    /// The item was not stocked. Nothing changed.
    NotFound,
    /// The quantity could not be subtracted. Nothing changed.
    InvalidQuantity,
}

impl RemoveOutcome {
    /// True if the ledger was modified.
    pub fn applied(self) -> bool {
        matches!(
            self,
            RemoveOutcome::Decremented { .. } | RemoveOutcome::Depleted
        )
    }
}

/// In-memory stock ledger: item name → strictly positive quantity.
///
/// Items iterate in the order they were first stocked (or the order they
/// appear in a loaded file). Every successful addition is recorded in an
/// activity log, which exists only once `add_item` has been called at least
/// once and is never persisted.
#[derive(Debug)]
pub struct StockLedger<C = StdoutConsole> {
    quantities: StockMap,
    activity_log: Option<Vec<ActivityEntry>>,
    console: C,
}

impl StockLedger<StdoutConsole> {
    /// Empty ledger reporting to standard output.
    pub fn new() -> Self {
        Self::with_console(StdoutConsole)
    }
}

impl Default for StockLedger<StdoutConsole> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Console> StockLedger<C> {
    pub fn with_console(console: C) -> Self {
        Self {
            quantities: StockMap::new(),
            activity_log: None,
            console,
        }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Add `qty` units of `item`, stamped with the current local time.
    pub fn add_item(&mut self, item: &str, qty: i64) -> DomainResult<bool> {
        self.add_item_at(item, qty, Local::now().naive_local())
    }

    /// Add `qty` units of `item`, stamped with `at`.
    ///
    /// Creates the item if absent, otherwise increases its quantity. The log is
    /// initialized before validation, so even a rejected first call leaves an
    /// (empty) log behind.
    pub fn add_item_at(&mut self, item: &str, qty: i64, at: NaiveDateTime) -> DomainResult<bool> {
        self.activity_log.get_or_insert_with(Vec::new);

        let name = ItemName::parse(item)?;
        if qty <= 0 {
            return Err(DomainError::invalid_value(
                "quantity must be greater than zero",
            ));
        }

        let total = self.get_qty(item).checked_add(qty).ok_or_else(|| {
            DomainError::invalid_value(format!("quantity for '{name}' would overflow"))
        })?;
        self.quantities.insert(name.clone(), total);

        let entry = ActivityEntry::added(at, name, qty);
        tracing::info!(item = %entry.item, qty, total, "stock added");
        self.console.line(&entry.to_string());
        self.activity_log.get_or_insert_with(Vec::new).push(entry);

        Ok(true)
    }

    /// Dynamically-typed variant of [`add_item`](Self::add_item).
    ///
    /// `item` must be a JSON string and `qty` a JSON integer; anything else is
    /// rejected with [`DomainError::InvalidType`] naming what was received.
    pub fn add_item_value(&mut self, item: &Value, qty: &Value) -> DomainResult<bool> {
        self.activity_log.get_or_insert_with(Vec::new);

        let Value::String(name) = item else {
            return Err(DomainError::invalid_type(
                "item name",
                "a string",
                ArgKind::of(item),
            ));
        };
        let kind = ArgKind::of(qty);
        if kind != ArgKind::Integer {
            return Err(DomainError::invalid_type("quantity", "an integer", kind));
        }
        let qty = qty
            .as_i64()
            .ok_or_else(|| DomainError::invalid_value("quantity is out of range"))?;

        self.add_item(name, qty)
    }

    /// Remove `qty` units of `item`.
    ///
    /// A missing item or an unrepresentable result is reported on the console
    /// and leaves the ledger untouched. An item whose quantity drops to zero or
    /// below is removed outright. Negative quantities are not rejected and
    /// increase stock.
    pub fn remove_item(&mut self, item: &str, qty: i64) -> RemoveOutcome {
        let Some(current) = self.quantities.get_mut(item) else {
            self.console.line(&format!("Item '{item}' not found in stock."));
            return RemoveOutcome::NotFound;
        };

        if qty < 0 {
            tracing::warn!(item, qty, "negative removal quantity increases stock");
        }

        let Some(remaining) = current.checked_sub(qty) else {
            self.console.line("Invalid quantity type.");
            return RemoveOutcome::InvalidQuantity;
        };

        if remaining <= 0 {
            self.quantities.shift_remove(item);
            tracing::debug!(item, qty, "stock depleted");
            RemoveOutcome::Depleted
        } else {
            *current = remaining;
            tracing::debug!(item, qty, remaining, "stock removed");
            RemoveOutcome::Decremented { remaining }
        }
    }

    /// Dynamically-typed variant of [`remove_item`](Self::remove_item).
    ///
    /// The item is looked up first: a non-string item can never be stocked and
    /// is reported as missing. A non-integer quantity is then reported as an
    /// invalid quantity.
    pub fn remove_item_value(&mut self, item: &Value, qty: &Value) -> RemoveOutcome {
        let name = match item {
            Value::String(name) if self.quantities.contains_key(name.as_str()) => name,
            Value::String(name) => return self.report_missing(name),
            other => return self.report_missing(other),
        };

        match qty.as_i64() {
            Some(qty) => self.remove_item(name, qty),
            None => {
                self.console.line("Invalid quantity type.");
                RemoveOutcome::InvalidQuantity
            }
        }
    }

    fn report_missing(&self, item: &dyn core::fmt::Display) -> RemoveOutcome {
        self.console.line(&format!("Item '{item}' not found in stock."));
        RemoveOutcome::NotFound
    }

    /// Stored quantity of `item`, or 0 if it is not stocked.
    pub fn get_qty(&self, item: &str) -> i64 {
        self.quantities.get(item).copied().unwrap_or(0)
    }

    /// Items whose quantity is strictly below `threshold`, in ledger order.
    pub fn check_low_items(&self, threshold: i64) -> Vec<&str> {
        self.quantities
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(item, _)| item.as_str())
            .collect()
    }

    pub fn check_low_items_default(&self) -> Vec<&str> {
        self.check_low_items(DEFAULT_LOW_STOCK_THRESHOLD)
    }

    /// Report header followed by one `item -> qty` line per item.
    pub fn report_lines(&self) -> Vec<String> {
        std::iter::once(REPORT_HEADER.to_string())
            .chain(
                self.quantities
                    .iter()
                    .map(|(item, qty)| format!("{item} -> {qty}")),
            )
            .collect()
    }

    /// Write [`report_lines`](Self::report_lines) to the console.
    pub fn print_data(&self) {
        for line in self.report_lines() {
            self.console.line(&line);
        }
    }

    /// Replace all quantities with the contents of the JSON file at `path`.
    pub fn load_data(&mut self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        self.load_from(&JsonFileStore::new(path.as_ref()))
    }

    /// Write all quantities to the JSON file at `path`.
    pub fn save_data(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        self.save_to(&JsonFileStore::new(path.as_ref()))
    }

    /// Replace all quantities with the store's snapshot.
    ///
    /// On error the ledger keeps its current quantities. The activity log is
    /// never touched.
    pub fn load_from<S: StockStore>(&mut self, store: &S) -> Result<(), StoreError> {
        let stock = store
            .load()
            .inspect_err(|err| tracing::warn!(error = %err, "stock load rejected"))?;
        self.quantities = stock;
        tracing::info!(items = self.quantities.len(), "stock loaded");
        Ok(())
    }

    pub fn save_to<S: StockStore>(&self, store: &S) -> Result<(), StoreError> {
        store.save(&self.quantities)?;
        tracing::info!(items = self.quantities.len(), "stock saved");
        Ok(())
    }

    pub fn quantities(&self) -> &StockMap {
        &self.quantities
    }

    /// Additions recorded so far, or `None` if nothing was ever added.
    pub fn activity_log(&self) -> Option<&[ActivityEntry]> {
        self.activity_log.as_deref()
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }
}
