//! Stock ledger (in-memory, file-persisted).
//!
//! The ledger itself is deterministic domain logic. Console output, the clock
//! and durable storage sit behind small seams (`Console`, `add_item_at`,
//! `StockStore`) so callers and tests can substitute them.

pub mod activity;
pub mod console;
pub mod ledger;
pub mod store;

pub use activity::ActivityEntry;
pub use console::{BufferConsole, Console, StdoutConsole};
pub use ledger::{DEFAULT_LOW_STOCK_THRESHOLD, REPORT_HEADER, RemoveOutcome, StockLedger};
pub use store::{
    DEFAULT_DATA_FILE, InMemoryStockStore, JsonFileStore, StockMap, StockStore, StoreError,
};
