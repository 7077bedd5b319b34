//! Persistence of the ledger's quantities.
//!
//! The on-disk format is a single JSON object mapping item names to integer
//! quantities, pretty-printed with four-space indentation:
//!
//! ```json
//! {
//!     "apple": 7,
//!     "banana": 2
//! }
//! ```
//!
//! Only quantities are persisted. The activity log lives and dies with the
//! in-memory ledger.

use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

use stockbook_core::ItemName;

/// Default location of the stock file.
pub const DEFAULT_DATA_FILE: &str = "inventory.json";

/// Insertion-ordered item → quantity mapping.
pub type StockMap = IndexMap<ItemName, i64>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("stock file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed stock data: {0}")]
    Deserialize(#[source] serde_json::Error),

    #[error("failed to encode stock data: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("invalid stock entry: {0}")]
    InvalidEntry(String),

    #[error("no stock snapshot has been saved")]
    Empty,
}

impl StoreError {
    fn io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            StoreError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            StoreError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Durable storage for a full snapshot of ledger quantities.
///
/// `load` returns the whole mapping; `save` replaces whatever was stored.
pub trait StockStore {
    fn load(&self) -> Result<StockMap, StoreError>;
    fn save(&self, stock: &StockMap) -> Result<(), StoreError>;
}

/// Encode quantities as four-space pretty JSON, keys in iteration order.
pub fn encode(stock: &StockMap) -> Result<Vec<u8>, StoreError> {
    let mut out = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    stock.serialize(&mut ser).map_err(StoreError::Serialize)?;
    Ok(out)
}

/// Decode and validate a stock document.
///
/// Rejects anything that is not an object of integers, blank names, and
/// non-positive quantities.
pub fn decode(bytes: &[u8]) -> Result<StockMap, StoreError> {
    let raw: IndexMap<String, i64> =
        serde_json::from_slice(bytes).map_err(StoreError::Deserialize)?;

    let mut stock = StockMap::with_capacity(raw.len());
    for (name, qty) in raw {
        let item = ItemName::parse(name.as_str())
            .map_err(|_| StoreError::InvalidEntry(format!("item name {name:?} is blank")))?;
        if qty <= 0 {
            return Err(StoreError::InvalidEntry(format!(
                "quantity for '{item}' must be positive, got {qty}"
            )));
        }
        stock.insert(item, qty);
    }
    Ok(stock)
}

/// JSON file on the local filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl StockStore for JsonFileStore {
    fn load(&self) -> Result<StockMap, StoreError> {
        let bytes = std::fs::read(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        let stock = decode(&bytes)?;
        tracing::debug!(path = %self.path.display(), items = stock.len(), "loaded stock file");
        Ok(stock)
    }

    fn save(&self, stock: &StockMap) -> Result<(), StoreError> {
        let bytes = encode(stock)?;
        std::fs::write(&self.path, bytes).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), items = stock.len(), "saved stock file");
        Ok(())
    }
}

/// Keeps the last saved document in memory, encoded exactly as a file would be.
#[derive(Debug, Default)]
pub struct InMemoryStockStore {
    document: RefCell<Option<Vec<u8>>>,
}

impl InMemoryStockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a raw document (useful for exercising decode errors).
    pub fn with_document(document: impl Into<Vec<u8>>) -> Self {
        Self {
            document: RefCell::new(Some(document.into())),
        }
    }

    /// The stored document as text, if any.
    pub fn document(&self) -> Option<String> {
        self.document
            .borrow()
            .as_ref()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

impl StockStore for InMemoryStockStore {
    fn load(&self) -> Result<StockMap, StoreError> {
        match self.document.borrow().as_deref() {
            Some(bytes) => decode(bytes),
            None => Err(StoreError::Empty),
        }
    }

    fn save(&self, stock: &StockMap) -> Result<(), StoreError> {
        let bytes = encode(stock)?;
        *self.document.borrow_mut() = Some(bytes);
        Ok(())
    }
}
