//! Activity log entries.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use stockbook_core::ItemName;

/// Timestamp layout used in rendered activity entries.
pub const ACTIVITY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One recorded stock addition.
///
/// Entries are immutable once appended to a ledger's log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub at: NaiveDateTime,
    pub item: ItemName,
    pub qty: i64,
}

impl ActivityEntry {
    pub fn added(at: NaiveDateTime, item: ItemName, qty: i64) -> Self {
        Self { at, item, qty }
    }
}

impl core::fmt::Display for ActivityEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: Added {} of {}",
            self.at.format(ACTIVITY_TIME_FORMAT),
            self.qty,
            self.item
        )
    }
}
