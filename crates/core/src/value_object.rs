//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. An
/// [`ItemName`](crate::ItemName) is one: two names with the same text are the
/// same ledger key.
///
/// The trait requires:
/// - **Clone**: values are copied freely (map keys, log entries)
/// - **PartialEq**: compared by value
/// - **Debug**: shows up in test failures and tracing fields
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
