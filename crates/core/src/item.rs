//! Item names: the keys of the stock ledger.

use core::borrow::Borrow;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Name of a stocked item.
///
/// Always non-blank. Compared, hashed and ordered by its text, so a map keyed by
/// `ItemName` can be queried with a plain `&str`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    pub fn parse(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::invalid_value("item name cannot be empty"));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for ItemName {}

impl TryFrom<String> for ItemName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ItemName> for String {
    fn from(value: ItemName) -> Self {
        value.0
    }
}

impl Borrow<str> for ItemName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    #[test]
    fn parse_rejects_blank_names() {
        for blank in ["", " ", "\t\n"] {
            match ItemName::parse(blank) {
                Err(DomainError::InvalidValue(msg)) => assert!(msg.contains("empty")),
                other => panic!("expected InvalidValue for {blank:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn parse_keeps_text_verbatim() {
        let name = ItemName::parse(" apple ").unwrap();
        assert_eq!(name.as_str(), " apple ");
    }

    #[test]
    fn map_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(ItemName::parse("apple").unwrap(), 3);
        assert_eq!(map.get("apple"), Some(&3));
        assert_eq!(map.get("pear"), None);
    }

    #[test]
    fn serializes_as_plain_string() {
        let name = ItemName::parse("banana").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"banana\"");
        let back: ItemName = serde_json::from_str("\"banana\"").unwrap();
        assert_eq!(back, name);
        assert!(serde_json::from_str::<ItemName>("\"  \"").is_err());
    }

    proptest! {
        /// Property: any name with at least one non-whitespace character parses
        /// and displays unchanged.
        #[test]
        fn non_blank_names_round_trip_through_display(s in "[ a-z]{0,4}[a-z][ a-z]{0,4}") {
            let name = ItemName::parse(s.clone()).unwrap();
            prop_assert_eq!(name.to_string(), s);
        }
    }
}
