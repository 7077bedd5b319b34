//! Kinds of dynamically-typed arguments.
//!
//! Ledger operations can be driven from untyped input (JSON documents, parsed
//! literals). `ArgKind` names what was actually received so type errors can
//! cite it.

use serde_json::Value;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ArgKind {
    Null,
    Boolean,
    Integer,
    Float,
    String,
    Array,
    Object,
}

impl ArgKind {
    /// Classify a JSON value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ArgKind::Null,
            Value::Bool(_) => ArgKind::Boolean,
            Value::Number(n) if n.is_i64() || n.is_u64() => ArgKind::Integer,
            Value::Number(_) => ArgKind::Float,
            Value::String(_) => ArgKind::String,
            Value::Array(_) => ArgKind::Array,
            Value::Object(_) => ArgKind::Object,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ArgKind::Null => "null",
            ArgKind::Boolean => "boolean",
            ArgKind::Integer => "integer",
            ArgKind::Float => "float",
            ArgKind::String => "string",
            ArgKind::Array => "array",
            ArgKind::Object => "object",
        }
    }
}

impl core::fmt::Display for ArgKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
