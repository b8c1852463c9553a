//! The document tree value model.
//!
//! A deserialized TOML document becomes a tree of [`Value`] nodes. The set of
//! variants is closed, so every navigation branch is an exhaustive match.

use indexmap::IndexMap;
use std::fmt;

/// A node in a TOML document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A table. Entry order is preserved so a mutated document serializes
    /// with its keys where the deserializer found them.
    Table(IndexMap<String, Value>),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    /// An explicit hole, distinct from every scalar zero. Fills slots created
    /// by array growth and stands for "nothing lives here".
    Absent,
}

impl Value {
    /// An empty table.
    pub fn table() -> Self {
        Value::Table(IndexMap::new())
    }

    /// An empty array.
    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    pub fn as_table(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_table_mut(&mut self) -> Option<&mut IndexMap<String, Value>> {
        match self {
            Value::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }
}

/// Human-oriented rendering for CLI output: scalars bare, containers in a
/// compact single-line form. An [`Value::Absent`] node renders as nothing.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Table(table) => {
                f.write_str("{")?;
                for (i, (key, value)) in table.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key} = {value}")?;
                }
                f.write_str("}")
            }
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::String(s) => f.write_str(s),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Absent => Ok(()),
        }
    }
}
