use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar types the host can store in a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    Text,
    Integer,
    Real,
    DateTime,
    Boolean,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Text => "Text",
            ColumnType::Integer => "Integer",
            ColumnType::Real => "Real",
            ColumnType::DateTime => "DateTime",
            ColumnType::Boolean => "Boolean",
        };
        f.write_str(name)
    }
}

/// A named, ordinal-positioned, typed slot in a row schema.
///
/// Nested members use dotted names, e.g. `Addresses.Post.Street`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub ordinal: usize,
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

impl ColumnDefinition {
    pub fn new(ordinal: usize, name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            ordinal,
            name: name.into(),
            column_type,
        }
    }
}
