use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use super::column::ColumnType;

/// A single scalar handed to the host
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Integer(i32),
    Real(f64),
    DateTime(NaiveDateTime),
    Boolean(bool),
}

impl Value {
    /// The column type this value belongs in.
    pub fn column_type(&self) -> ColumnType {
        match self {
            Value::Text(_) => ColumnType::Text,
            Value::Integer(_) => ColumnType::Integer,
            Value::Real(_) => ColumnType::Real,
            Value::DateTime(_) => ColumnType::DateTime,
            Value::Boolean(_) => ColumnType::Boolean,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Real(r) => write!(f, "{r}"),
            Value::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
            Value::Boolean(b) => write!(f, "{b}"),
        }
    }
}

/// One row for the host: column ordinal to value, `None` where no value is available.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DataRow {
    values: BTreeMap<usize, Option<Value>>,
}

impl DataRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, ordinal: usize, value: Option<Value>) {
        self.values.insert(ordinal, value);
    }

    /// Value at `ordinal`; `None` if the column is unknown or has no value.
    pub fn get(&self, ordinal: usize) -> Option<&Value> {
        self.values.get(&ordinal).and_then(Option::as_ref)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<&Value>)> + '_ {
        self.values.iter().map(|(ordinal, value)| (*ordinal, value.as_ref()))
    }
}
