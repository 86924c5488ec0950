//! Value access on fetched entities
//!
//! Every entity type implements [`Record`], returning the raw value of one
//! member at a time. The [`extractor`] turns those raw values into host
//! scalars following the same rules the schema projector uses.

pub mod extractor;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::entities::ContactDetail;
use crate::schema::EntityDescriptor;

pub use extractor::{extract, to_data_row};

/// Raw value of a single member, before coercion
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    /// The member exists but carries no value.
    Null,
    Text(&'a str),
    Int32(i32),
    Int64(i64),
    Decimal(Decimal),
    Double(f64),
    DateTime(NaiveDateTime),
    Bool(bool),
    Record(&'a dyn Record),
    Contacts(&'a [ContactDetail]),
}

impl<'a> From<&'a Option<String>> for FieldValue<'a> {
    fn from(value: &'a Option<String>) -> Self {
        value.as_deref().map_or(FieldValue::Null, FieldValue::Text)
    }
}

impl From<Option<i32>> for FieldValue<'_> {
    fn from(value: Option<i32>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::Int32)
    }
}

impl From<Option<i64>> for FieldValue<'_> {
    fn from(value: Option<i64>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::Int64)
    }
}

impl From<Option<Decimal>> for FieldValue<'_> {
    fn from(value: Option<Decimal>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::Decimal)
    }
}

impl From<Option<f64>> for FieldValue<'_> {
    fn from(value: Option<f64>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::Double)
    }
}

impl From<Option<NaiveDateTime>> for FieldValue<'_> {
    fn from(value: Option<NaiveDateTime>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::DateTime)
    }
}

impl From<Option<bool>> for FieldValue<'_> {
    fn from(value: Option<bool>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::Bool)
    }
}

impl<'a> From<&'a [ContactDetail]> for FieldValue<'a> {
    fn from(value: &'a [ContactDetail]) -> Self {
        FieldValue::Contacts(value)
    }
}

/// Reasons a single member could not be read
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    #[error("member '{0}' cannot be read")]
    Unreadable(String),

    #[error("member '{member}' holds a value that does not match its declared {expected} type")]
    TypeMismatch {
        member: String,
        expected: &'static str,
    },

    #[error("member '{0}' holds a value the host cannot represent")]
    Unrepresentable(String),
}

/// An entity instance whose members can be read by name
pub trait Record: std::fmt::Debug {
    /// The static member table of this record's type.
    fn descriptor(&self) -> &'static EntityDescriptor;

    /// Reads the raw value of the member called `member`.
    fn read(&self, member: &str) -> Result<FieldValue<'_>, ReadError>;
}

/// Wraps an optional nested record as a field value.
pub fn nested<R: Record>(value: &Option<R>) -> FieldValue<'_> {
    match value {
        Some(record) => FieldValue::Record(record),
        None => FieldValue::Null,
    }
}
