use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

use super::{FieldValue, ReadError, Record};
use crate::error::{Error, Result};
use crate::schema::{EntityDescriptor, FieldDescriptor, FieldKind, PATH_SEPARATOR, ScalarKind};
use crate::types::{ColumnDefinition, DataRow, Value};

/// Extracts the host value of `column` from `record`.
///
/// `column` is a member name or a dotted path through composite members
/// (`Addresses.Post.City`). Values are coerced exactly as
/// [`project`](crate::schema::project) types their columns.
///
/// Returns `Ok(None)` when the member has no value, including when reading it
/// failed; a single unreadable member never fails the row. Fails with
/// [`Error::ColumnNotFound`] only when no member matches the name, and with
/// [`Error::InvalidColumnName`] for a blank name.
pub fn extract(record: &dyn Record, column: &str) -> Result<Option<Value>> {
    if column.trim().is_empty() {
        return Err(Error::InvalidColumnName);
    }
    extract_path(record, column, column)
}

/// Builds the host row for `record` from a projected schema.
pub fn to_data_row(record: &dyn Record, columns: &[ColumnDefinition]) -> Result<DataRow> {
    let mut row = DataRow::new();
    for column in columns {
        row.insert(column.ordinal, extract(record, &column.name)?);
    }
    Ok(row)
}

fn extract_path(record: &dyn Record, path: &str, column: &str) -> Result<Option<Value>> {
    let descriptor = record.descriptor();

    if let Some((head, rest)) = path.split_once(PATH_SEPARATOR) {
        let field = descriptor
            .field(head)
            .ok_or_else(|| Error::ColumnNotFound(column.to_string()))?;
        let FieldKind::Composite(nested) = field.kind else {
            return Err(Error::ColumnNotFound(column.to_string()));
        };

        return match read_member(record, field) {
            Ok(FieldValue::Record(inner)) => extract_path(inner, rest, column),
            Ok(FieldValue::Null) if resolves(nested, rest) => Ok(None),
            Ok(FieldValue::Null) => Err(Error::ColumnNotFound(column.to_string())),
            Ok(_) => {
                dropped(column, &mismatch(field));
                Ok(None)
            }
            Err(reason) => {
                dropped(column, &reason);
                Ok(None)
            }
        };
    }

    let field = descriptor
        .field(path)
        .ok_or_else(|| Error::ColumnNotFound(column.to_string()))?;
    if matches!(field.kind, FieldKind::Composite(_) | FieldKind::Unsupported(_)) {
        // Not a column of its own
        return Err(Error::ColumnNotFound(column.to_string()));
    }

    match read_member(record, field).and_then(|value| coerce(field, value)) {
        Ok(value) => Ok(value),
        Err(reason) => {
            dropped(column, &reason);
            Ok(None)
        }
    }
}

/// Low-level accessor; unreadable members fail like a throwing getter would.
fn read_member<'a>(
    record: &'a dyn Record,
    field: &FieldDescriptor,
) -> std::result::Result<FieldValue<'a>, ReadError> {
    if !field.readable {
        return Err(ReadError::Unreadable(field.name.to_string()));
    }
    record.read(field.name)
}

fn coerce(
    field: &FieldDescriptor,
    value: FieldValue<'_>,
) -> std::result::Result<Option<Value>, ReadError> {
    let value = match (field.kind, value) {
        (_, FieldValue::Null) => None,
        (FieldKind::Scalar(ScalarKind::Text), FieldValue::Text(s)) => {
            Some(Value::Text(s.to_string()))
        }
        (FieldKind::Scalar(ScalarKind::Int32), FieldValue::Int32(i)) => Some(Value::Integer(i)),
        (FieldKind::Scalar(ScalarKind::Int64), FieldValue::Int64(i)) => {
            Some(Value::Text(i.to_string()))
        }
        (FieldKind::Scalar(ScalarKind::Decimal), FieldValue::Decimal(d)) => {
            let real = d
                .to_f64()
                .ok_or_else(|| ReadError::Unrepresentable(field.name.to_string()))?;
            Some(Value::Real(real))
        }
        (FieldKind::Scalar(ScalarKind::Double), FieldValue::Double(r)) => Some(Value::Real(r)),
        (FieldKind::Scalar(ScalarKind::DateTime), FieldValue::DateTime(dt)) => {
            Some(Value::DateTime(dt))
        }
        (FieldKind::Scalar(ScalarKind::Bool), FieldValue::Bool(b)) => Some(Value::Boolean(b)),
        (FieldKind::ContactList, FieldValue::Contacts(contacts)) => contacts
            .first()
            .and_then(|contact| contact.value.clone())
            .map(Value::Text),
        _ => return Err(mismatch(field)),
    };
    Ok(value)
}

/// Whether `path` names a column somewhere below `descriptor`.
fn resolves(descriptor: &EntityDescriptor, path: &str) -> bool {
    let (head, rest) = match path.split_once(PATH_SEPARATOR) {
        Some((head, rest)) => (head, Some(rest)),
        None => (path, None),
    };
    match (descriptor.field(head).map(|f| f.kind), rest) {
        (Some(FieldKind::Composite(nested)), Some(rest)) => resolves(nested, rest),
        (Some(FieldKind::Scalar(_) | FieldKind::ContactList), None) => true,
        _ => false,
    }
}

fn mismatch(field: &FieldDescriptor) -> ReadError {
    let expected = match field.kind {
        FieldKind::Scalar(ScalarKind::Text) => "text",
        FieldKind::Scalar(ScalarKind::Int32) => "int32",
        FieldKind::Scalar(ScalarKind::Int64) => "int64",
        FieldKind::Scalar(ScalarKind::Decimal) => "decimal",
        FieldKind::Scalar(ScalarKind::Double) => "double",
        FieldKind::Scalar(ScalarKind::DateTime) => "datetime",
        FieldKind::Scalar(ScalarKind::Bool) => "bool",
        FieldKind::Composite(_) => "composite",
        FieldKind::ContactList => "contact list",
        FieldKind::Unsupported(_) => "unsupported",
    };
    ReadError::TypeMismatch {
        member: field.name.to_string(),
        expected,
    }
}

fn dropped(column: &str, reason: &ReadError) {
    debug!("No value for column {}: {}", column, reason);
}
