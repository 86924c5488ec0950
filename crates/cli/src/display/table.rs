use serde_json::{Map, Value as JsonValue};
use sevenoffice_otds_core::{ColumnDefinition, DataRow};

pub fn print_columns(columns: &[ColumnDefinition]) {
    let width = columns
        .iter()
        .map(|column| column.name.len())
        .max()
        .unwrap_or(0);

    for column in columns {
        println!(
            "{:>3}  {:<width$}  {}",
            column.ordinal,
            column.name,
            column.column_type,
            width = width
        );
    }
}

pub fn print_rows(columns: &[ColumnDefinition], rows: &[DataRow]) {
    for (index, row) in rows.iter().enumerate() {
        println!("Item number {}", index + 1);
        for column in columns {
            let value = row
                .get(column.ordinal)
                .map(|value| value.to_string())
                .unwrap_or_default();
            println!("\tColumn: {}\t\tValue: {}", column.name, value);
        }
    }
}

/// One JSON object per row, keyed by column name.
pub fn rows_to_json(columns: &[ColumnDefinition], rows: &[DataRow]) -> JsonValue {
    let objects = rows
        .iter()
        .map(|row| {
            let object: Map<String, JsonValue> = columns
                .iter()
                .map(|column| {
                    let value = row
                        .get(column.ordinal)
                        .and_then(|value| serde_json::to_value(value).ok())
                        .unwrap_or(JsonValue::Null);
                    (column.name.clone(), value)
                })
                .collect();
            JsonValue::Object(object)
        })
        .collect();
    JsonValue::Array(objects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sevenoffice_otds_core::{ColumnType, Value};

    #[test]
    fn test_rows_to_json_uses_column_names() {
        let columns = vec![
            ColumnDefinition::new(0, "Id", ColumnType::Integer),
            ColumnDefinition::new(1, "Name", ColumnType::Text),
        ];
        let mut row = DataRow::new();
        row.insert(0, Some(Value::Integer(7)));
        row.insert(1, None);

        let json = rows_to_json(&columns, &[row]);
        assert_eq!(json, serde_json::json!([{ "Id": 7, "Name": null }]));
    }
}
