use tracing::{debug, trace};

use super::descriptor::{EntityDescriptor, FieldKind};
use crate::types::{ColumnDefinition, ColumnType};

/// Separator between a composite member and its nested column names.
pub const PATH_SEPARATOR: char = '.';

/// Derives the ordered column schema of an entity type.
///
/// Members are visited in descriptor order. Composite members are flattened
/// recursively with `<member>.` prefixed to every nested name, contact lists
/// collapse to a single text column, and unsupported or unreadable members are
/// left out. Ordinals run from 0 without gaps.
pub fn project(descriptor: &EntityDescriptor) -> Vec<ColumnDefinition> {
    let mut columns = Vec::new();
    project_into(descriptor, "", &mut columns);
    debug!("Projected {} columns for {}", columns.len(), descriptor.name);
    columns
}

fn project_into(descriptor: &EntityDescriptor, prefix: &str, columns: &mut Vec<ColumnDefinition>) {
    for field in descriptor.fields {
        if !field.readable {
            trace!("Skipping unreadable member {}.{}", descriptor.name, field.name);
            continue;
        }

        let name = format!("{prefix}{}", field.name);
        match field.kind {
            FieldKind::Scalar(kind) => {
                columns.push(ColumnDefinition::new(columns.len(), name, kind.column_type()));
            }
            FieldKind::ContactList => {
                columns.push(ColumnDefinition::new(columns.len(), name, ColumnType::Text));
            }
            FieldKind::Composite(nested) => {
                let nested_prefix = format!("{name}{PATH_SEPARATOR}");
                project_into(nested, &nested_prefix, columns);
            }
            FieldKind::Unsupported(remote_type) => {
                trace!(
                    "Skipping unsupported member {}.{} ({})",
                    descriptor.name, field.name, remote_type
                );
            }
        }
    }
}

/// Distinct top-level member names behind a projected schema, in order.
pub fn top_level_members(columns: &[ColumnDefinition]) -> Vec<String> {
    let mut members: Vec<String> = Vec::new();
    for column in columns {
        let head = column
            .name
            .split(PATH_SEPARATOR)
            .next()
            .unwrap_or(column.name.as_str());
        if !members.iter().any(|m| m == head) {
            members.push(head.to_string());
        }
    }
    members
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::descriptor::{FieldDescriptor, ScalarKind};

    static POINT: EntityDescriptor = EntityDescriptor {
        name: "Point",
        fields: &[
            FieldDescriptor::scalar("X", ScalarKind::Double),
            FieldDescriptor::scalar("Y", ScalarKind::Double),
        ],
    };

    static SHAPE: EntityDescriptor = EntityDescriptor {
        name: "Shape",
        fields: &[
            FieldDescriptor::scalar("Id", ScalarKind::Int32),
            FieldDescriptor::composite("Origin", &POINT),
            FieldDescriptor::unsupported("Vertices", "Point[]"),
            FieldDescriptor::scalar("Serial", ScalarKind::Int64),
            FieldDescriptor::scalar("Secret", ScalarKind::Text).write_only(),
            FieldDescriptor::contact_list("Emails"),
            FieldDescriptor::scalar("Area", ScalarKind::Decimal),
        ],
    };

    static EMPTY: EntityDescriptor = EntityDescriptor {
        name: "Empty",
        fields: &[FieldDescriptor::unsupported("Blob", "byte[]")],
    };

    fn render(columns: &[ColumnDefinition]) -> String {
        columns
            .iter()
            .map(|c| format!("{} {} {}", c.ordinal, c.name, c.column_type))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_project_flattens_and_coerces() {
        insta::assert_snapshot!(render(&project(&SHAPE)), @r###"
        0 Id Integer
        1 Origin.X Real
        2 Origin.Y Real
        3 Serial Text
        4 Emails Text
        5 Area Real
        "###);
    }

    #[test]
    fn test_ordinals_are_contiguous() {
        let columns = project(&SHAPE);
        for (index, column) in columns.iter().enumerate() {
            assert_eq!(column.ordinal, index);
        }
    }

    #[test]
    fn test_composite_advances_counter_past_nested_columns() {
        let columns = project(&SHAPE);
        let nested: Vec<_> = columns
            .iter()
            .filter(|c| c.name.starts_with("Origin."))
            .collect();
        assert_eq!(nested.len(), 2);

        let max_nested = nested.iter().map(|c| c.ordinal).max().unwrap();
        let next = columns.iter().find(|c| c.name == "Serial").unwrap();
        assert!(next.ordinal > max_nested);
    }

    #[test]
    fn test_project_is_deterministic() {
        assert_eq!(project(&SHAPE), project(&SHAPE));
    }

    #[test]
    fn test_unsupported_only_type_projects_nothing() {
        assert!(project(&EMPTY).is_empty());
    }

    #[test]
    fn test_top_level_members() {
        let members = top_level_members(&project(&SHAPE));
        assert_eq!(members, vec!["Id", "Origin", "Serial", "Emails", "Area"]);
    }
}
