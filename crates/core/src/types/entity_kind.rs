use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The category of record a connection retrieves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum EntityKind {
    /// Not set or not configured; retrieval fails while in this state.
    #[default]
    Unknown,
    Invoices,
    Persons,
    Departments,
}

impl EntityKind {
    /// Kinds that can be named in a select statement.
    pub const SUPPORTED: [EntityKind; 3] = [
        EntityKind::Invoices,
        EntityKind::Persons,
        EntityKind::Departments,
    ];

    /// Select statement values accepted for this kind.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            EntityKind::Unknown => &[],
            EntityKind::Invoices => &["invoice", "invoices"],
            EntityKind::Persons => &["employee", "employees"],
            EntityKind::Departments => &["department", "departments"],
        }
    }

    /// Comma separated list of every accepted select statement value.
    pub fn expected_values() -> String {
        Self::SUPPORTED
            .iter()
            .flat_map(|kind| kind.aliases().iter().copied())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Unknown => "Unknown",
            EntityKind::Invoices => "Invoices",
            EntityKind::Persons => "Persons",
            EntityKind::Departments => "Departments",
        };
        f.write_str(name)
    }
}

impl FromStr for EntityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_lowercase();
        Self::SUPPORTED
            .into_iter()
            .find(|kind| kind.aliases().contains(&value.as_str()))
            .ok_or_else(|| Error::UnsupportedEntityKind {
                value: s.to_string(),
                expected: Self::expected_values(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases_case_insensitive() {
        assert_eq!("invoice".parse::<EntityKind>().unwrap(), EntityKind::Invoices);
        assert_eq!(" Invoices ".parse::<EntityKind>().unwrap(), EntityKind::Invoices);
        assert_eq!("EMPLOYEE".parse::<EntityKind>().unwrap(), EntityKind::Persons);
        assert_eq!("employees".parse::<EntityKind>().unwrap(), EntityKind::Persons);
        assert_eq!("Department".parse::<EntityKind>().unwrap(), EntityKind::Departments);
        assert_eq!("departments".parse::<EntityKind>().unwrap(), EntityKind::Departments);
    }

    #[test]
    fn test_unknown_value_lists_valid_kinds() {
        let err = "bogus".parse::<EntityKind>().unwrap_err();
        match err {
            Error::UnsupportedEntityKind { value, expected } => {
                assert_eq!(value, "bogus");
                assert_eq!(
                    expected,
                    "invoice, invoices, employee, employees, department, departments"
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_is_not_selectable() {
        assert!("unknown".parse::<EntityKind>().is_err());
        assert_eq!(EntityKind::default(), EntityKind::Unknown);
    }
}
