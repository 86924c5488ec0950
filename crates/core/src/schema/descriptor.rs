//! Static descriptions of the remote entity types.
//!
//! Every remote type is described by one [`EntityDescriptor`]: a table of its
//! members in declaration order. Projection and extraction walk these tables
//! instead of inspecting types at runtime, so column order is exactly the
//! table order.

use crate::types::ColumnType;

/// Primitive member types the remote service exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Text,
    Int32,
    Int64,
    Decimal,
    Double,
    DateTime,
    Bool,
}

impl ScalarKind {
    /// Host column type for this kind.
    ///
    /// Decimals become reals and 64-bit integers become text, since the host
    /// has neither.
    pub const fn column_type(self) -> ColumnType {
        match self {
            ScalarKind::Text | ScalarKind::Int64 => ColumnType::Text,
            ScalarKind::Int32 => ColumnType::Integer,
            ScalarKind::Decimal | ScalarKind::Double => ColumnType::Real,
            ScalarKind::DateTime => ColumnType::DateTime,
            ScalarKind::Bool => ColumnType::Boolean,
        }
    }
}

/// How a member maps onto columns
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// One column of the coerced scalar type.
    Scalar(ScalarKind),
    /// A nested record flattened into `<member>.<nested>` columns.
    Composite(&'static EntityDescriptor),
    /// A list of contact details collapsed to its first entry's value.
    ContactList,
    /// A member the host cannot represent; never projected.
    Unsupported(&'static str),
}

/// One member of a remote type
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
    /// `false` for members without a readable getter.
    pub readable: bool,
}

impl FieldDescriptor {
    pub const fn scalar(name: &'static str, kind: ScalarKind) -> Self {
        Self {
            name,
            kind: FieldKind::Scalar(kind),
            readable: true,
        }
    }

    pub const fn composite(name: &'static str, nested: &'static EntityDescriptor) -> Self {
        Self {
            name,
            kind: FieldKind::Composite(nested),
            readable: true,
        }
    }

    pub const fn contact_list(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::ContactList,
            readable: true,
        }
    }

    pub const fn unsupported(name: &'static str, remote_type: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Unsupported(remote_type),
            readable: true,
        }
    }

    /// Marks the member as having no readable getter.
    pub const fn write_only(self) -> Self {
        Self {
            readable: false,
            ..self
        }
    }
}

/// Ordered member table of a remote type
#[derive(Debug)]
pub struct EntityDescriptor {
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl EntityDescriptor {
    /// Looks up a member by exact (case-sensitive) name.
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }
}
