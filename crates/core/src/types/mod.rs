pub mod column;
pub mod entity_kind;
pub mod value;

// Re-export commonly used types
pub use column::{ColumnDefinition, ColumnType};
pub use entity_kind::EntityKind;
pub use value::{DataRow, Value};
