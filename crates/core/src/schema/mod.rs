//! Entity type descriptions and column schema projection

pub mod descriptor;
pub mod projector;

pub use descriptor::{EntityDescriptor, FieldDescriptor, FieldKind, ScalarKind};
pub use projector::{PATH_SEPARATOR, project, top_level_members};
