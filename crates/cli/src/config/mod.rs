pub mod profile;

pub use profile::{Invocation, Profile};
