//! Host-facing implementation of the data source

pub mod connection;
pub mod data_source;

pub use connection::{Connection, changed_after_cutoff};
pub use data_source::TwentyFourSevenDataSource;
