//! Configuration handling for the data source
//!
//! Both the host connection string and the object type's select statement
//! use the `key=value;key=value` format parsed here.

pub mod parser;
mod settings;

pub use parser::{split_configuration_string, split_configuration_string_with};
pub use settings::{
    ConnectionSettings, Credentials, DEFAULT_BASE_URL, DEFAULT_SESSION_TTL, DEFAULT_TIMEOUT,
    ServiceEndpoints,
};
