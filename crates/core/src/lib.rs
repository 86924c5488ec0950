//! sevenoffice-otds - A read-only 24SevenOffice data source for external object types
//!
//! This crate provides functionality to:
//! - Parse `key=value;key=value` connection strings and select statements
//! - Project the remote Department, PersonItem and InvoiceOrder types into flat column schemas
//! - Extract typed cell values from remote records by dotted column path
//! - Authenticate against and fetch entities from the 24SevenOffice SOAP services
//! - Expose all of it to a host through the [`DataSource`] and [`DataSourceConnection`] traits
pub mod config;
pub mod entities;
pub mod error;
pub mod gateway;
pub mod interfaces;
pub mod record;
pub mod schema;
pub mod services;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use config::{ConnectionSettings, Credentials, split_configuration_string};
pub use interfaces::{
    DataSource, DataSourceConnection, EntityGateway, GatewayBuilder, PluginMetadata,
};
pub use record::{Record, extract, to_data_row};
pub use schema::project;
pub use services::{Connection, TwentyFourSevenDataSource};
