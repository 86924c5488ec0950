//! Trait interfaces at the edges of the data source
//!
//! The host side ([`DataSource`], [`DataSourceConnection`]) is the contract
//! the document-management server calls. The remote side ([`EntityGateway`])
//! is the capability the connection consumes to fetch entities.

pub mod data_source;
pub mod gateway;

pub use data_source::{DataSource, DataSourceConnection, PluginMetadata};
pub use gateway::{EntityGateway, GatewayBuilder, SessionToken};
