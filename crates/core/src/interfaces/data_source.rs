//! Host plugin contract
//!
//! Defines the entry point the host instantiates and the per-connection
//! retrieval interface.

use uuid::Uuid;

use crate::{
    error::Result,
    types::{ColumnDefinition, DataRow, EntityKind},
};

/// Metadata about the data source plugin
#[derive(Debug, Clone)]
pub struct PluginMetadata {
    /// Plugin name
    pub name: String,

    /// Plugin version
    pub version: String,

    /// Plugin description
    pub description: Option<String>,

    /// Entity kinds a select statement may name
    pub supported_kinds: Vec<EntityKind>,
}

/// Entry point for an external object type data source
pub trait DataSource {
    /// Get plugin metadata
    fn metadata(&self) -> PluginMetadata;

    /// Parse `connection_string` and open a connection.
    ///
    /// Fails with a configuration error before any remote call if the
    /// credentials are incomplete or malformed.
    fn open_connection(
        &self,
        connection_string: &str,
        configuration_id: Uuid,
    ) -> Result<Box<dyn DataSourceConnection>>;

    /// Whether the host may write back through this data source.
    fn can_alter_data(&self) -> bool;
}

/// A single configured connection
pub trait DataSourceConnection {
    /// Configure what to retrieve from a select statement such as `type=invoice`.
    fn prepare_for_retrieval(&mut self, select_statement: &str) -> Result<()>;

    /// The column schema of the configured entity kind.
    fn get_columns(&self) -> Result<Vec<ColumnDefinition>>;

    /// Fetch every entity of the configured kind as host rows.
    fn get_rows(&mut self) -> Result<Vec<DataRow>>;
}
