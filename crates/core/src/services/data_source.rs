use tracing::info;
use uuid::Uuid;

use super::connection::Connection;
use crate::{
    config::ConnectionSettings,
    error::Result,
    gateway::SoapGatewayBuilder,
    interfaces::{DataSource, DataSourceConnection, GatewayBuilder, PluginMetadata},
    types::EntityKind,
};

/// Entry point for the 24SevenOffice external object type data source
#[derive(Debug, Clone, Default)]
pub struct TwentyFourSevenDataSource<B: GatewayBuilder = SoapGatewayBuilder> {
    builder: B,
}

impl TwentyFourSevenDataSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B: GatewayBuilder> TwentyFourSevenDataSource<B> {
    /// Data source whose connections use gateways from `builder`.
    pub fn with_builder(builder: B) -> Self {
        Self { builder }
    }

    /// Validates `connection_string` and opens a typed connection.
    ///
    /// No remote call is made; authentication happens on first fetch.
    pub fn connect(
        &self,
        connection_string: &str,
        configuration_id: Uuid,
    ) -> Result<Connection<B::Gateway>> {
        let settings = ConnectionSettings::parse(connection_string)?;
        let gateway = self.builder.build(&settings)?;
        info!(
            "Opened connection for {} (configuration {})",
            settings.credentials.username, configuration_id
        );
        Ok(Connection::new(settings, configuration_id, gateway))
    }
}

impl<B: GatewayBuilder> DataSource for TwentyFourSevenDataSource<B> {
    fn metadata(&self) -> PluginMetadata {
        PluginMetadata {
            name: "24SevenOffice".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: Some(
                "Read-only access to 24SevenOffice departments, employees and invoices".to_string(),
            ),
            supported_kinds: EntityKind::SUPPORTED.to_vec(),
        }
    }

    fn open_connection(
        &self,
        connection_string: &str,
        configuration_id: Uuid,
    ) -> Result<Box<dyn DataSourceConnection>> {
        Ok(Box::new(self.connect(connection_string, configuration_id)?))
    }

    fn can_alter_data(&self) -> bool {
        // Reading only
        false
    }
}
