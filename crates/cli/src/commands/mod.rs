pub mod columns;
pub mod kinds;
pub mod rows;

pub use columns::columns_command;
pub use kinds::kinds_command;
pub use rows::rows_command;

use anyhow::{Context, Result};
use sevenoffice_otds_core::{
    Connection, DataSourceConnection, TwentyFourSevenDataSource, gateway::SoapGateway,
};
use tracing::debug;
use uuid::Uuid;

use crate::config::Invocation;

/// Opens a connection and selects the object type, without any remote call.
pub(crate) fn open_connection(invocation: &Invocation) -> Result<Connection<SoapGateway>> {
    let configuration_id = Uuid::new_v4();
    debug!("Opening connection for configuration {}", configuration_id);

    let source = TwentyFourSevenDataSource::new();
    let mut connection = source
        .connect(&invocation.connection_string, configuration_id)
        .context("Invalid connection string")?;
    connection
        .prepare_for_retrieval(&invocation.select_statement)
        .context("Invalid select statement")?;
    Ok(connection)
}
