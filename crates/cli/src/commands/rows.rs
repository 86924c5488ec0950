use anyhow::{Context, Result};
use sevenoffice_otds_core::DataSourceConnection;
use tracing::info;

use super::open_connection;
use crate::config::Invocation;
use crate::display::{print_rows, rows_to_json};

pub fn rows_command(invocation: &Invocation, json: bool) -> Result<()> {
    let mut connection = open_connection(invocation)?;
    let columns = connection.get_columns()?;
    let rows = connection
        .get_rows()
        .with_context(|| format!("Failed to fetch {}", connection.entity_kind()))?;
    info!("Fetched {} rows", rows.len());

    if json {
        let value = rows_to_json(&columns, &rows);
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print_rows(&columns, &rows);
    }

    Ok(())
}
