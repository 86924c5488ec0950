use anyhow::Result;
use sevenoffice_otds_core::DataSourceConnection;

use super::open_connection;
use crate::config::Invocation;
use crate::display::print_columns;

pub fn columns_command(invocation: &Invocation, json: bool) -> Result<()> {
    let connection = open_connection(invocation)?;
    let columns = connection.get_columns()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&columns)?);
    } else {
        print_columns(&columns);
    }

    Ok(())
}
