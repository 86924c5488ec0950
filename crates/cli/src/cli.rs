use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use crate::commands::{columns_command, kinds_command, rows_command};
use crate::config::Invocation;

/// Query 24SevenOffice departments, employees and invoices as columns and rows
#[derive(Parser, Debug)]
#[command(name = "sevenoffice-otds")]
#[command(version, about, long_about = None, propagate_version = true)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    /// Connection string (username=...;password=...;applicationid=...)
    #[arg(long, global = true, env = "OTDS_CONNECTION_STRING", hide_env_values = true)]
    pub connection: Option<String>,

    /// Select statement naming the object type (e.g. type=departments)
    #[arg(long, global = true, env = "OTDS_SELECT")]
    pub select: Option<String>,

    /// JSON profile holding a connection string and select statement
    #[arg(long, global = true)]
    pub profile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the columns of the selected object type
    #[command(visible_alias = "c")]
    Columns {
        /// Print the columns as JSON
        #[arg(long)]
        json: bool,
    },
    /// Fetch and print every row of the selected object type
    #[command(visible_alias = "r")]
    Rows {
        /// Print the rows as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the accepted select statement types
    Kinds,
}

impl Cli {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        debug!("Executing {:?}", self.command);

        match self.command {
            Commands::Kinds => kinds_command(),
            Commands::Columns { json } => {
                let invocation =
                    Invocation::resolve(self.connection, self.select, self.profile.as_deref())?;
                columns_command(&invocation, json)
            }
            Commands::Rows { json } => {
                let invocation =
                    Invocation::resolve(self.connection, self.select, self.profile.as_deref())?;
                rows_command(&invocation, json)
            }
        }
    }
}
