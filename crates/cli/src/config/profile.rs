use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Saved connection details, read from a `--profile` JSON file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub connection_string: Option<String>,
    #[serde(default)]
    pub select_statement: Option<String>,
}

impl Profile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile {}", path.display()))?;
        let profile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse profile {}", path.display()))?;
        debug!("Loaded profile from {}", path.display());
        Ok(profile)
    }
}

/// What a command runs against once flags, environment and profile are merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub connection_string: String,
    pub select_statement: String,
}

impl Invocation {
    /// Flags (and their environment variables) take precedence over the profile.
    pub fn resolve(
        connection: Option<String>,
        select: Option<String>,
        profile: Option<&Path>,
    ) -> Result<Self> {
        let profile = match profile {
            Some(path) => Profile::load(path)?,
            None => Profile::default(),
        };

        let Some(connection_string) = connection.or(profile.connection_string) else {
            bail!(
                "No connection string given; use --connection, OTDS_CONNECTION_STRING or a profile"
            );
        };
        let Some(select_statement) = select.or(profile.select_statement) else {
            bail!("No select statement given; use --select, OTDS_SELECT or a profile");
        };

        Ok(Self {
            connection_string,
            select_statement,
        })
    }
}
