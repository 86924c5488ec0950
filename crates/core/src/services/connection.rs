use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    config::{ConnectionSettings, split_configuration_string},
    entities::descriptor_for,
    error::{Error, Result},
    interfaces::{DataSourceConnection, EntityGateway},
    record::{Record, to_data_row},
    schema::project,
    types::{ColumnDefinition, DataRow, EntityKind},
};

/// Cutoff passed to every fetch; early enough to return everything.
pub fn changed_after_cutoff() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2000, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// A connection to 24SevenOffice for one configured entity kind.
///
/// Created once the connection string has been validated. Becomes ready
/// for retrieval after [`prepare_for_retrieval`](DataSourceConnection::prepare_for_retrieval)
/// names an entity kind, which then stays fixed for the connection's lifetime.
#[derive(Debug)]
pub struct Connection<G: EntityGateway> {
    settings: ConnectionSettings,
    configuration_id: Uuid,
    gateway: G,
    entity_kind: EntityKind,
}

impl<G: EntityGateway> Connection<G> {
    pub fn new(settings: ConnectionSettings, configuration_id: Uuid, gateway: G) -> Self {
        Self {
            settings,
            configuration_id,
            gateway,
            entity_kind: EntityKind::Unknown,
        }
    }

    pub fn entity_kind(&self) -> EntityKind {
        self.entity_kind
    }

    pub fn configuration_id(&self) -> Uuid {
        self.configuration_id
    }

    pub fn settings(&self) -> &ConnectionSettings {
        &self.settings
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    fn require_ready(&self) -> Result<EntityKind> {
        match self.entity_kind {
            EntityKind::Unknown => Err(Error::NotConfigured),
            kind => Ok(kind),
        }
    }
}

impl<G: EntityGateway> DataSourceConnection for Connection<G> {
    fn prepare_for_retrieval(&mut self, select_statement: &str) -> Result<()> {
        let mut selected = None;
        for (key, value) in split_configuration_string(select_statement) {
            match key.trim().to_lowercase().as_str() {
                "type" => selected = Some(value.parse::<EntityKind>()?),
                other => debug!("Ignoring unknown select statement key: {}", other),
            }
        }

        let Some(kind) = selected else {
            debug!("Select statement names no type: {:?}", select_statement);
            return Ok(());
        };

        if self.entity_kind != EntityKind::Unknown && self.entity_kind != kind {
            return Err(Error::ConfigError(format!(
                "The connection is already configured for {}; cannot switch to {}.",
                self.entity_kind, kind
            )));
        }

        info!("Connection configured for {}", kind);
        self.entity_kind = kind;
        Ok(())
    }

    fn get_columns(&self) -> Result<Vec<ColumnDefinition>> {
        let kind = self.require_ready()?;
        let descriptor = descriptor_for(kind).ok_or(Error::NotConfigured)?;
        Ok(project(descriptor))
    }

    fn get_rows(&mut self) -> Result<Vec<DataRow>> {
        let kind = self.require_ready()?;
        let columns = self.get_columns()?;
        let credentials = &self.settings.credentials;
        let cutoff = changed_after_cutoff();

        match kind {
            EntityKind::Departments => {
                to_rows(&self.gateway.fetch_departments(credentials, cutoff)?, &columns)
            }
            EntityKind::Persons => {
                to_rows(&self.gateway.fetch_persons(credentials, cutoff)?, &columns)
            }
            EntityKind::Invoices => {
                to_rows(&self.gateway.fetch_invoices(credentials, cutoff)?, &columns)
            }
            EntityKind::Unknown => Err(Error::NotConfigured),
        }
    }
}

fn to_rows<R: Record>(entities: &[R], columns: &[ColumnDefinition]) -> Result<Vec<DataRow>> {
    entities
        .iter()
        .map(|entity| to_data_row(entity, columns))
        .collect()
}
