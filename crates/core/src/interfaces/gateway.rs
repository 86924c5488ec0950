//! Remote fetch capability
//!
//! The connection only depends on this surface; the SOAP transport behind it
//! lives in [`crate::gateway`].

use chrono::NaiveDateTime;
use std::fmt;

use crate::{
    config::{ConnectionSettings, Credentials},
    entities::{Department, InvoiceOrder, PersonItem},
    error::Result,
};

/// Opaque proof of a successful login
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(pub String);

impl SessionToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

/// Authenticates against and fetches entities from the remote service.
///
/// Implementations cache the session and re-authenticate before a fetch only
/// when it is absent or expired. Not thread-safe: one connection drives one
/// gateway at a time.
pub trait EntityGateway {
    /// Log in, reusing a still valid session.
    fn authenticate(&mut self, credentials: &Credentials) -> Result<SessionToken>;

    fn fetch_departments(
        &mut self,
        credentials: &Credentials,
        changed_after: NaiveDateTime,
    ) -> Result<Vec<Department>>;

    fn fetch_persons(
        &mut self,
        credentials: &Credentials,
        changed_after: NaiveDateTime,
    ) -> Result<Vec<PersonItem>>;

    fn fetch_invoices(
        &mut self,
        credentials: &Credentials,
        changed_after: NaiveDateTime,
    ) -> Result<Vec<InvoiceOrder>>;
}

/// Creates the gateway a new connection will use
pub trait GatewayBuilder {
    type Gateway: EntityGateway + 'static;

    fn build(&self, settings: &ConnectionSettings) -> Result<Self::Gateway>;
}
