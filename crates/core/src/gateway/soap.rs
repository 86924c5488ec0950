use std::time::Duration;

use chrono::NaiveDateTime;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::session::Session;
use super::transport::{HttpTransport, SoapRequest, SoapTransport};
use super::xml::{DATE_TIME_FORMAT, XmlElement, element, envelope, operation, response_result};
use crate::config::{ConnectionSettings, Credentials, ServiceEndpoints};
use crate::entities::{Department, INVOICE_ORDER, InvoiceOrder, PersonItem};
use crate::error::{Error, Result};
use crate::interfaces::{EntityGateway, GatewayBuilder, SessionToken};
use crate::schema::{project, top_level_members};

/// XML namespace shared by the 24SevenOffice services.
pub const SERVICE_NAMESPACE: &str = "http://24sevenOffice.com/webservices";

const LOGIN_FAILED: &str = "Error logging into 24SevenOffice web services. \
     Credentials (username, password, application Id) may be incorrect.";

/// Entity gateway speaking SOAP to the 24SevenOffice web services
#[derive(Debug)]
pub struct SoapGateway<T: SoapTransport = HttpTransport> {
    transport: T,
    endpoints: ServiceEndpoints,
    session_ttl: Duration,
    session: Option<Session>,
}

impl SoapGateway<HttpTransport> {
    /// Gateway over HTTP configured from connection settings.
    pub fn connect(settings: &ConnectionSettings) -> Result<Self> {
        let transport = HttpTransport::new(settings.timeout)?;
        Ok(Self::new(
            transport,
            settings.endpoints.clone(),
            settings.session_ttl,
        ))
    }
}

impl<T: SoapTransport> SoapGateway<T> {
    pub fn new(transport: T, endpoints: ServiceEndpoints, session_ttl: Duration) -> Self {
        Self {
            transport,
            endpoints,
            session_ttl,
            session: None,
        }
    }

    /// The current session, if logged in.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn login(&mut self, credentials: &Credentials) -> Result<SessionToken> {
        info!("Authenticating to 24SevenOffice as {}", credentials.username);

        let credential = [
            element("ApplicationId", &credentials.application_id.to_string()),
            // Always empty for integrations
            element("IdentityId", &Uuid::nil().to_string()),
            element("Username", &credentials.username),
            element("Password", &credentials.password),
        ]
        .concat();
        let request = SoapRequest {
            url: self.endpoints.authenticate(),
            action: soap_action("Login"),
            body: envelope(&operation(
                "Login",
                SERVICE_NAMESPACE,
                &format!("<credential>{credential}</credential>"),
            )),
            session: None,
        };

        let result = match self
            .transport
            .call(&request)
            .and_then(|xml| response_result(&xml, "Login"))
        {
            Ok(result) => result,
            Err(Error::SoapFault(message)) => {
                warn!("Login rejected: {}", message);
                return Err(Error::AuthenticationError(message));
            }
            Err(err) => return Err(err),
        };

        let session_id = result.text.trim();
        if session_id.is_empty() {
            warn!("Login returned an empty session id");
            return Err(Error::AuthenticationError(LOGIN_FAILED.to_string()));
        }

        let token = SessionToken(session_id.to_string());
        self.session = Some(Session::new(token.clone(), self.session_ttl));
        info!("Authenticated to 24SevenOffice");
        Ok(token)
    }

    /// Calls `name` on the service at `url` within an authenticated session.
    fn invoke(
        &mut self,
        credentials: &Credentials,
        url: String,
        name: &str,
        content: &str,
    ) -> Result<XmlElement> {
        let token = self.authenticate(credentials)?;
        let request = SoapRequest {
            url,
            action: soap_action(name),
            body: envelope(&operation(name, SERVICE_NAMESPACE, content)),
            session: Some(token),
        };

        let result = self
            .transport
            .call(&request)
            .and_then(|xml| response_result(&xml, name));
        match &result {
            Ok(_) => {
                if let Some(session) = self.session.as_mut() {
                    session.touch();
                }
            }
            Err(Error::SoapFault(message)) => {
                // Most likely a session the server already dropped
                warn!("{} failed: {}; discarding session", name, message);
                self.session = None;
            }
            Err(_) => {}
        }
        result
    }
}

impl<T: SoapTransport> EntityGateway for SoapGateway<T> {
    fn authenticate(&mut self, credentials: &Credentials) -> Result<SessionToken> {
        match &self.session {
            Some(session) if !session.is_expired() => return Ok(session.token().clone()),
            Some(_) => debug!("Session expired, logging in again"),
            None => {}
        }
        self.login(credentials)
    }

    fn fetch_departments(
        &mut self,
        credentials: &Credentials,
        changed_after: NaiveDateTime,
    ) -> Result<Vec<Department>> {
        // The department list cannot be filtered by change date
        debug!("Fetching departments (changed_after {} not applied)", changed_after);
        let url = self.endpoints.client_service();
        let result = self.invoke(credentials, url, "GetDepartmentList", "")?;
        let departments: Vec<Department> = result.items()?;
        info!("Fetched {} departments", departments.len());
        Ok(departments)
    }

    fn fetch_persons(
        &mut self,
        credentials: &Credentials,
        changed_after: NaiveDateTime,
    ) -> Result<Vec<PersonItem>> {
        let search = [
            element("IsEmployee", "True"),
            element("ChangedAfter", &format_date(changed_after)),
        ]
        .concat();
        let content = format!("<personSearch>{search}</personSearch>");

        let url = self.endpoints.person_service();
        let result = self.invoke(credentials, url, "GetPersonsDetailed", &content)?;
        let persons: Vec<PersonItem> = result.items()?;
        info!("Fetched {} persons", persons.len());
        Ok(persons)
    }

    fn fetch_invoices(
        &mut self,
        credentials: &Credentials,
        changed_after: NaiveDateTime,
    ) -> Result<Vec<InvoiceOrder>> {
        let properties: String = top_level_members(&project(&INVOICE_ORDER))
            .iter()
            .map(|member| element("string", member))
            .collect();
        let content = format!(
            "<searchParams>{}</searchParams><invoiceReturnProperties>{}</invoiceReturnProperties><rowReturnProperties />",
            element("ChangedAfter", &format_date(changed_after)),
            properties
        );

        let url = self.endpoints.invoice_service();
        let result = self.invoke(credentials, url, "GetInvoices", &content)?;
        let invoices: Vec<InvoiceOrder> = result.items()?;
        info!("Fetched {} invoices", invoices.len());
        Ok(invoices)
    }
}

/// Builds HTTP SOAP gateways from connection settings
#[derive(Debug, Clone, Copy, Default)]
pub struct SoapGatewayBuilder;

impl GatewayBuilder for SoapGatewayBuilder {
    type Gateway = SoapGateway<HttpTransport>;

    fn build(&self, settings: &ConnectionSettings) -> Result<Self::Gateway> {
        SoapGateway::connect(settings)
    }
}

fn soap_action(name: &str) -> String {
    format!("{SERVICE_NAMESPACE}/{name}")
}

fn format_date(date: NaiveDateTime) -> String {
    date.format(DATE_TIME_FORMAT).to_string()
}
