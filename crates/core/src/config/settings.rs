use std::fmt;
use std::time::Duration;

use tracing::debug;
use uuid::Uuid;

use super::parser::split_configuration_string;
use crate::error::{Error, Result};

/// Default root of the 24SevenOffice web services.
pub const DEFAULT_BASE_URL: &str = "https://api.24sevenoffice.com";

/// Default HTTP timeout for a single SOAP call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default lifetime of an authenticated session (the ASP.NET default).
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(20 * 60);

/// Credentials used to log in to the remote service.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Always an email address.
    pub username: String,
    pub password: String,
    /// The application id issued for this integration.
    pub application_id: Uuid,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("application_id", &self.application_id)
            .finish()
    }
}

/// Locations of the individual SOAP services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoints {
    pub base_url: String,
}

impl ServiceEndpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn authenticate(&self) -> String {
        format!("{}/authenticate/v001/authenticate.asmx", self.base_url)
    }

    pub fn client_service(&self) -> String {
        format!("{}/CRM/Client/V001/ClientService.asmx", self.base_url)
    }

    pub fn person_service(&self) -> String {
        format!("{}/CRM/Contact/PersonService.asmx", self.base_url)
    }

    pub fn invoice_service(&self) -> String {
        format!("{}/Economy/InvoiceOrder/V001/InvoiceService.asmx", self.base_url)
    }
}

impl Default for ServiceEndpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Everything parsed out of the host connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub credentials: Credentials,
    pub endpoints: ServiceEndpoints,
    pub timeout: Duration,
    pub session_ttl: Duration,
}

impl ConnectionSettings {
    /// Parses and validates a connection string such as
    /// `Username=u;Password=p;ApplicationId=<uuid>`.
    ///
    /// Keys are matched case-insensitively after trimming. Unknown keys are
    /// ignored and a repeated key keeps its last value.
    pub fn parse(connection_string: &str) -> Result<Self> {
        let mut username: Option<String> = None;
        let mut password: Option<String> = None;
        let mut application_id: Option<Uuid> = None;
        let mut endpoints = ServiceEndpoints::default();
        let mut timeout = DEFAULT_TIMEOUT;
        let mut session_ttl = DEFAULT_SESSION_TTL;

        for (key, value) in split_configuration_string(connection_string) {
            match key.trim().to_lowercase().as_str() {
                "username" => username = Some(value),
                "password" => password = Some(value),
                "applicationid" => {
                    let id = Uuid::parse_str(value.trim()).map_err(|_| {
                        Error::ConfigError("The application Id was not a valid GUID.".to_string())
                    })?;
                    application_id = Some(id);
                }
                "baseurl" => endpoints = ServiceEndpoints::new(value.trim()),
                "timeout" => timeout = Duration::from_secs(parse_number(&key, &value)?),
                "sessionttl" => {
                    let minutes = parse_number(&key, &value)?;
                    let seconds = minutes.checked_mul(60).ok_or_else(|| {
                        Error::ConfigError(format!(
                            "The sessionttl value ({}) is too large.",
                            value.trim()
                        ))
                    })?;
                    session_ttl = Duration::from_secs(seconds);
                }
                other => debug!("Ignoring unknown connection string key: {}", other),
            }
        }

        let username = username
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| missing("username"))?;
        let password = password
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| missing("password"))?;
        let application_id = application_id
            .filter(|id| !id.is_nil())
            .ok_or_else(|| missing("application Id"))?;

        Ok(Self {
            credentials: Credentials {
                username,
                password,
                application_id,
            },
            endpoints,
            timeout,
            session_ttl,
        })
    }
}

fn missing(what: &str) -> Error {
    Error::ConfigError(format!("The {what} must be provided in the connection string."))
}

fn parse_number(key: &str, value: &str) -> Result<u64> {
    value.trim().parse::<u64>().map_err(|_| {
        Error::ConfigError(format!(
            "The {} value ({}) must be a whole number.",
            key.trim(),
            value
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const APP_ID: &str = "11111111-1111-1111-1111-111111111111";

    #[test]
    fn test_parse_valid_connection_string() {
        let settings = ConnectionSettings::parse(&format!(
            "Username=u;Password=p;ApplicationId={APP_ID}"
        ))
        .unwrap();

        assert_eq!(settings.credentials.username, "u");
        assert_eq!(settings.credentials.password, "p");
        assert_eq!(settings.credentials.application_id.to_string(), APP_ID);
        assert_eq!(settings.endpoints, ServiceEndpoints::default());
        assert_eq!(settings.timeout, DEFAULT_TIMEOUT);
        assert_eq!(settings.session_ttl, DEFAULT_SESSION_TTL);
    }

    #[test]
    fn test_keys_are_case_insensitive_and_trimmed() {
        let settings = ConnectionSettings::parse(&format!(
            " USERNAME =u; password=p=q ;applicationID={APP_ID}"
        ))
        .unwrap();

        assert_eq!(settings.credentials.username, "u");
        // Value containing the delimiter is kept intact
        assert_eq!(settings.credentials.password, "p=q");
    }

    #[test]
    fn test_missing_password_fails() {
        let err = ConnectionSettings::parse(&format!("Username=u;ApplicationId={APP_ID}"))
            .unwrap_err();
        assert!(matches!(err, Error::ConfigError(ref msg) if msg.contains("password")));
    }

    #[test]
    fn test_blank_username_fails() {
        let err = ConnectionSettings::parse(&format!(
            "Username= ;Password=p;ApplicationId={APP_ID}"
        ))
        .unwrap_err();
        assert!(matches!(err, Error::ConfigError(ref msg) if msg.contains("username")));
    }

    #[test]
    fn test_invalid_application_id_fails() {
        let err = ConnectionSettings::parse("Username=u;Password=p;ApplicationId=not-a-guid")
            .unwrap_err();
        assert!(matches!(err, Error::ConfigError(ref msg) if msg.contains("GUID")));
    }

    #[test]
    fn test_nil_or_missing_application_id_fails() {
        let nil = "00000000-0000-0000-0000-000000000000";
        for input in [
            "Username=u;Password=p".to_string(),
            format!("Username=u;Password=p;ApplicationId={nil}"),
        ] {
            let err = ConnectionSettings::parse(&input).unwrap_err();
            assert!(matches!(err, Error::ConfigError(ref msg) if msg.contains("application Id")));
        }
    }

    #[test]
    fn test_optional_keys() {
        let settings = ConnectionSettings::parse(&format!(
            "Username=u;Password=p;ApplicationId={APP_ID};BaseUrl=http://localhost:8080/;Timeout=5;SessionTtl=2;Extra"
        ))
        .unwrap();

        assert_eq!(settings.endpoints.base_url, "http://localhost:8080");
        assert_eq!(
            settings.endpoints.client_service(),
            "http://localhost:8080/CRM/Client/V001/ClientService.asmx"
        );
        assert_eq!(settings.timeout, Duration::from_secs(5));
        assert_eq!(settings.session_ttl, Duration::from_secs(120));
    }

    #[test]
    fn test_non_numeric_timeout_fails() {
        let err = ConnectionSettings::parse(&format!(
            "Username=u;Password=p;ApplicationId={APP_ID};timeout=soon"
        ))
        .unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn test_session_ttl_in_minutes() {
        let settings = ConnectionSettings::parse(&format!(
            "Username=u;Password=p;ApplicationId={APP_ID};SessionTtl=5"
        ))
        .unwrap();
        assert_eq!(settings.session_ttl, Duration::from_secs(300));
    }

    #[test]
    fn test_oversized_session_ttl_fails() {
        let err = ConnectionSettings::parse(&format!(
            "Username=u;Password=p;ApplicationId={APP_ID};SessionTtl=18446744073709551615"
        ))
        .unwrap_err();
        assert!(matches!(err, Error::ConfigError(ref msg) if msg.contains("too large")));
    }

    #[test]
    fn test_debug_redacts_password() {
        let settings = ConnectionSettings::parse(&format!(
            "Username=u;Password=hunter2;ApplicationId={APP_ID}"
        ))
        .unwrap();
        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
