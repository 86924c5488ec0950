use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, COOKIE};
use tracing::debug;

use super::xml::fault_message;
use crate::error::{Error, Result};
use crate::interfaces::SessionToken;

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "ASP.NET_SessionId";

/// A single SOAP call
#[derive(Debug, Clone)]
pub struct SoapRequest {
    pub url: String,
    pub action: String,
    pub body: String,
    pub session: Option<SessionToken>,
}

/// Delivers SOAP envelopes and returns the raw response body
pub trait SoapTransport {
    fn call(&self, request: &SoapRequest) -> Result<String>;
}

/// Blocking HTTP transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl SoapTransport for HttpTransport {
    fn call(&self, request: &SoapRequest) -> Result<String> {
        debug!("POST {} ({})", request.url, request.action);

        let mut builder = self
            .client
            .post(&request.url)
            .header(CONTENT_TYPE, "text/xml; charset=utf-8")
            .header("SOAPAction", format!("\"{}\"", request.action))
            .body(request.body.clone());
        if let Some(token) = &request.session {
            builder = builder.header(COOKIE, format!("{SESSION_COOKIE}={}", token.as_str()));
        }

        let response = builder.send()?;
        let status_error = response.error_for_status_ref().err();
        let body = response.text()?;

        match status_error {
            None => Ok(body),
            // Faults come back as HTTP 500 with the details in the body
            Some(err) => match fault_message(&body) {
                Some(message) => Err(Error::SoapFault(message)),
                None => Err(err.into()),
            },
        }
    }
}
