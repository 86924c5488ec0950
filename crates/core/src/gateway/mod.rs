//! SOAP implementation of the entity fetch gateway

pub mod session;
pub mod soap;
pub mod transport;
pub mod xml;

pub use session::Session;
pub use soap::{SERVICE_NAMESPACE, SoapGateway, SoapGatewayBuilder};
pub use transport::{HttpTransport, SESSION_COOKIE, SoapRequest, SoapTransport};
