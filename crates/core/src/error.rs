/// Errors that can occur while serving data to the host
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("The type element of the select statement ({value}) was invalid. Can be: {expected}")]
    UnsupportedEntityKind { value: String, expected: String },

    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("The column name cannot be empty or whitespace")]
    InvalidColumnName,

    #[error("Type not configured in select statement or not supported")]
    NotConfigured,

    #[error("Transport error: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("SOAP fault: {0}")]
    SoapFault(String),

    #[error("XML error: {0}")]
    XmlError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for data source operations
pub type Result<T> = std::result::Result<T, Error>;
