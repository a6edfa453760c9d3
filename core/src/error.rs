use std::fmt;
use thiserror::Error;

/// The error type for MeSomb operations
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    code: Option<String>,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The application, provider or fund key is not recognized (HTTP 404)
    ServiceNotFound,

    /// Credentials or signature rejected (HTTP 401, 403)
    PermissionDenied,

    /// The API refused the request content (HTTP 400)
    InvalidClientRequest,

    /// Any other API failure with status >= 400
    ServerError,

    /// The request URL could not be parsed for signing
    MalformedUrl,

    /// The digest or HMAC primitive could not be initialized
    CryptoUnavailable,

    /// A successful response body does not match the expected model
    MalformedResponse,

    /// Configuration error (missing keys, invalid values)
    ConfigInvalid,

    /// Request cannot be built (invalid header value, etc.)
    RequestInvalid,

    /// Unexpected errors (network, I/O, etc.)
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            code: None,
            source: None,
        }
    }

    /// Attach the machine readable code returned by the API
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the human readable message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the machine readable code, if the API sent one
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Check if this error was classified from an API response
    pub fn is_api_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::ServiceNotFound
                | ErrorKind::PermissionDenied
                | ErrorKind::InvalidClientRequest
                | ErrorKind::ServerError
        )
    }
}

// Convenience constructors
impl Error {
    /// Create a service not found error
    pub fn service_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ServiceNotFound, message)
    }

    /// Create a permission denied error
    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::PermissionDenied, message)
    }

    /// Create an invalid client request error
    pub fn invalid_client_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidClientRequest, message)
    }

    /// Create a server error
    pub fn server_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ServerError, message)
    }

    /// Create a malformed url error
    pub fn malformed_url(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedUrl, message)
    }

    /// Create a crypto unavailable error
    pub fn crypto_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CryptoUnavailable, message)
    }

    /// Create a malformed response error
    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedResponse, message)
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::ServiceNotFound => write!(f, "service not found"),
            ErrorKind::PermissionDenied => write!(f, "permission denied"),
            ErrorKind::InvalidClientRequest => write!(f, "invalid client request"),
            ErrorKind::ServerError => write!(f, "server error"),
            ErrorKind::MalformedUrl => write!(f, "malformed url"),
            ErrorKind::CryptoUnavailable => write!(f, "crypto unavailable"),
            ErrorKind::MalformedResponse => write!(f, "malformed response"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderName> for Error {
    fn from(err: http::header::InvalidHeaderName) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::malformed_url(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::malformed_response(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
