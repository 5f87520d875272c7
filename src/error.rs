//! Error types for the Some Random API client.
//!
//! Errors fall into three groups: invalid caller input (raised before any
//! request is sent), record validation failures, and transport failures.
//! Transport errors keep the raw response body, status and headers so they can
//! be inspected without re-issuing the call.

use http::{HeaderMap, StatusCode};

/// The main error type for the client.
///
/// # Examples
///
/// ```no_run
/// use somerandomapi::{Client, Error};
///
/// # async fn example() -> Result<(), Error> {
/// let client = Client::builder().build()?;
///
/// match client.animal().get_fact("dog").await {
///     Ok(fact) => println!("{fact}"),
///     Err(Error::InvalidChoice { value, valid, .. }) => {
///         eprintln!("{value} is not one of {}", valid.join(", "));
///     }
///     Err(Error::HttpError { status, raw_response, .. }) => {
///         eprintln!("HTTP error {}: {}", status, raw_response);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A text value did not name any member of the expected category.
    #[error(
        "'{parameter}' must be an instance of `{category}` or one of {}, not {value:?}",
        .valid.join(", ")
    )]
    InvalidChoice {
        /// Name of the facade argument that was rejected
        parameter: &'static str,
        /// Category type name, e.g. `Animal`
        category: &'static str,
        /// The offending value as supplied
        value: String,
        /// Every canonical member of the category
        valid: Vec<&'static str>,
    },

    /// A dynamic value was neither the canonical category nor text.
    #[error("'{parameter}' must be either {expected}, not {found}")]
    WrongType {
        /// Name of the facade argument that was rejected
        parameter: &'static str,
        /// Human readable list of accepted types
        expected: String,
        /// The JSON type that was received
        found: &'static str,
    },

    /// An endpoint was called without one of its required parameters.
    #[error("Missing required parameter '{param}' for {path}")]
    MissingParameter {
        /// Endpoint path
        path: &'static str,
        /// Wire name of the missing parameter
        param: &'static str,
    },

    /// Wire data for a record lacked a required key.
    #[error("{record} is missing required field '{field}'")]
    MissingField {
        /// Record type name
        record: &'static str,
        /// Public field name
        field: &'static str,
    },

    /// A record field failed its length or format constraint.
    #[error("Invalid {record}.{field}: expected {constraint}, got {value:?}")]
    ValidationFailed {
        /// Record type name
        record: &'static str,
        /// Public field name
        field: &'static str,
        /// Description of the violated constraint
        constraint: String,
        /// The offending value
        value: String,
    },

    /// Wire data could not be shaped into a record at all.
    #[error("Invalid {record}: {detail}")]
    InvalidRecord {
        /// Record type name
        record: &'static str,
        /// What went wrong
        detail: String,
    },

    /// A network-level error occurred (connection failed, DNS lookup failed, etc.).
    #[error("Network error: {0}")]
    Network(reqwest::Error),

    /// The request timed out.
    #[error("Request timed out")]
    Timeout,

    /// Failed to deserialize the response body into the expected type.
    ///
    /// Both the raw body and the serde message are kept for debugging.
    #[error("Failed to deserialize response (status {status}): {serde_error}")]
    DeserializationFailed {
        /// The raw response body that failed to deserialize
        raw_response: String,
        /// The serde error message
        serde_error: String,
        /// The HTTP status code
        status: StatusCode,
    },

    /// The server returned a non-2xx HTTP status code.
    #[error("HTTP error {status}: {raw_response}")]
    HttpError {
        /// The HTTP status code
        status: StatusCode,
        /// The raw response body
        raw_response: String,
        /// The response headers
        headers: HeaderMap,
        /// Rate limit information parsed from headers
        rate_limit_info: Option<crate::rate_limit::RateLimitInfo>,
    },

    /// Invalid configuration was provided, such as a bad header value.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Failed to serialize request parameters.
    #[error("Failed to serialize request: {0}")]
    SerializationFailed(String),

    /// An invalid URL was provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else {
            Error::Network(err)
        }
    }
}

impl Error {
    /// Returns `true` if the caller supplied a value that was rejected before
    /// any request was made.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::InvalidChoice { .. } | Error::WrongType { .. } | Error::MissingParameter { .. }
        )
    }

    /// Returns `true` if a record failed to construct.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MissingField { .. } | Error::ValidationFailed { .. } | Error::InvalidRecord { .. }
        )
    }

    /// Returns `true` if the failure came from the network or the remote service.
    ///
    /// ```
    /// use somerandomapi::Error;
    /// use http::StatusCode;
    ///
    /// let err = Error::HttpError {
    ///     status: StatusCode::NOT_FOUND,
    ///     raw_response: "{\"error\":\"not found\"}".to_string(),
    ///     headers: http::HeaderMap::new(),
    ///     rate_limit_info: None,
    /// };
    /// assert!(err.is_transport());
    /// assert!(!err.is_invalid_input());
    /// ```
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Network(_)
                | Error::Timeout
                | Error::HttpError { .. }
                | Error::DeserializationFailed { .. }
        )
    }

    /// Returns the HTTP status code if this error has one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::HttpError { status, .. } => Some(*status),
            Error::DeserializationFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the raw response body if this error has one.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Error::HttpError { raw_response, .. } => Some(raw_response),
            Error::DeserializationFailed { raw_response, .. } => Some(raw_response),
            _ => None,
        }
    }

    /// Returns rate limit information if the server sent any.
    pub fn rate_limit_info(&self) -> Option<&crate::rate_limit::RateLimitInfo> {
        match self {
            Error::HttpError {
                rate_limit_info, ..
            } => rate_limit_info.as_ref(),
            _ => None,
        }
    }

    /// How long the server asked callers to wait, capped at `max_wait`.
    ///
    /// The client never waits on its own; this is for callers that want to
    /// schedule their next call.
    pub fn rate_limit_delay(
        &self,
        max_wait: std::time::Duration,
    ) -> Option<std::time::Duration> {
        self.rate_limit_info()?.delay(max_wait)
    }
}

/// A specialized `Result` type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
