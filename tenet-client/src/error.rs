//! Error types for the Tenet client

use thiserror::Error;

/// Errors that can occur when using the Tenet client
#[derive(Error, Debug)]
pub enum TenetError {
    /// Missing or empty credentials at construction time
    #[error("Invalid credentials: {0}")]
    Validation(String),

    /// Transport failure: connection error, timeout or non-2xx status
    #[error("Bad request: {0}")]
    BadRequest(#[source] reqwest::Error),

    /// The API answered with a non-OK result
    #[error("Server error: {0}")]
    ServerError(String),

    /// Response body is not a well-formed XML document
    #[error("Failed to parse XML response: {0}")]
    Xml(String),

    /// A tag required by the endpoint is absent from an OK response
    #[error("Missing field in response: {0}")]
    MissingField(&'static str),

    /// A field is present but cannot be decoded
    #[error("Invalid value {value:?} for field {field}")]
    InvalidField {
        /// Tag name of the offending field
        field: &'static str,
        /// Raw text received from the server
        value: String,
    },

    /// Base URL cannot be parsed or cannot carry the endpoint paths
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Client initialization failed
    #[error("Client initialization failed: {0}")]
    ClientInit(String),
}

impl TenetError {
    /// HTTP status carried by a transport failure, if any
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            TenetError::BadRequest(e) => e.status(),
            _ => None,
        }
    }
}
