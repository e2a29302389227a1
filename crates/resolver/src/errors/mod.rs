//! Error types for the resolver crate.
//!
//! This module provides [`CirError`], the single error enum returned by every
//! fallible operation, and the crate-wide [`Result`] alias.
//!
//! "No result" is never an error: the service answering with zero `data`
//! records surfaces as an empty result list or `Ok(None)`.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for resolver operations.
pub type Result<T> = std::result::Result<T, CirError>;

/// Errors that can occur while talking to the resolver service.
#[derive(Error, Debug)]
pub enum CirError {
    /// The service answered with a non-success HTTP status.
    /// Propagated as-is; requests are never retried.
    #[error("Request failed with HTTP {status}: {url}")]
    RequestFailed {
        /// The HTTP status code returned by the service
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The response body could not be interpreted as an XML result document.
    #[error("Unparseable response: {0}")]
    UnparseableResponse(String),

    /// A download target already exists and overwriting was not requested.
    /// Raised before anything is written.
    #[error("{} already exists, pass overwrite to replace it", path.display())]
    FileExists {
        /// The path that was going to be written
        path: PathBuf,
    },

    /// A configuration value could not be used.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The request could not be completed (DNS, TLS, connection, timeout).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A local filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CirError {
    /// Create a request failure from a status code and URL
    pub fn request_failed(status: u16, url: impl Into<String>) -> Self {
        Self::RequestFailed {
            status,
            url: url.into(),
        }
    }

    /// Create an unparseable response error
    pub fn unparseable(message: impl Into<String>) -> Self {
        Self::UnparseableResponse(message.into())
    }

    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Returns the HTTP status code for [`CirError::RequestFailed`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cir_resolver::errors::CirError;
    ///
    /// let error = CirError::request_failed(500, "https://example.org/x/smiles/xml");
    /// assert_eq!(error.status(), Some(500));
    /// ```
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the service reported the resource as missing (HTTP 404).
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
