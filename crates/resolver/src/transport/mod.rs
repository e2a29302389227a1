//! HTTP transport abstraction.
//!
//! The resolver performs exactly one blocking GET per call. The transport is
//! the only I/O seam, so tests swap in an in-memory implementation.
//!
//! - [`Transport`] - the trait every transport implements
//! - [`HttpResponse`] - status code and raw body of one GET
//! - [`HttpTransport`] - the production implementation backed by reqwest

mod http;

use std::sync::Arc;

pub use http::HttpTransport;

use crate::errors::Result;

/// Status and raw body of one GET request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,

    /// Undecoded response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A blocking HTTP GET.
///
/// Implementations return every response they receive, successful or not;
/// status handling belongs to the caller. An `Err` means no response was
/// obtained at all (DNS, TLS, connection, timeout).
pub trait Transport {
    /// Perform a GET request against `url`.
    fn get(&self, url: &str) -> Result<HttpResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        (**self).get(url)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        (**self).get(url)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        (**self).get(url)
    }
}
