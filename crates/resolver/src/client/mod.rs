//! The resolver client.
//!
//! [`CirClient`] ties the pipeline together:
//!
//! ```text
//! ResolutionRequest ──▶ build_url ──▶ Transport::get ──▶ parse_response ──▶ Vec<ResolutionResult>
//!                                                                              │
//!                                                              resolve ◀───────┘ (first value)
//! ```
//!
//! Every call performs at most one blocking GET. Nothing is retried and no
//! failure is turned into "no result": a non-success status surfaces as
//! [`CirError::RequestFailed`], an unreadable body as
//! [`CirError::UnparseableResponse`].

mod download;
mod image;


use std::borrow::Cow;
use std::path::Path;

use log::{debug, warn};

pub use download::DownloadOutcome;
pub use image::{ImageFormat, ImageOptions, SymbolMode};

use crate::config::ClientConfig;
use crate::errors::{CirError, Result};
use crate::models::{ResolutionRequest, ResolutionResult, ResolvedValue, IMAGE_REPRESENTATION};
use crate::parser::parse_response;
use crate::transport::{HttpTransport, Transport};
use crate::url_builder::build_url;

/// Client for the Chemical Identifier Resolver.
///
/// Generic over the [`Transport`] so tests can run without a network.
#[derive(Clone, Debug)]
pub struct CirClient<T = HttpTransport> {
    transport: T,
    base_url: String,
}

impl CirClient<HttpTransport> {
    /// Create a client for the public service with default settings.
    pub fn new() -> Result<Self> {
        Self::from_config(&ClientConfig::default())
    }

    /// Create a client configured from `CIR_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_config(&ClientConfig::from_env()?)
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let transport = HttpTransport::from_config(config)?;
        Ok(Self::with_transport(transport, &config.base_url))
    }
}

impl<T: Transport> CirClient<T> {
    /// Create a client sending requests through `transport`.
    pub fn with_transport(transport: T, base_url: &str) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The URL `request` would be sent to.
    pub fn url(&self, request: &ResolutionRequest) -> String {
        build_url(&self.base_url, request)
    }

    /// Fetch all results for a request, in the service's resolver-priority order.
    ///
    /// The XML wrapper is always requested, whatever `request.xml` says.
    pub fn query(&self, request: &ResolutionRequest) -> Result<Vec<ResolutionResult>> {
        let request = if request.xml {
            Cow::Borrowed(request)
        } else {
            Cow::Owned(request.clone().with_xml(true))
        };

        let body = self.fetch(&self.url(&request))?;
        parse_response(&body, &request.identifier, &request.representation)
    }

    /// Resolve to the top-priority value, or `None` when the service has no answer.
    ///
    /// Tautomer expansion is always turned off here: with several tautomers
    /// in the answer, "the first value" has no useful meaning. Use
    /// [`query`](Self::query) to get every tautomer.
    pub fn resolve(&self, request: &ResolutionRequest) -> Result<Option<ResolvedValue>> {
        let request = if request.tautomers {
            debug!(
                "Ignoring tautomer expansion for resolve('{}')",
                request.identifier
            );
            Cow::Owned(request.clone().with_tautomers(false))
        } else {
            Cow::Borrowed(request)
        };

        let results = self.query(&request)?;
        Ok(results.into_iter().next().map(|result| result.value))
    }

    /// Fetch a rendered structure image. The body is returned unparsed.
    pub fn resolve_image<S: AsRef<str>>(
        &self,
        identifier: &str,
        resolvers: &[S],
        options: &ImageOptions,
    ) -> Result<Vec<u8>> {
        let request = image_request(identifier, resolvers, options);
        self.fetch(&self.url(&request))
    }

    /// Resolve `request` and write the value to `path` as text.
    ///
    /// Without `overwrite`, an existing `path` fails with
    /// [`CirError::FileExists`] before any request is made. When the service
    /// has no answer nothing is written and [`DownloadOutcome::NoResult`] is
    /// returned. Multiple values are written one per line; the file always
    /// ends with a single newline.
    pub fn download(
        &self,
        request: &ResolutionRequest,
        path: impl AsRef<Path>,
        overwrite: bool,
    ) -> Result<DownloadOutcome> {
        let path = path.as_ref();
        download::ensure_writable(path, overwrite)?;

        match self.resolve(request)? {
            Some(value) => download::write_text(path, &value.to_string(), overwrite),
            None => {
                warn!(
                    "No {} result for '{}', nothing written to {}",
                    request.representation,
                    request.identifier,
                    path.display()
                );
                Ok(DownloadOutcome::NoResult)
            }
        }
    }

    /// Fetch a rendered image and write it to `path`.
    pub fn download_image<S: AsRef<str>>(
        &self,
        identifier: &str,
        resolvers: &[S],
        options: &ImageOptions,
        path: impl AsRef<Path>,
        overwrite: bool,
    ) -> Result<DownloadOutcome> {
        let path = path.as_ref();
        download::ensure_writable(path, overwrite)?;

        let image = self.resolve_image(identifier, resolvers, options)?;
        download::write_bytes(path, &image, overwrite)
    }

    /// One GET; anything but a 2xx status is an error.
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.transport.get(url)?;

        if !response.is_success() {
            warn!("CIR request failed with HTTP {}: {}", response.status, url);
            return Err(CirError::request_failed(response.status, url));
        }
        Ok(response.body)
    }
}

/// The request behind an image: `image` endpoint, no XML wrapper.
pub(crate) fn image_request<S: AsRef<str>>(
    identifier: &str,
    resolvers: &[S],
    options: &ImageOptions,
) -> ResolutionRequest {
    ResolutionRequest::new(identifier, IMAGE_REPRESENTATION)
        .with_resolvers(resolvers.iter().map(|r| r.as_ref().to_string()))
        .with_xml(false)
        .with_options(&options.to_query_options())
}
