//! reqwest-backed transport.

use log::debug;
use reqwest::blocking::Client;

use crate::config::ClientConfig;
use crate::errors::Result;

use super::{HttpResponse, Transport};

/// Blocking HTTP transport built on `reqwest::blocking::Client`.
///
/// The only place a timeout is applied; the resolver core itself never
/// imposes one.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with the default configuration.
    pub fn new() -> Result<Self> {
        Self::from_config(&ClientConfig::default())
    }

    /// Create a transport with the timeout and user agent of `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        // reqwest's blocking client defaults to 30s, so "no timeout" must be explicit.
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client })
    }

    /// Wrap an already configured client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        debug!("CIR request: {}", url);

        let response = self.client.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?.to_vec();

        debug!("CIR response ({}): {} bytes", status, body.len());
        Ok(HttpResponse { status, body })
    }
}
