//! Client configuration.
//!
//! Defaults target the public NCI/CADD service. Every value can be overridden
//! from the environment:
//!
//! | Variable           | Meaning                                  |
//! |--------------------|------------------------------------------|
//! | `CIR_API_BASE`     | Base URL of the structure endpoint       |
//! | `CIR_TIMEOUT_SECS` | Per-request timeout, `0` disables it     |
//! | `CIR_USER_AGENT`   | User agent sent with every request       |

use std::time::Duration;

use crate::errors::{CirError, Result};
use crate::url_builder::API_BASE;

/// Default timeout for resolver requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_API_BASE: &str = "CIR_API_BASE";
pub const ENV_TIMEOUT_SECS: &str = "CIR_TIMEOUT_SECS";
pub const ENV_USER_AGENT: &str = "CIR_USER_AGENT";

/// Settings shared by a client and its HTTP transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the structure endpoint, without trailing slash
    pub base_url: String,

    /// Per-request timeout applied by the transport (`None` waits forever)
    pub timeout: Option<Duration>,

    /// User agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE.to_string(),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            user_agent: format!("cir-resolver/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `CIR_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup(ENV_API_BASE).filter(|v| !v.trim().is_empty()) {
            config = config.with_base_url(base_url.trim());
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                CirError::invalid_config(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    ENV_TIMEOUT_SECS, raw
                ))
            })?;
            config.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }

        if let Some(user_agent) = lookup(ENV_USER_AGENT).filter(|v| !v.trim().is_empty()) {
            config.user_agent = user_agent;
        }

        Ok(config)
    }

    /// Set the base URL. Trailing slashes are dropped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://cactus.nci.nih.gov/chemical/structure");
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert!(config.user_agent.starts_with("cir-resolver/"));
    }

    #[test]
    fn test_empty_environment_keeps_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_environment_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("CIR_API_BASE", "http://localhost:8080/structure/"),
            ("CIR_TIMEOUT_SECS", "5"),
            ("CIR_USER_AGENT", "lab-pipeline/2.0"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:8080/structure");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.user_agent, "lab-pipeline/2.0");
    }

    #[test]
    fn test_zero_timeout_disables_it() {
        let config = ClientConfig::from_lookup(lookup(&[("CIR_TIMEOUT_SECS", "0")])).unwrap();
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        let err = ClientConfig::from_lookup(lookup(&[("CIR_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(matches!(err, CirError::InvalidConfig(_)));
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("CIR_API_BASE", "  "),
            ("CIR_USER_AGENT", ""),
        ]))
        .unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_builder_trims_base_url() {
        let config = ClientConfig::default()
            .with_base_url("https://mirror.example.org/chemical/structure//")
            .with_timeout(None)
            .with_user_agent("test");
        assert_eq!(config.base_url, "https://mirror.example.org/chemical/structure");
        assert_eq!(config.timeout, None);
        assert_eq!(config.user_agent, "test");
    }
}
