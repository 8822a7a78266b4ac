//! Client configuration
//!
//! Configuration is built programmatically or picked up from the standard
//! `NOMAD_ADDR` / `NOMAD_REGION` / `NOMAD_TOKEN` environment variables.

use std::time::Duration;

use crate::error::{Error, Result};
use crate::http::RetryPolicy;

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Interval between deployment health probes
pub const DEPLOYMENT_POLL_INTERVAL_SECS: u64 = 5;

/// Configuration for a [`NomadClient`](crate::NomadClient)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base address of the control plane (e.g., "http://127.0.0.1:4646")
    pub address: String,

    /// Region to forward as a query parameter on every request
    pub region: Option<String>,

    /// ACL token, sent as the `X-Nomad-Token` header
    pub token: Option<String>,

    /// Accept self-signed certificates (test clusters only)
    pub accept_invalid_certs: bool,

    /// Per-request timeout
    pub timeout: Duration,

    /// Default retry policy applied to every request
    pub retry: RetryPolicy,

    /// Sleep between deployment health probes
    pub poll_interval: Duration,
}

impl ClientConfig {
    /// Create a config pointing at the given control plane address
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            region: None,
            token: None,
            accept_invalid_certs: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retry: RetryPolicy::default(),
            poll_interval: Duration::from_secs(DEPLOYMENT_POLL_INTERVAL_SECS),
        }
    }

    /// Build a config from `NOMAD_ADDR`, `NOMAD_REGION` and `NOMAD_TOKEN`
    pub fn from_env() -> Result<Self> {
        let address = std::env::var("NOMAD_ADDR")
            .map_err(|_| Error::Config("NOMAD_ADDR is not set".to_string()))?;
        let mut config = Self::new(address);
        if let Ok(region) = std::env::var("NOMAD_REGION") {
            config.region = Some(region);
        }
        if let Ok(token) = std::env::var("NOMAD_TOKEN") {
            config.token = Some(token);
        }
        Ok(config)
    }

    /// Set the region
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the ACL token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Accept self-signed certificates
    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the default retry policy
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Set the deployment poll interval
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// API base URL: `<address>/v1/` regardless of trailing slash
    pub(crate) fn base_url(&self) -> String {
        if self.address.ends_with('/') {
            format!("{}v1/", self.address)
        } else {
            format!("{}/v1/", self.address)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new("http://127.0.0.1:4646")
            .with_region("global")
            .with_token("secret")
            .with_timeout(Duration::from_secs(30));

        assert_eq!(config.address, "http://127.0.0.1:4646");
        assert_eq!(config.region.as_deref(), Some("global"));
        assert_eq!(config.token.as_deref(), Some("secret"));
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_base_url_normalization() {
        let config = ClientConfig::new("http://127.0.0.1:4646");
        assert_eq!(config.base_url(), "http://127.0.0.1:4646/v1/");

        let config = ClientConfig::new("http://127.0.0.1:4646/");
        assert_eq!(config.base_url(), "http://127.0.0.1:4646/v1/");
    }

    #[test]
    fn test_from_env_requires_address() {
        std::env::remove_var("NOMAD_ADDR");
        let result = ClientConfig::from_env();
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
