//! HTTP execution wrapper
//!
//! Builds requests from a fluent descriptor, applies retry-with-backoff on
//! transport failures and dispatches response parsing based on the result
//! the caller asked for: decoded object, optional object (404 maps to
//! `None`), body string or the raw response.

mod retry;

pub use retry::RetryPolicy;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// Shared HTTP layer underneath all endpoint groups
#[derive(Debug)]
pub(crate) struct Http {
    client: reqwest::Client,
    base_url: String,
    region: Option<String>,
    retry: RetryPolicy,
    pub(crate) poll_interval: Duration,
}

impl Http {
    pub(crate) fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = &config.token {
            let value = HeaderValue::from_str(token)
                .map_err(|e| Error::Config(format!("invalid auth token: {}", e)))?;
            headers.insert("X-Nomad-Token", value);
        }

        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers);
        if config.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url(),
            region: config.region.clone(),
            retry: config.retry,
            poll_interval: config.poll_interval,
        })
    }

    /// Start a request descriptor for a path under the API base URL
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestSpec<'_> {
        let url = format!("{}{}", self.base_url, path);
        let mut inner = self.client.request(method, &url);
        if let Some(region) = &self.region {
            inner = inner.query(&[("region", region)]);
        }
        RequestSpec {
            http: self,
            inner,
            retry: self.retry,
        }
    }

    pub(crate) fn get(&self, path: &str) -> RequestSpec<'_> {
        self.request(Method::GET, path)
    }

    pub(crate) fn post(&self, path: &str) -> RequestSpec<'_> {
        self.request(Method::POST, path)
    }

    pub(crate) fn put(&self, path: &str) -> RequestSpec<'_> {
        self.request(Method::PUT, path)
    }

    pub(crate) fn delete(&self, path: &str) -> RequestSpec<'_> {
        self.request(Method::DELETE, path)
    }
}

/// Fluent descriptor for a single request
pub(crate) struct RequestSpec<'a> {
    http: &'a Http,
    inner: reqwest::RequestBuilder,
    retry: RetryPolicy,
}

impl RequestSpec<'_> {
    /// Append a query parameter
    pub(crate) fn query(mut self, name: &str, value: impl ToString) -> Self {
        self.inner = self.inner.query(&[(name, value.to_string())]);
        self
    }

    /// Append a query parameter when the value is set
    pub(crate) fn query_opt(self, name: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    /// Attach a JSON body
    pub(crate) fn json(mut self, body: &impl Serialize) -> Self {
        self.inner = self.inner.json(body);
        self
    }

    /// Execute the request, retrying transport failures per the policy
    ///
    /// Makes up to `times - 1` guarded attempts with backoff sleeps in
    /// between, then a final attempt whose error propagates. A received
    /// response, whatever its status, is never retried.
    pub(crate) async fn send(self) -> Result<reqwest::Response> {
        let Self { http, inner, retry } = self;
        let request = inner.build()?;
        debug!("{} {}", request.method(), request.url());

        let mut delays = retry.delays();
        for attempt in 1..retry.times {
            let Some(guarded) = request.try_clone() else {
                break;
            };
            match http.client.execute(guarded).await {
                Ok(response) => return Ok(response),
                Err(err) => {
                    warn!("attempt {}/{} failed: {}", attempt, retry.times, err);
                }
            }
            if let Some(delay) = delays.next() {
                tokio::time::sleep(delay).await;
            }
        }
        Ok(http.client.execute(request).await?)
    }

    /// Execute and decode the response body into `T`
    pub(crate) async fn recv<T: DeserializeOwned>(self) -> Result<T> {
        let response = self.send().await?;
        let text = read_success_body(response).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Execute and decode, mapping 404 (and a `null` body) to `None`
    pub(crate) async fn recv_optional<T: DeserializeOwned>(self) -> Result<Option<T>> {
        let response = self.send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let text = read_success_body(response).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Execute and return the response body as a string
    pub(crate) async fn recv_string(self) -> Result<String> {
        let response = self.send().await?;
        read_success_body(response).await
    }

    /// Execute and hand back the raw response without status checks
    pub(crate) async fn recv_response(self) -> Result<reqwest::Response> {
        self.send().await
    }

    /// Execute, check the status and discard the body
    pub(crate) async fn recv_unit(self) -> Result<()> {
        let response = self.send().await?;
        read_success_body(response).await?;
        Ok(())
    }
}

/// Reject non-success statuses, then read the body text
async fn read_success_body(response: reqwest::Response) -> Result<String> {
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(Error::UnexpectedStatus {
            status: status.as_u16(),
            message,
        });
    }
    let text = response.text().await?;
    trace!("response body: {}", text);
    Ok(text)
}
