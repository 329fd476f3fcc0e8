//! The niceday-api client and builder.

use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::actions::{MessageActions, ProfileActions, TrackerActions};
use crate::error::{Error, Result};
use crate::response::extract_json;
use crate::types::Acknowledgement;

/// Default URL for the niceday-api.
pub const DEFAULT_URL: &str = "http://localhost:8080/";

/// The main client for interacting with the niceday-api.
///
/// Holds only the HTTP transport and the base URL; every call issues exactly
/// one request and there is no retry.
///
/// # Example
///
/// ```no_run
/// use niceday::NicedayClient;
///
/// # async fn example() -> niceday::Result<()> {
/// let client = NicedayClient::new();
///
/// let profile = client.profiles().get(38527).await?;
/// println!("{:?} {:?}", profile.first_name(), profile.last_name());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct NicedayClient {
    http_client: Client,
    base_url: String,
}

impl NicedayClient {
    /// Create a new client for `http://localhost:8080/`.
    pub fn new() -> Self {
        Self::with_url(DEFAULT_URL)
    }

    /// Create a new client for the given base URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: normalize_base(url.into()),
        }
    }

    /// Create a builder for custom client configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// The base URL every endpoint path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Access user profile operations.
    pub fn profiles(&self) -> ProfileActions<'_> {
        ProfileActions { client: self }
    }

    /// Access messaging operations.
    pub fn messages(&self) -> MessageActions<'_> {
        MessageActions { client: self }
    }

    /// Access tracker operations.
    pub fn trackers(&self) -> TrackerActions<'_> {
        TrackerActions { client: self }
    }

    /// GET `path` and return the classified JSON body.
    pub(crate) async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let response = self.call::<()>(Method::GET, path, query, None).await?;
        let body = response.text().await?;
        extract_json(&body)
    }

    /// POST `body` as JSON to `path` and return the acknowledgement.
    pub(crate) async fn post_json<B>(&self, path: &str, body: &B) -> Result<Acknowledgement>
    where
        B: Serialize + ?Sized,
    {
        let response = self.call(Method::POST, path, &[], Some(body)).await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(Acknowledgement { status, body })
    }

    /// Perform one HTTP call against the niceday-api.
    ///
    /// Only GET and POST are supported; any other method fails before a
    /// request is sent. A 4xx/5xx status fails with [`Error::Transport`]
    /// without looking at the body as JSON.
    pub(crate) async fn call<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);

        let mut request = match method {
            Method::GET => self.http_client.get(&url),
            Method::POST => self.http_client.post(&url),
            other => return Err(Error::UnsupportedOperation(other.to_string())),
        };
        request = request.header(ACCEPT, "application/json");
        if !query.is_empty() {
            request = request.query(query);
        }
        if method == Method::POST {
            if let Some(body) = body {
                request = request.json(body);
            }
        }

        debug!(%method, %url, "Sending niceday-api request");
        let response = request.send().await.map_err(|e| {
            if e.is_connect() {
                Error::ConnectionRefused
            } else {
                Error::Http(e)
            }
        })?;

        let status = response.status();
        debug!(status = status.as_u16(), %url, "Received niceday-api response");
        if status.is_client_error() || status.is_server_error() {
            let body = response.text().await?;
            warn!(status = status.as_u16(), %url, "niceday-api request failed");
            return Err(Error::Transport {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

impl Default for NicedayClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating a customized [`NicedayClient`].
///
/// # Example
///
/// ```no_run
/// use niceday::NicedayClient;
///
/// # fn example() -> niceday::Result<()> {
/// let client = NicedayClient::builder()
///     .url("http://niceday-api:8080/")
///     .header("X-Request-Source", "perfectfit")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    headers: Vec<(String, String)>,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            headers: Vec::new(),
        }
    }

    /// Set the niceday-api URL.
    ///
    /// Defaults to `http://localhost:8080/`. A trailing `/` is added if missing.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Add a header sent with every request.
    ///
    /// The value is passed through untouched.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Build the client.
    ///
    /// Fails with [`Error::Config`] if a header name or value is invalid.
    pub fn build(self) -> Result<NicedayClient> {
        let mut headers = HeaderMap::new();
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::Config(format!("invalid header name {:?}: {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| Error::Config(format!("invalid value for header {}: {}", name, e)))?;
            headers.append(name, value);
        }

        let http_client = Client::builder().default_headers(headers).build()?;

        Ok(NicedayClient {
            http_client,
            base_url: normalize_base(self.base_url),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_base(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}
