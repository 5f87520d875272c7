//! The shared HTTP client.
//!
//! [`Client`] owns the connection pool and configuration. Every facade
//! operation funnels through [`Client::request`] or [`Client::request_image`],
//! which perform exactly one round trip each: no retries, no caching.

use crate::{
    clients::{AnimalClient, PremiumClient},
    endpoint::{self, Endpoint, HttpMethod, Params},
    models::Image,
    rate_limit::RateLimitInfo,
    Error, Response, Result,
};
use http::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

/// Base URL of the public service.
pub const DEFAULT_BASE_URL: &str = "https://some-random-api.com";

const DEFAULT_USER_AGENT: &str = concat!("somerandomapi-rs/", env!("CARGO_PKG_VERSION"));

/// Client for the Some Random API service.
///
/// Cheap to clone; clones share one connection pool, so concurrent calls from
/// several tasks are fine.
///
/// # Examples
///
/// ```no_run
/// use somerandomapi::{Animal, Client};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), somerandomapi::Error> {
/// let client = Client::builder()
///     .timeout(Duration::from_secs(10))
///     .build()?;
///
/// let dog = client.animal().get_image_and_fact(Animal::Dog).await?;
/// println!("{} ({})", dog.fact(), dog.image());
///
/// let fact = client.animal().get_fact("koala").await?;
/// println!("{fact}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http_client: reqwest::Client,
    base_url: Url,
    default_headers: HeaderMap,
    timeout: Option<Duration>,
    api_key: Option<String>,
}

impl Client {
    /// Creates a new `ClientBuilder` for configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Creates a client for the public service with default settings.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Animal images and facts.
    pub fn animal(&self) -> AnimalClient<'_> {
        AnimalClient::new(self)
    }

    /// Endpoints that need an API key.
    pub fn premium(&self) -> PremiumClient<'_> {
        PremiumClient::new(self)
    }

    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    pub(crate) fn api_key(&self) -> Option<&str> {
        self.inner.api_key.as_deref()
    }

    /// Resolves the full URL for an endpoint.
    ///
    /// For `GET` endpoints the parameters are appended as the query string.
    pub fn url_for(&self, endpoint: &Endpoint, params: Option<&Params>) -> Url {
        let mut url = self.inner.base_url.clone();
        let path = format!(
            "{}{}",
            url.path().trim_end_matches('/'),
            endpoint.path
        );
        url.set_path(&path);

        if endpoint.method == HttpMethod::Get {
            let pairs = params.map(endpoint::query_pairs).unwrap_or_default();
            if !pairs.is_empty() {
                url.query_pairs_mut().extend_pairs(pairs);
            }
        }
        url
    }

    /// Calls a JSON endpoint.
    ///
    /// Required parameters are checked before anything is sent. A non-2xx
    /// status becomes [`Error::HttpError`] and a body that is not JSON becomes
    /// [`Error::DeserializationFailed`].
    ///
    /// ```no_run
    /// use somerandomapi::{endpoint, Client, FactAnimal};
    ///
    /// # async fn example() -> Result<(), somerandomapi::Error> {
    /// let client = Client::new()?;
    /// let response = client
    ///     .request(&endpoint::facts(FactAnimal::Whale), None)
    ///     .await?;
    /// println!("{}", response.data["fact"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn request(
        &self,
        endpoint: &Endpoint,
        params: Option<&Params>,
    ) -> Result<Response<Value>> {
        let start_time = Instant::now();
        let (response, _) = self.send(endpoint, params).await?;
        let status = response.status();
        let headers = response.headers().clone();

        let raw_body = response.text().await?;
        let latency = start_time.elapsed();

        tracing::info!(
            status = status.as_u16(),
            latency_ms = latency.as_millis(),
            endpoint = %endpoint,
            "Received HTTP response"
        );

        match serde_json::from_str::<Value>(&raw_body) {
            Ok(data) => Ok(Response::new(data, raw_body, status, headers, latency)),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    raw_response = %raw_body,
                    "Failed to deserialize response"
                );

                Err(Error::DeserializationFailed {
                    raw_response: raw_body,
                    serde_error: e.to_string(),
                    status,
                })
            }
        }
    }

    /// Calls an endpoint that answers with an image instead of JSON.
    pub async fn request_image(
        &self,
        endpoint: &Endpoint,
        params: Option<&Params>,
    ) -> Result<Image> {
        let start_time = Instant::now();
        let (response, url) = self.send(endpoint, params).await?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let bytes = response.bytes().await?;

        tracing::info!(
            status = status.as_u16(),
            latency_ms = start_time.elapsed().as_millis(),
            endpoint = %endpoint,
            size = bytes.len(),
            "Received image response"
        );

        Ok(Image::new(redact(&url), content_type, bytes.to_vec()))
    }

    /// Sends one request and turns non-2xx statuses into errors.
    async fn send(
        &self,
        endpoint: &Endpoint,
        params: Option<&Params>,
    ) -> Result<(reqwest::Response, Url)> {
        endpoint.check_params(params)?;

        let url = self.url_for(endpoint, params);

        tracing::debug!(
            method = %endpoint.method,
            url = %redact(&url),
            "Executing HTTP request"
        );

        let mut request = self
            .inner
            .http_client
            .request(endpoint.method.into(), url.clone());

        for (name, value) in &self.inner.default_headers {
            request = request.header(name, value);
        }

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        if let (HttpMethod::Post, Some(params)) = (endpoint.method, params) {
            request = request.json(params);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, endpoint = %endpoint, "Request failed");
                return Err(e.into());
            }
        };

        let status = response.status();
        if status.is_success() {
            return Ok((response, url));
        }

        let headers = response.headers().clone();
        let raw_response = response.text().await.unwrap_or_default();
        let rate_limit_info = Some(RateLimitInfo::from_headers(&headers)).filter(|i| !i.is_empty());

        if status.is_client_error() {
            tracing::error!(
                status = status.as_u16(),
                response = %raw_response,
                "Client error (4xx)"
            );
        } else if status.is_server_error() {
            tracing::warn!(
                status = status.as_u16(),
                response = %raw_response,
                "Server error (5xx)"
            );
        } else {
            tracing::warn!(status = status.as_u16(), "Unexpected status");
        }

        Err(Error::HttpError {
            status,
            raw_response,
            headers,
            rate_limit_info,
        })
    }
}

/// Hides the `key` query parameter from logs.
fn redact(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| k == "key") {
        return url.to_string();
    }

    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "key" { "***".into() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

/// Builder for configuring and creating a [`Client`].
///
/// # Examples
///
/// ```no_run
/// use somerandomapi::ClientBuilder;
/// use std::time::Duration;
///
/// # fn example() -> Result<(), somerandomapi::Error> {
/// let client = ClientBuilder::new()
///     .timeout(Duration::from_secs(30))
///     .api_key("my-premium-key")
///     .user_agent("my-bot/1.0")?
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    base_url: Option<Url>,
    default_headers: HeaderMap,
    timeout: Option<Duration>,
    api_key: Option<String>,
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings.
    pub fn new() -> Self {
        Self {
            base_url: None,
            default_headers: HeaderMap::new(),
            timeout: None,
            api_key: None,
        }
    }

    /// Overrides the base URL, [`DEFAULT_BASE_URL`] otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        self.base_url = Some(Url::parse(url.as_ref())?);
        Ok(self)
    }

    /// Adds a header sent with every request.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::ConfigurationError(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::ConfigurationError(format!("Invalid header value: {}", e)))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Replaces the default `User-Agent`.
    pub fn user_agent(self, value: impl AsRef<str>) -> Result<Self> {
        self.default_header(http::header::USER_AGENT.as_str(), value)
    }

    /// Sets a per-request timeout. There is none by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Key sent with premium requests whose record carries none.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Builds the configured `Client`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be created.
    pub fn build(self) -> Result<Client> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        if base_url.cannot_be_a_base() {
            return Err(Error::ConfigurationError(format!(
                "Base URL cannot carry paths: {}",
                base_url
            )));
        }

        let http_client = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|e| {
                Error::ConfigurationError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Client {
            inner: Arc::new(ClientInner {
                http_client,
                base_url,
                default_headers: self.default_headers,
                timeout: self.timeout,
                api_key: self.api_key,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
