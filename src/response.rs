//! Successful responses together with their HTTP details.

use http::{HeaderMap, StatusCode};
use std::time::Duration;

/// A successful HTTP response.
///
/// Facade methods unwrap this into the typed result; [`Client::request`]
/// returns it whole so the raw body, status and timing stay available.
///
/// [`Client::request`]: crate::Client::request
///
/// # Examples
///
/// ```no_run
/// use somerandomapi::{endpoint, Animal, Client};
///
/// # async fn example() -> Result<(), somerandomapi::Error> {
/// let client = Client::builder().build()?;
///
/// let response = client.request(&endpoint::animal(Animal::Fox), None).await?;
/// println!("Status: {}", response.status);
/// println!("Request took {:?}", response.latency);
/// println!("Body: {}", response.raw_body);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// The decoded response data.
    pub data: T,

    /// The raw response body as received.
    pub raw_body: String,

    /// The HTTP status code of the response.
    pub status: StatusCode,

    /// The response headers.
    pub headers: HeaderMap,

    /// Time from sending the request until the body was read.
    pub latency: Duration,
}

impl<T> Response<T> {
    pub fn new(
        data: T,
        raw_body: String,
        status: StatusCode,
        headers: HeaderMap,
        latency: Duration,
    ) -> Self {
        Self {
            data,
            raw_body,
            status,
            headers,
            latency,
        }
    }

    /// Maps the data while keeping the HTTP details.
    ///
    /// ```
    /// # use somerandomapi::Response;
    /// # use http::{HeaderMap, StatusCode};
    /// # use std::time::Duration;
    /// let response = Response::new(
    ///     serde_json::json!({ "fact": "Foxes use the magnetic field to hunt." }),
    ///     String::new(),
    ///     StatusCode::OK,
    ///     HeaderMap::new(),
    ///     Duration::from_millis(40),
    /// );
    ///
    /// let fact = response.map(|v| v["fact"].as_str().unwrap_or_default().to_string());
    /// assert_eq!(fact.data, "Foxes use the magnetic field to hunt.");
    /// ```
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            data: f(self.data),
            raw_body: self.raw_body,
            status: self.status,
            headers: self.headers,
            latency: self.latency,
        }
    }

    /// Like [`map`](Self::map), for conversions that can fail.
    pub fn try_map<U, E, F>(self, f: F) -> Result<Response<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        Ok(Response {
            data: f(self.data)?,
            raw_body: self.raw_body,
            status: self.status,
            headers: self.headers,
            latency: self.latency,
        })
    }

    /// Returns a header value by name, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

impl<T> AsRef<T> for Response<T> {
    fn as_ref(&self) -> &T {
        &self.data
    }
}

impl<T> std::ops::Deref for Response<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn test_header_lookup() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let response = Response::new((), String::new(), StatusCode::OK, headers, Duration::ZERO);
        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.header("x-missing"), None);
    }

    #[test]
    fn test_try_map_propagates_error() {
        let response = Response::new(1u8, "1".into(), StatusCode::OK, HeaderMap::new(), Duration::ZERO);
        let failed: Result<Response<u8>, &str> = response.try_map(|_| Err("nope"));
        assert_eq!(failed.unwrap_err(), "nope");
    }
}
