//! HTTP client for the console backend
//!
//! Every request goes to `<base_url>/<path>` with the configured bearer
//! credential and JSON content negotiation.

use std::time::{Duration, Instant};

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use waconsole_core::{ConsoleConfig, ConsoleError, ConsoleResult};

/// Authenticated JSON client
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client from configuration
    pub fn new(config: &ConsoleConfig) -> ConsoleResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| ConsoleError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            token: config.api_token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a resource path
    fn url(&self, path: &str) -> ConsoleResult<String> {
        let path = path.trim();
        if path.is_empty() {
            return Err(ConsoleError::MissingPath);
        }
        Ok(format!("{}/{}", self.base_url, path.trim_start_matches('/')))
    }

    /// Make a GET request with query parameters
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ConsoleResult<T> {
        let value = self.send(Method::GET, path, query, None).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Make a GET request and return the raw JSON body
    pub async fn get_value(&self, path: &str, query: &[(&str, String)]) -> ConsoleResult<Value> {
        self.send(Method::GET, path, query, None).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ConsoleResult<T> {
        let body = serde_json::to_value(body)?;
        let value = self.send(Method::POST, path, &[], Some(body)).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ConsoleResult<T> {
        let body = serde_json::to_value(body)?;
        let value = self.send(Method::PUT, path, &[], Some(body)).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Make a DELETE request. An empty response body yields `None`.
    pub async fn delete(&self, path: &str) -> ConsoleResult<Option<Value>> {
        let value = self.send(Method::DELETE, path, &[], None).await?;
        Ok((!value.is_null()).then_some(value))
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> ConsoleResult<Value> {
        let url = self.url(path)?;

        let mut request = self
            .http
            .request(method.clone(), &url)
            .bearer_auth(&self.token);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        tracing::debug!(%method, path, "API request");
        let started = Instant::now();

        let response = request.send().await.map_err(|e| {
            tracing::error!(%method, path, error = %e, timeout = e.is_timeout(), "API request failed");
            transport_error(e)
        })?;

        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        if !status.is_success() {
            let body: Option<Value> = serde_json::from_str(&text).ok();
            tracing::error!(
                %method,
                path,
                status = status.as_u16(),
                elapsed_ms,
                body = %text,
                "API error response"
            );
            return Err(ConsoleError::server(status.as_u16(), body));
        }

        tracing::debug!(%method, path, status = status.as_u16(), elapsed_ms, "API response");

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

fn transport_error(e: reqwest::Error) -> ConsoleError {
    ConsoleError::Transport {
        message: e.to_string(),
        timeout: e.is_timeout(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        let config = ConsoleConfig {
            api_base_url: "http://localhost:9/api/".to_string(),
            api_token: "t".to_string(),
            ..Default::default()
        };
        ApiClient::new(&config).unwrap()
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = client();
        assert_eq!(client.base_url(), "http://localhost:9/api");
        assert_eq!(client.url("customer").unwrap(), "http://localhost:9/api/customer");
        assert_eq!(client.url("/customer/7").unwrap(), "http://localhost:9/api/customer/7");
    }

    #[test]
    fn test_blank_path_is_rejected() {
        let err = client().url("  ").unwrap_err();
        assert!(matches!(err, ConsoleError::MissingPath));
        assert_eq!(err.to_string(), "API URL is undefined");
    }

    #[test]
    fn test_debug_hides_token() {
        let debug = format!("{:?}", client());
        assert!(debug.contains("localhost"));
        assert!(!debug.contains("token"));
    }
}
