//! HTTP client for the remote cover image service.

use crate::error::{CoverError, Result};
use crate::types::CoverServiceConfig;
use image::DynamicImage;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Client for fetching replacement cover images.
///
/// The service behind the endpoint returns an arbitrary image per request;
/// nothing about the request identifies a book. One GET is issued per
/// [`fetch_cover`](CoverClient::fetch_cover) call and the connection is
/// released on every exit path when the response is dropped.
pub struct CoverClient {
    http: Client,
    endpoint: String,
}

impl CoverClient {
    /// Create a new client for the configured endpoint.
    pub fn new(config: CoverServiceConfig) -> Result<Self> {
        if config.endpoint.is_empty() {
            return Err(CoverError::InvalidUrl("URL cannot be empty".into()));
        }
        if !config.endpoint.starts_with("http://") && !config.endpoint.starts_with("https://") {
            return Err(CoverError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        // Create HTTP client with reasonable defaults
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("TomePlayer/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint,
        })
    }

    /// The endpoint this client fetches covers from.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch a cover image and decode it.
    ///
    /// Issues a single GET against the endpoint. Any non-success status is
    /// uniformly a [`CoverError::ServerError`]; a success response whose
    /// body is not a decodable image is a [`CoverError::Decode`]. Decoding
    /// runs on the blocking pool so the async runtime is not stalled.
    pub async fn fetch_cover(&self) -> Result<DynamicImage> {
        debug!(url = %self.endpoint, "Fetching replacement cover");

        let response = self.http.get(&self.endpoint).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                CoverError::ServiceUnreachable(e.to_string())
            } else {
                CoverError::Request(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CoverError::ServerError {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        debug!(size = bytes.len(), "Received cover payload");

        let cover = tokio::task::spawn_blocking(move || image::load_from_memory(&bytes))
            .await
            .map_err(|e| CoverError::TaskFailed(e.to_string()))??;

        Ok(cover)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_urls_accepted() {
        assert!(CoverClient::new(CoverServiceConfig::new("https://example.com/1024")).is_ok());
        assert!(CoverClient::new(CoverServiceConfig::new("http://localhost:8080")).is_ok());
        assert!(CoverClient::new(CoverServiceConfig::default()).is_ok());
    }

    #[test]
    fn empty_url_rejected() {
        let result = CoverClient::new(CoverServiceConfig::new(""));
        match result {
            Err(CoverError::InvalidUrl(msg)) => assert!(msg.contains("empty")),
            _ => panic!("Expected InvalidUrl error"),
        }
    }

    #[test]
    fn url_without_scheme_rejected() {
        let result = CoverClient::new(CoverServiceConfig::new("example.com"));
        match result {
            Err(CoverError::InvalidUrl(msg)) => {
                assert!(msg.contains("http://") || msg.contains("https://"));
            }
            _ => panic!("Expected InvalidUrl error"),
        }
    }

    #[test]
    fn ftp_scheme_rejected() {
        let result = CoverClient::new(CoverServiceConfig::new("ftp://example.com"));
        assert!(matches!(result, Err(CoverError::InvalidUrl(_))));
    }
}
