//! Configuration types for the cover service.

/// Default endpoint of the remote cover image service.
///
/// The service returns an arbitrary image on every request; the book id is
/// deliberately not part of the request.
pub const DEFAULT_COVER_ENDPOINT: &str = "https://picsum.photos/1024";

/// Configuration for the remote cover image service.
#[derive(Debug, Clone)]
pub struct CoverServiceConfig {
    /// Endpoint returning raw image bytes on GET
    pub endpoint: String,
}

impl CoverServiceConfig {
    /// Create a config pointing at a specific endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for CoverServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_COVER_ENDPOINT.to_string(),
        }
    }
}
