//! Public configuration for the Flickr client.

use std::time::Duration;

/// Photos requested per call when nothing else is configured.
pub const DEFAULT_PER_PAGE: u32 = 25;

/// Largest page size Flickr accepts.
pub const MAX_PER_PAGE: u32 = 500;

/// Configuration for the Flickr client.
///
/// # Example
///
/// ```
/// use nearshot_flickr::FlickrClientConfig;
/// use std::time::Duration;
///
/// let config = FlickrClientConfig::new("0123456789abcdef")
///     .with_per_page(100)
///     .with_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct FlickrClientConfig {
    /// Flickr API key, sent as `api_key` on every call
    pub(crate) api_key: String,
    /// REST endpoint
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Photos per call, `1..=500`
    pub(crate) per_page: u32,
}

impl Default for FlickrClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.flickr.com/services/rest/".to_string(),
            user_agent: concat!("nearshot-flickr/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl FlickrClientConfig {
    /// Create a configuration for an API key with default settings.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Set the REST endpoint.
    ///
    /// Defaults to `https://api.flickr.com/services/rest/`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the number of photos requested per call, clamped to `1..=500`.
    ///
    /// Defaults to 25.
    #[must_use]
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.clamp(1, MAX_PER_PAGE);
        self
    }

    /// Photos requested per call.
    pub const fn per_page(&self) -> u32 {
        self.per_page
    }
}
