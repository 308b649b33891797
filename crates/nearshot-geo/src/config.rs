//! Public configuration for the geolocation clients.

use std::time::Duration;

/// Configuration shared by the IP locator and the reverse geocoder.
///
/// # Example
///
/// ```
/// use nearshot_geo::GeoClientConfig;
/// use std::time::Duration;
///
/// let config = GeoClientConfig::new()
///     .with_user_agent("my-app/1.0 (me@example.com)")
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct GeoClientConfig {
    /// IP positioning endpoint
    pub(crate) locator_url: String,
    /// Nominatim reverse endpoint
    pub(crate) geocoder_url: String,
    /// User agent string; Nominatim requires an identifying one
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
}

impl Default for GeoClientConfig {
    fn default() -> Self {
        Self {
            locator_url: "http://ip-api.com/json".to_string(),
            geocoder_url: "https://nominatim.openstreetmap.org/reverse".to_string(),
            user_agent: concat!(
                "nearshot-geo/",
                env!("CARGO_PKG_VERSION"),
                " (+https://github.com/nearshot/nearshot)"
            )
            .to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl GeoClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the IP positioning endpoint.
    ///
    /// Defaults to `http://ip-api.com/json`.
    #[must_use]
    pub fn with_locator_url(mut self, url: impl Into<String>) -> Self {
        self.locator_url = url.into();
        self
    }

    /// Set the reverse geocoding endpoint.
    ///
    /// Defaults to `https://nominatim.openstreetmap.org/reverse`.
    #[must_use]
    pub fn with_geocoder_url(mut self, url: impl Into<String>) -> Self {
        self.geocoder_url = url.into();
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
    /// Defaults to 10 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
