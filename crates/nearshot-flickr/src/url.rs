//! URL construction helpers for the Flickr REST endpoint.
//!
//! Pure functions, so every call builds its query the same way.

use url::Url;

use crate::models::{FlickrConfig, FlickrMethod};

/// Build the URL for a method call with the common parameters.
fn build_method_url(config: &FlickrConfig, method: FlickrMethod, extra: &str) -> Url {
    let mut url = config.base_url.clone();

    let mut query_string = format!(
        "method={}&api_key={}&format=json&nojsoncallback=1&per_page={}",
        method.as_api_param(),
        urlencoding::encode(&config.api_key),
        config.per_page,
    );
    if !extra.is_empty() {
        query_string.push('&');
        query_string.push_str(extra);
    }

    url.set_query(Some(&query_string));
    url
}

/// Build a coordinate search URL.
pub fn build_search_url(config: &FlickrConfig, latitude: f64, longitude: f64) -> Url {
    build_method_url(
        config,
        FlickrMethod::Search,
        &format!("lat={latitude}&lon={longitude}"),
    )
}

/// Build the trending (interestingness) URL.
pub fn build_trending_url(config: &FlickrConfig) -> Url {
    build_method_url(config, FlickrMethod::Interestingness, "")
}

/// Render a URL for logs and errors with the API key masked.
pub fn redact_api_key(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == "api_key" {
                "REDACTED".to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
