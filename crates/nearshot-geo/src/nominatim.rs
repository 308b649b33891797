//! Reverse geocoding through OpenStreetMap Nominatim.

use std::sync::Arc;

use nearshot_core::Location;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::GeoResult;
use crate::http::HttpBackend;

/// Name given to coordinates that have no place, such as open water.
pub const UNNAMED_PLACE: &str = "Nowhere";

/// Address fields tried in order, most specific settlement first.
const PLACE_KEYS: [&str; 8] = [
    "city",
    "town",
    "village",
    "hamlet",
    "municipality",
    "county",
    "state",
    "country",
];

/// Pick a display name from a `format=jsonv2` reverse response.
///
/// Returns `None` for `{"error": ...}` responses and for addresses without
/// any of the known place fields.
pub fn place_name(json: &Value) -> Option<String> {
    if let Some(error) = json.get("error") {
        debug!(%error, "Nominatim found no place");
        return None;
    }

    let address = json.get("address")?;
    PLACE_KEYS.iter().find_map(|key| {
        address
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
    })
}

/// Resolves coordinates to a place name.
pub struct NominatimGeocoder<B: HttpBackend> {
    backend: Arc<B>,
    base_url: Url,
}

impl<B: HttpBackend> NominatimGeocoder<B> {
    /// Create a geocoder for a `/reverse` endpoint.
    pub fn new(backend: Arc<B>, url: &str) -> GeoResult<Self> {
        Ok(Self {
            backend,
            base_url: Url::parse(url)?,
        })
    }

    fn reverse_url(&self, location: &Location) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(Some(&format!(
            "format=jsonv2&lat={}&lon={}&zoom=10",
            location.latitude, location.longitude
        )));
        url
    }

    /// Name the place at `location`, or [`UNNAMED_PLACE`] when there is none.
    pub async fn reverse(&self, location: &Location) -> GeoResult<String> {
        let json: Value = self.backend.get_json(&self.reverse_url(location)).await?;
        Ok(place_name(&json).unwrap_or_else(|| UNNAMED_PLACE.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::FakeBackend;
    use serde_json::json;

    fn geocoder(backend: FakeBackend) -> NominatimGeocoder<FakeBackend> {
        NominatimGeocoder::new(
            Arc::new(backend),
            "https://nominatim.openstreetmap.org/reverse",
        )
        .unwrap()
    }

    #[test]
    fn test_place_name_prefers_most_specific() {
        let json = json!({
            "address": { "town": "Los Gatos", "county": "Santa Clara County", "country": "United States" }
        });
        assert_eq!(place_name(&json).as_deref(), Some("Los Gatos"));
    }

    #[test]
    fn test_place_name_falls_back_to_country() {
        let json = json!({ "address": { "country": "Antarctica" } });
        assert_eq!(place_name(&json).as_deref(), Some("Antarctica"));
    }

    #[test]
    fn test_place_name_skips_blank_fields() {
        let json = json!({ "address": { "city": "  ", "state": "California" } });
        assert_eq!(place_name(&json).as_deref(), Some("California"));
    }

    #[test]
    fn test_place_name_error_response() {
        assert_eq!(place_name(&json!({ "error": "Unable to geocode" })), None);
        assert_eq!(place_name(&json!({})), None);
    }

    #[test]
    fn test_reverse_url() {
        let geocoder = geocoder(FakeBackend::new());
        let url = geocoder.reverse_url(&Location::new(37.331_892, -122.030_208).unwrap());
        assert_eq!(
            url.as_str(),
            "https://nominatim.openstreetmap.org/reverse?format=jsonv2&lat=37.331892&lon=-122.030208&zoom=10"
        );
    }

    #[tokio::test]
    async fn test_reverse_cupertino() {
        let backend = FakeBackend::new().with_json(
            "lat=37.331892&lon=-122.030208",
            json!({
                "place_id": 298_000_000,
                "display_name": "Cupertino, Santa Clara County, California, United States",
                "address": {
                    "city": "Cupertino",
                    "county": "Santa Clara County",
                    "state": "California",
                    "country": "United States",
                    "country_code": "us"
                }
            }),
        );
        let name = geocoder(backend)
            .reverse(&Location::new(37.331_892, -122.030_208).unwrap())
            .await
            .unwrap();
        assert_eq!(name, "Cupertino");
    }

    #[tokio::test]
    async fn test_reverse_open_water_is_nowhere() {
        let backend =
            FakeBackend::new().with_json("lat=0&lon=0", json!({ "error": "Unable to geocode" }));
        let name = geocoder(backend)
            .reverse(&Location::new(0.0, 0.0).unwrap())
            .await
            .unwrap();
        assert_eq!(name, UNNAMED_PLACE);
    }
}
