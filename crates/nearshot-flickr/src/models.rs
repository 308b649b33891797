//! Internal API types for the Flickr REST endpoint.
//!
//! These types are internal to `nearshot-flickr`. Consumers only ever see
//! `nearshot_core::Photo`.

use nearshot_core::Photo;
use serde::{Deserialize, Deserializer};
use url::Url;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the Flickr client.
#[derive(Debug, Clone)]
pub struct FlickrConfig {
    /// REST endpoint
    pub base_url: Url,
    /// API key sent with every call
    pub api_key: String,
    /// Photos per call
    pub per_page: u32,
}

// ============================================================================
// API Methods
// ============================================================================

/// Flickr methods used by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlickrMethod {
    /// Photos near a coordinate.
    Search,
    /// Today's interesting photos (the trending fallback).
    Interestingness,
}

impl FlickrMethod {
    /// Method name as sent in the `method` query parameter.
    pub const fn as_api_param(self) -> &'static str {
        match self {
            Self::Search => "flickr.photos.search",
            Self::Interestingness => "flickr.interestingness.getList",
        }
    }
}

// ============================================================================
// Response Records
// ============================================================================

/// One element of `photos.photo` as Flickr returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct FlickrPhotoRecord {
    pub id: String,
    pub owner: String,
    pub secret: String,
    pub server: String,
    pub farm: u32,
    #[serde(default)]
    pub title: String,
    #[serde(deserialize_with = "visibility_flag")]
    pub ispublic: bool,
    #[serde(deserialize_with = "visibility_flag")]
    pub isfriend: bool,
    #[serde(deserialize_with = "visibility_flag")]
    pub isfamily: bool,
}

impl From<FlickrPhotoRecord> for Photo {
    fn from(record: FlickrPhotoRecord) -> Self {
        Self {
            id: record.id,
            owner: record.owner,
            secret: record.secret,
            server: record.server,
            farm: record.farm,
            title: record.title,
            is_public: record.ispublic,
            is_friend: record.isfriend,
            is_family: record.isfamily,
        }
    }
}

/// Flickr sends visibility flags as `0`/`1`; some mirrors send booleans.
fn visibility_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(u8),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => Ok(value),
        Flag::Int(0) => Ok(false),
        Flag::Int(1) => Ok(true),
        Flag::Int(other) => Err(serde::de::Error::custom(format!(
            "visibility flag must be 0 or 1, got {other}"
        ))),
    }
}
