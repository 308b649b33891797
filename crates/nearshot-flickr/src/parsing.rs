//! JSON parsing functions for Flickr responses.
//!
//! Sync functions that turn a raw response envelope into domain photos.

use nearshot_core::Photo;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::{FlickrError, FlickrResult};
use crate::models::FlickrPhotoRecord;

/// Parse a single photo record.
///
/// Returns `None` (and logs) when the record is missing a field or has a
/// field of the wrong type.
pub fn parse_photo(json: &Value) -> Option<Photo> {
    match FlickrPhotoRecord::deserialize(json) {
        Ok(record) => Some(record.into()),
        Err(err) => {
            let id = json.get("id").and_then(Value::as_str).unwrap_or("<unknown>");
            warn!(photo_id = id, error = %err, "Skipping malformed photo record");
            None
        }
    }
}

/// Parse a full `photos` response envelope.
///
/// `"stat": "fail"` becomes [`FlickrError::Api`]. Records that fail to decode
/// are dropped; the rest of the batch is kept in response order.
pub fn parse_photo_response(json: &Value) -> FlickrResult<Vec<Photo>> {
    match json.get("stat").and_then(Value::as_str) {
        Some("ok") => {}
        Some("fail") => {
            return Err(FlickrError::Api {
                code: json.get("code").and_then(Value::as_i64).unwrap_or(0),
                message: json
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown error")
                    .to_string(),
            });
        }
        other => {
            return Err(FlickrError::InvalidResponse {
                message: format!("unexpected stat {other:?}"),
            });
        }
    }

    let records = json
        .get("photos")
        .and_then(|photos| photos.get("photo"))
        .and_then(Value::as_array)
        .ok_or_else(|| FlickrError::InvalidResponse {
            message: "missing photos.photo array".to_string(),
        })?;

    Ok(records.iter().filter_map(parse_photo).collect())
}
