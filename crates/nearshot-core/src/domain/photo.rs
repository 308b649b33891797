//! Photo domain types.
//!
//! A `Photo` is the immutable record returned by a photo provider. Display
//! URLs are derived from its identity fields on demand and never stored.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Photo
// ─────────────────────────────────────────────────────────────────────────────

/// A single photo record as returned by a photo provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// Provider-assigned photo ID.
    pub id: String,
    /// Owner ID (e.g., "113500642@N04").
    pub owner: String,
    /// Secret used to build the static image URL.
    pub secret: String,
    /// Static server ID hosting the image.
    pub server: String,
    /// Server farm number.
    pub farm: u32,
    /// Photo title (may be empty).
    pub title: String,
    /// Whether the photo is publicly visible.
    pub is_public: bool,
    /// Whether the photo is visible to the owner's friends.
    pub is_friend: bool,
    /// Whether the photo is visible to the owner's family.
    pub is_family: bool,
}

impl Photo {
    /// Build the static image URL for this photo at the given size.
    ///
    /// The default size omits the size suffix:
    ///
    /// ```
    /// use nearshot_core::{Photo, PhotoSize};
    ///
    /// let photo = Photo {
    ///     id: "25408240053".into(),
    ///     owner: "113500642@N04".into(),
    ///     secret: "588cfe81c0".into(),
    ///     server: "1529".into(),
    ///     farm: 2,
    ///     title: "Portrait of Elisa".into(),
    ///     is_public: true,
    ///     is_friend: false,
    ///     is_family: false,
    /// };
    ///
    /// assert_eq!(
    ///     photo.source_url(PhotoSize::Default),
    ///     "https://farm2.staticflickr.com/1529/25408240053_588cfe81c0.jpg"
    /// );
    /// assert_eq!(
    ///     photo.source_url(PhotoSize::Large1024),
    ///     "https://farm2.staticflickr.com/1529/25408240053_588cfe81c0_b.jpg"
    /// );
    /// ```
    pub fn source_url(&self, size: PhotoSize) -> String {
        let suffix = size
            .suffix()
            .map_or_else(String::new, |token| format!("_{token}"));

        format!(
            "https://farm{}.staticflickr.com/{}/{}_{}{suffix}.jpg",
            self.farm, self.server, self.id, self.secret
        )
    }

    /// Static image URL at the default size.
    pub fn source_url_default(&self) -> String {
        self.source_url(PhotoSize::Default)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Sizes
// ─────────────────────────────────────────────────────────────────────────────

/// Display-size variants understood by the static image host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoSize {
    /// 500 px on the longest side, no suffix.
    #[default]
    Default,
    /// 75 px square.
    Square,
    /// 150 px square.
    LargeSquare,
    /// 100 px on the longest side.
    Thumbnail,
    /// 240 px on the longest side.
    Small,
    /// 320 px on the longest side.
    Small320,
    /// 640 px on the longest side.
    Medium640,
    /// 800 px on the longest side.
    Medium800,
    /// 1024 px on the longest side.
    Large1024,
}

impl PhotoSize {
    /// All size variants, smallest first, default last.
    pub const ALL: [Self; 9] = [
        Self::Square,
        Self::LargeSquare,
        Self::Thumbnail,
        Self::Small,
        Self::Small320,
        Self::Medium640,
        Self::Medium800,
        Self::Large1024,
        Self::Default,
    ];

    /// URL suffix token for this size, `None` for the default size.
    pub const fn suffix(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Square => Some("s"),
            Self::LargeSquare => Some("q"),
            Self::Thumbnail => Some("t"),
            Self::Small => Some("m"),
            Self::Small320 => Some("n"),
            Self::Medium640 => Some("z"),
            Self::Medium800 => Some("c"),
            Self::Large1024 => Some("b"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Detail view
// ─────────────────────────────────────────────────────────────────────────────

/// Presentation helper for a single selected photo.
///
/// A full-screen viewer shows the standard-quality image first and swaps in
/// the high-quality variant once it has loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoDetail {
    photo: Photo,
}

impl PhotoDetail {
    /// Wrap a selected photo.
    pub const fn new(photo: Photo) -> Self {
        Self { photo }
    }

    /// URL of the default-size image.
    pub fn standard_quality_url(&self) -> String {
        self.photo.source_url(PhotoSize::Default)
    }

    /// URL of the 1024 px image.
    pub fn high_quality_url(&self) -> String {
        self.photo.source_url(PhotoSize::Large1024)
    }

    /// Photo title.
    pub fn title(&self) -> &str {
        &self.photo.title
    }

    /// The wrapped photo.
    pub const fn photo(&self) -> &Photo {
        &self.photo
    }
}
