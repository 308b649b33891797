//! Stateful photo carousel driven by a display surface.

use tracing::debug;

use super::{CarouselError, CarouselWindow, DEFAULT_MULTIPLIER};
use crate::domain::Photo;

/// Holds the photos currently on display and the virtual index the surface
/// is centered on.
///
/// The host calls [`Self::update_photos`] after every successful retrieval,
/// [`Self::settle`] when a scroll gesture comes to rest and [`Self::select`]
/// on tap.
#[derive(Debug, Clone)]
pub struct CarouselIndexer {
    photos: Vec<Photo>,
    multiplier: usize,
    centered: Option<usize>,
}

impl Default for CarouselIndexer {
    fn default() -> Self {
        Self {
            photos: Vec::new(),
            multiplier: DEFAULT_MULTIPLIER,
            centered: None,
        }
    }
}

impl CarouselIndexer {
    /// Create an empty carousel with a custom multiplier.
    pub const fn new(multiplier: usize) -> Result<Self, CarouselError> {
        if multiplier < 2 || multiplier % 2 != 0 {
            return Err(CarouselError::InvalidMultiplier(multiplier));
        }
        Ok(Self {
            photos: Vec::new(),
            multiplier,
            centered: None,
        })
    }

    /// Replace the displayed photos and center on the first one.
    ///
    /// Returns the new center, or `None` when the list is empty.
    pub fn update_photos(&mut self, photos: Vec<Photo>) -> Option<usize> {
        self.photos = photos;
        self.centered = self.window().center_index(0).ok();
        debug!(
            count = self.photos.len(),
            centered = ?self.centered,
            "Carousel photos replaced"
        );
        self.centered
    }

    /// The current window over the displayed photos.
    pub fn window(&self) -> CarouselWindow<'_, Photo> {
        CarouselWindow::from_validated(&self.photos, self.multiplier)
    }

    /// Number of virtual items the surface should report.
    pub fn item_count(&self) -> usize {
        self.window().len()
    }

    /// Photo to render at a virtual index.
    pub fn item_at(&self, virtual_index: usize) -> Result<&Photo, CarouselError> {
        self.window().item_at(virtual_index)
    }

    /// Center on base item `offset` in the middle replica.
    pub fn center_on(&mut self, offset: usize) -> Result<usize, CarouselError> {
        let center = self.window().center_index(offset)?;
        self.centered = Some(center);
        Ok(center)
    }

    /// Re-center after a scroll gesture settles on `nearest_index`.
    pub fn settle(&mut self, nearest_index: usize) -> Result<usize, CarouselError> {
        let center = self.window().recenter(nearest_index)?;
        debug!(nearest_index, center, "Carousel re-centered");
        self.centered = Some(center);
        Ok(center)
    }

    /// Photo selected by a tap on `virtual_index`.
    pub fn select(&self, virtual_index: usize) -> Result<&Photo, CarouselError> {
        self.window().select(virtual_index)
    }

    /// Virtual index the surface is currently centered on.
    pub const fn centered_index(&self) -> Option<usize> {
        self.centered
    }

    /// The displayed photos in base order.
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Number of replicas.
    pub const fn multiplier(&self) -> usize {
        self.multiplier
    }
}
