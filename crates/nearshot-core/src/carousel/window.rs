//! Replicated circular window over a borrowed list.

use super::CarouselError;

/// A virtual sequence of `items.len() * multiplier` entries where virtual
/// index `i` shows `items[i % items.len()]`.
///
/// The window owns no data; rebuild it whenever the base list changes.
#[derive(Debug)]
pub struct CarouselWindow<'a, T> {
    items: &'a [T],
    multiplier: usize,
}

impl<T> Clone for CarouselWindow<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CarouselWindow<'_, T> {}

impl<'a, T> CarouselWindow<'a, T> {
    /// Build a window. `multiplier` must be even and at least 2.
    pub const fn new(items: &'a [T], multiplier: usize) -> Result<Self, CarouselError> {
        if multiplier < 2 || multiplier % 2 != 0 {
            return Err(CarouselError::InvalidMultiplier(multiplier));
        }
        Ok(Self { items, multiplier })
    }

    /// Build a window from an already validated multiplier.
    pub(super) const fn from_validated(items: &'a [T], multiplier: usize) -> Self {
        Self { items, multiplier }
    }

    /// Virtual length, `N * M`.
    pub const fn len(&self) -> usize {
        self.items.len().saturating_mul(self.multiplier)
    }

    /// Whether the base list is empty (all windowing operations are disabled).
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items in the base list.
    pub const fn base_len(&self) -> usize {
        self.items.len()
    }

    /// Number of replicas.
    pub const fn multiplier(&self) -> usize {
        self.multiplier
    }

    /// Base-list index shown at a virtual index.
    pub const fn base_index(&self, virtual_index: usize) -> Result<usize, CarouselError> {
        let len = self.items.len();
        if len == 0 {
            return Err(CarouselError::IndexOutOfRange {
                index: virtual_index,
                len,
            });
        }
        Ok(virtual_index % len)
    }

    /// Item shown at a virtual index.
    pub fn item_at(&self, virtual_index: usize) -> Result<&'a T, CarouselError> {
        let index = self.base_index(virtual_index)?;
        Ok(&self.items[index])
    }

    /// The item a tap on `virtual_index` selects. Same as [`Self::item_at`].
    pub fn select(&self, virtual_index: usize) -> Result<&'a T, CarouselError> {
        self.item_at(virtual_index)
    }

    /// Virtual index of base item `offset` inside the middle replica:
    /// `(M / 2) * N + offset`.
    pub const fn center_index(&self, offset: usize) -> Result<usize, CarouselError> {
        let len = self.items.len();
        if offset >= len {
            return Err(CarouselError::IndexOutOfRange { index: offset, len });
        }
        Ok((self.multiplier / 2) * len + offset)
    }

    /// Re-center after a scroll settles on `nearest_index`.
    ///
    /// Lands on the same base item in the middle replica.
    pub const fn recenter(&self, nearest_index: usize) -> Result<usize, CarouselError> {
        match self.base_index(nearest_index) {
            Ok(offset) => self.center_index(offset),
            Err(err) => Err(err),
        }
    }
}
