//! Circular carousel windowing.
//!
//! A finite list of N items is presented as a virtual sequence of N·M items
//! (M replicas). The display surface is kept centered in the middle replica,
//! so there is always room to scroll in either direction, and after every
//! scroll it is silently moved back to the same item in the middle replica.
//! Every replica renders identical content, so the jump is invisible.
//!
//! - `window` - the non-owning index math (`CarouselWindow`)
//! - `indexer` - the stateful photo carousel a host drives (`CarouselIndexer`)

mod indexer;
mod window;

use thiserror::Error;

pub use indexer::CarouselIndexer;
pub use window::CarouselWindow;

/// Number of replicas used by the reference carousel.
pub const DEFAULT_MULTIPLIER: usize = 10;

/// Errors from windowing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CarouselError {
    /// The base list is empty, or an offset lies outside it.
    #[error("Index {index} out of range for {len} item(s)")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// Number of items in the base list.
        len: usize,
    },

    /// The multiplier is odd or smaller than two.
    #[error("Carousel multiplier must be even and at least 2, got {0}")]
    InvalidMultiplier(usize),
}
