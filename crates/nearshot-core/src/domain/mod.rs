//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (HTTP, device positioning, terminal output).
//!
//! # Structure
//!
//! - `photo` - Photo records, display sizes and URL construction
//! - `location` - Coordinates and resolved place names
//! - `state` - Retrieval state machine states

mod location;
mod photo;
mod state;

pub use location::{Location, LocationName, ResolvedLocation};
pub use photo::{Photo, PhotoDetail, PhotoSize};
pub use state::RetrievalState;
