#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultFlickrClient is meant to be used through PhotoProviderPort, not its
// internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod fixture;
mod http;
mod models;
mod parsing;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultFlickrClient;

// Configuration
pub use config::{DEFAULT_PER_PAGE, FlickrClientConfig, MAX_PER_PAGE};

// Errors
pub use error::{FlickrError, FlickrResult};

// Offline provider
pub use fixture::FixtureProvider;
