//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where adapters are wired together for the
//! CLI:
//! - Photo provider (Flickr client, or the bundled fixture offline)
//! - Device geolocation (IP positioning plus Nominatim)
//! - Retrieval orchestrator (via nearshot-core)
//!
//! Command handlers receive the composed `CliContext`.

use std::sync::Arc;

use nearshot_core::{
    CoreError, GeolocationPort, Location, PhotoProviderPort, RetrievalObserver,
    RetrievalOrchestrator,
};
use nearshot_flickr::{DefaultFlickrClient, FixtureProvider, FlickrClientConfig};
use nearshot_geo::{DefaultDeviceGeolocation, GeoClientConfig};
use tracing::{debug, info};

use crate::error::CliError;
use crate::parser::{Cli, FLICKR_API_KEY_ENV};
use crate::presentation::TerminalObserver;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliConfig {
    /// Flickr API key, when one was given.
    pub api_key: Option<String>,
    /// Serve the bundled fixture instead of calling Flickr.
    pub offline: bool,
    /// Photos requested per page.
    pub per_page: Option<u32>,
    /// Position to use instead of looking it up.
    pub fixed_location: Option<Location>,
}

impl CliConfig {
    /// Collect configuration from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let fixed_location = match &cli.command {
            Some(command) => command.position().location()?,
            None => None,
        };
        Ok(Self {
            api_key: cli.api_key.clone(),
            offline: cli.offline,
            per_page: cli.per_page,
            fixed_location,
        })
    }

    /// The API key, trimmed, or `ConfigurationMissing` when absent or blank.
    pub fn require_api_key(&self) -> Result<&str, CoreError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| CoreError::ConfigurationMissing {
                key: FLICKR_API_KEY_ENV.to_string(),
            })
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    orchestrator: RetrievalOrchestrator,
    observer: Arc<TerminalObserver>,
}

impl CliContext {
    /// Compose a context from already-built ports.
    pub fn from_ports(
        geolocation: Arc<dyn GeolocationPort>,
        provider: Arc<dyn PhotoProviderPort>,
    ) -> Self {
        let orchestrator = RetrievalOrchestrator::from_ports(geolocation, provider);
        let observer = Arc::new(TerminalObserver::new());
        let handle: Arc<dyn RetrievalObserver> = observer.clone();
        orchestrator.set_observer(Arc::downgrade(&handle));
        Self {
            orchestrator,
            observer,
        }
    }

    /// The retrieval orchestrator.
    pub const fn orchestrator(&self) -> &RetrievalOrchestrator {
        &self.orchestrator
    }

    /// The observer registered with the orchestrator.
    pub fn observer(&self) -> &TerminalObserver {
        &self.observer
    }
}

/// Bootstrap the CLI context with all adapters wired.
///
/// Fails with `ConfigurationMissing` when no API key is available and the
/// run is not offline.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    let provider: Arc<dyn PhotoProviderPort> = if config.offline {
        info!("Offline: serving the bundled photo set");
        Arc::new(FixtureProvider::new())
    } else {
        let mut flickr = FlickrClientConfig::new(config.require_api_key()?);
        if let Some(per_page) = config.per_page {
            flickr = flickr.with_per_page(per_page);
        }
        debug!(per_page = flickr.per_page(), "Using Flickr");
        Arc::new(DefaultFlickrClient::new(&flickr).map_err(|e| CliError::Config(e.to_string()))?)
    };

    let mut geolocation = DefaultDeviceGeolocation::new(&GeoClientConfig::new())
        .map_err(|e| CliError::Config(e.to_string()))?;
    if let Some(location) = config.fixed_location {
        debug!(%location, "Using fixed position");
        geolocation = geolocation.with_fixed_location(location);
    }

    Ok(CliContext::from_ports(Arc::new(geolocation), provider))
}
