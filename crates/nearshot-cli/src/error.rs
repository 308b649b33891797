//! CLI-specific error types and mappings.
//!
//! Maps `CoreError` to exit codes and user-facing messages.

use nearshot_core::{CarouselError, CoreError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error with no closer category.
    #[error("{0}")]
    Core(String),

    /// Argument error (bad coordinate, index or multiplier).
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The position or its place name could not be determined.
    #[error("Location error: {0}")]
    Location(String),

    /// The photo provider could not be reached or answered badly.
    #[error("Network error: {0}")]
    Network(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow `sysexits.h` where one fits:
    /// - 1: General error
    /// - 2: Invalid arguments
    /// - 69: Service unavailable
    /// - 75: Temporary failure, retry later
    /// - 78: Configuration error
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Location(_) => 69, // EX_UNAVAILABLE
            Self::Network(_) => 75,  // EX_TEMPFAIL
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::LocationUnavailable(_) | CoreError::ReverseGeocodeFailed { .. } => {
                Self::Location(err.to_string())
            }
            CoreError::Network(msg) => Self::Network(msg),
            CoreError::IndexOutOfRange { .. } => Self::Arguments(err.to_string()),
            CoreError::Validation(msg) => Self::Arguments(msg),
            CoreError::ConfigurationMissing { key } => {
                Self::Config(format!("{key} is not set (use --offline to run without it)"))
            }
            CoreError::InFlight | CoreError::Cancelled => Self::Core(err.to_string()),
        }
    }
}

impl From<CarouselError> for CliError {
    fn from(err: CarouselError) -> Self {
        CoreError::from(err).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_config_error() {
        let err = CliError::from(CoreError::ConfigurationMissing {
            key: "FLICKR_API_KEY".to_string(),
        });
        assert_eq!(err.exit_code(), 78);
        assert!(err.to_string().contains("FLICKR_API_KEY"));
    }

    #[test]
    fn test_location_errors() {
        let err = CliError::from(CoreError::LocationUnavailable("denied".to_string()));
        assert!(matches!(err, CliError::Location(_)));
        assert_eq!(err.exit_code(), 69);
    }

    #[test]
    fn test_carousel_errors_are_argument_errors() {
        let err = CliError::from(CarouselError::IndexOutOfRange { index: 3, len: 0 });
        assert_eq!(err.exit_code(), 2);

        let err = CliError::from(CarouselError::InvalidMultiplier(3));
        assert!(matches!(err, CliError::Arguments(ref msg) if msg.contains('3')));
    }

    #[test]
    fn test_network_and_general() {
        assert_eq!(CliError::from(CoreError::Network("timeout".to_string())).exit_code(), 75);
        assert_eq!(CliError::from(CoreError::Cancelled).exit_code(), 1);
    }
}
