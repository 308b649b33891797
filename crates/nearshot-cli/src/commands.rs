//! Subcommands and their shared argument groups.

use clap::{Args, Subcommand};
use nearshot_core::{CoreError, DEFAULT_MULTIPLIER, Location};

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the current place name and retrieve photos taken near it
    Locate {
        #[command(flatten)]
        position: PositionArgs,
    },

    /// Retrieve photos for the known position, or trending photos without one
    Photos {
        #[command(flatten)]
        position: PositionArgs,
    },

    /// Lay the retrieved photos out on a circular carousel
    Carousel {
        #[command(flatten)]
        position: PositionArgs,
        #[command(flatten)]
        carousel: CarouselArgs,
    },

    /// Show the detail view for the photo at a carousel index
    Show {
        /// Virtual carousel index
        virtual_index: usize,
        #[command(flatten)]
        position: PositionArgs,
        /// Number of carousel replicas (even, at least 2)
        #[arg(short, long, default_value_t = DEFAULT_MULTIPLIER)]
        multiplier: usize,
    },
}

impl Commands {
    /// Position override given to the command.
    pub const fn position(&self) -> &PositionArgs {
        match self {
            Self::Locate { position }
            | Self::Photos { position }
            | Self::Carousel { position, .. }
            | Self::Show { position, .. } => position,
        }
    }
}

/// Fixed coordinate used instead of looking the position up.
#[derive(Args, Debug, Clone, Copy, Default, PartialEq)]
pub struct PositionArgs {
    /// Latitude in degrees
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude in degrees
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,
}

impl PositionArgs {
    /// Validated location, if one was given.
    pub fn location(&self) -> Result<Option<Location>, CoreError> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Location::new(lat, lon).map(Some),
            _ => Ok(None),
        }
    }
}

/// Carousel interaction to simulate.
#[derive(Args, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselArgs {
    /// Tap the item at this virtual index
    #[arg(long)]
    pub select: Option<usize>,

    /// Let a scroll gesture come to rest at this virtual index
    #[arg(long)]
    pub settle: Option<usize>,

    /// Number of carousel replicas (even, at least 2)
    #[arg(short, long, default_value_t = DEFAULT_MULTIPLIER)]
    pub multiplier: usize,
}

impl Default for CarouselArgs {
    fn default() -> Self {
        Self {
            select: None,
            settle: None,
            multiplier: DEFAULT_MULTIPLIER,
        }
    }
}
