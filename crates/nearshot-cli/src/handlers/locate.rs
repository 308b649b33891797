//! Locate command handler.
//!
//! Resolves the place name for the current position, retrieves photos taken
//! near it and centers a carousel on the first one.

use anyhow::Result;
use nearshot_core::{
    CarouselIndexer, CoreError, GeolocateOutcome, Photo, ResolvedLocation, RetrievalOutcome,
};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_photo_table;

/// What a `locate` run produced.
#[derive(Debug)]
pub struct LocateReport {
    pub resolved: ResolvedLocation,
    pub retrieval: RetrievalOutcome,
    pub photos: Vec<Photo>,
    /// Carousel center after configuration, `None` when no photos came back.
    pub centered: Option<usize>,
}

pub async fn run(ctx: &CliContext) -> Result<LocateReport, CliError> {
    match ctx.orchestrator().geolocate().await {
        GeolocateOutcome::Completed {
            resolved,
            retrieval,
        } => {
            let retrieval = retrieval?;
            let photos = ctx.orchestrator().photos();
            let centered = CarouselIndexer::default().update_photos(photos.clone());
            Ok(LocateReport {
                resolved,
                retrieval,
                photos,
                centered,
            })
        }
        GeolocateOutcome::LocationFailed(err) => Err(err.into()),
        GeolocateOutcome::AlreadyInFlight => Err(CoreError::InFlight.into()),
        GeolocateOutcome::Cancelled => Err(CoreError::Cancelled.into()),
    }
}

/// Execute the locate command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let report = run(ctx).await?;

    println!(
        "You are near {} ({:.4}, {:.4})",
        report.resolved.name,
        report.resolved.location.latitude,
        report.resolved.location.longitude
    );

    if report.photos.is_empty() {
        println!("No photos found nearby.");
        return Ok(());
    }

    if let RetrievalOutcome::Superseded { .. } = report.retrieval {
        println!("A newer retrieval finished first; showing its photos.");
    }
    println!("Found {} photo(s):\n", report.photos.len());
    print_photo_table(&report.photos);
    if let Some(center) = report.centered {
        println!("\nCarousel centered at index {center}");
    }

    Ok(())
}
