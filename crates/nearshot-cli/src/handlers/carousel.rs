//! Carousel command handler.
//!
//! Lays the retrieved photos out on a circular window, centers it, and
//! replays a tap and a settled scroll the way a display surface would.

use anyhow::Result;
use nearshot_core::{CarouselIndexer, Photo};

use super::retrieve_photos;
use crate::bootstrap::CliContext;
use crate::commands::CarouselArgs;
use crate::error::CliError;
use crate::presentation::truncate_string;

/// A tapped item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub virtual_index: usize,
    pub base_index: usize,
    pub photo: Photo,
}

/// What a `carousel` run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselReport {
    pub base_len: usize,
    pub multiplier: usize,
    pub item_count: usize,
    pub centered: Option<usize>,
    pub selected: Option<Selection>,
    /// Center after the scroll settled.
    pub settled: Option<usize>,
}

pub async fn run(ctx: &CliContext, args: CarouselArgs) -> Result<CarouselReport, CliError> {
    let mut indexer = CarouselIndexer::new(args.multiplier)?;
    let (_, photos) = retrieve_photos(ctx).await?;
    let centered = indexer.update_photos(photos);

    let selected = match args.select {
        Some(virtual_index) => Some(Selection {
            virtual_index,
            base_index: indexer.window().base_index(virtual_index)?,
            photo: indexer.select(virtual_index)?.clone(),
        }),
        None => None,
    };
    let settled = args.settle.map(|index| indexer.settle(index)).transpose()?;

    Ok(CarouselReport {
        base_len: indexer.photos().len(),
        multiplier: indexer.multiplier(),
        item_count: indexer.item_count(),
        centered,
        selected,
        settled,
    })
}

/// Execute the carousel command.
pub async fn execute(ctx: &CliContext, args: CarouselArgs) -> Result<()> {
    let report = run(ctx, args).await?;

    println!(
        "{} photo(s) x {} replicas = {} items",
        report.base_len, report.multiplier, report.item_count
    );
    match report.centered {
        Some(center) => println!("Centered at index {center}"),
        None => println!("No photos; carousel is empty"),
    }
    if let Some(selection) = &report.selected {
        println!(
            "Tapped {} -> photo {} \"{}\"",
            selection.virtual_index,
            selection.base_index,
            truncate_string(&selection.photo.title, 40)
        );
    }
    if let (Some(nearest), Some(center)) = (args.settle, report.settled) {
        println!("Settled at {nearest} -> recentered at {center}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeGeolocation, offline_context};

    #[tokio::test]
    async fn test_carousel_select_and_settle() {
        let ctx = offline_context(FakeGeolocation::denied());
        let args = CarouselArgs {
            select: Some(45),
            settle: Some(45),
            ..CarouselArgs::default()
        };

        let report = run(&ctx, args).await.unwrap();
        assert_eq!(report.base_len, 22);
        assert_eq!(report.item_count, 220);
        assert_eq!(report.centered, Some(110));
        assert_eq!(report.settled, Some(111));

        let selection = report.selected.unwrap();
        assert_eq!(selection.base_index, 1);
        assert_eq!(selection.photo, ctx.orchestrator().photos()[1]);
    }

    #[tokio::test]
    async fn test_carousel_custom_multiplier() {
        let ctx = offline_context(FakeGeolocation::denied());
        let args = CarouselArgs {
            multiplier: 2,
            settle: Some(0),
            ..CarouselArgs::default()
        };

        let report = run(&ctx, args).await.unwrap();
        assert_eq!(report.item_count, 44);
        assert_eq!(report.centered, Some(22));
        assert_eq!(report.settled, Some(22));
        assert!(report.selected.is_none());
    }

    #[tokio::test]
    async fn test_carousel_odd_multiplier_is_rejected() {
        let ctx = offline_context(FakeGeolocation::denied());
        let args = CarouselArgs {
            multiplier: 3,
            ..CarouselArgs::default()
        };

        let err = run(&ctx, args).await.unwrap_err();
        assert!(matches!(err, CliError::Arguments(_)));
        assert!(ctx.orchestrator().photos().is_empty());
    }
}
