//! Photos command handler.

use anyhow::Result;

use super::retrieve_photos;
use crate::bootstrap::CliContext;
use crate::presentation::print_photo_table;

/// Execute the photos command.
///
/// Searches near the fixed position when one was given, otherwise lists
/// trending photos.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let (_, photos) = retrieve_photos(ctx).await?;

    if photos.is_empty() {
        println!("No photos found.");
        return Ok(());
    }

    println!("Found {} photo(s):\n", photos.len());
    print_photo_table(&photos);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeGeolocation, offline_context};
    use nearshot_core::{PhotoSource, RetrievalOutcome, RetrievalState};

    #[tokio::test]
    async fn test_photos_without_position_are_trending() {
        let ctx = offline_context(FakeGeolocation::denied());

        let (outcome, photos) = retrieve_photos(&ctx).await.unwrap();
        assert_eq!(
            outcome,
            RetrievalOutcome::Updated {
                source: PhotoSource::Trending,
                count: 22
            }
        );
        assert_eq!(photos[0].title, "Portrait of Elisa");
        // A direct request leaves the geolocation state machine alone.
        assert_eq!(ctx.orchestrator().state(), RetrievalState::Idle);
    }

    #[tokio::test]
    async fn test_photos_with_position_search_nearby() {
        let ctx = offline_context(FakeGeolocation::cupertino());

        let (outcome, _) = retrieve_photos(&ctx).await.unwrap();
        assert!(matches!(
            outcome,
            RetrievalOutcome::Updated {
                source: PhotoSource::Nearby,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_execute_succeeds_offline() {
        let ctx = offline_context(FakeGeolocation::denied());
        tokio_test::assert_ok!(execute(&ctx).await);
    }
}
