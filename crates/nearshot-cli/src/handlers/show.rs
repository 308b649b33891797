//! Show command handler.

use anyhow::Result;
use nearshot_core::{CarouselIndexer, PhotoDetail};

use super::retrieve_photos;
use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_detail;

pub async fn run(
    ctx: &CliContext,
    virtual_index: usize,
    multiplier: usize,
) -> Result<PhotoDetail, CliError> {
    let mut indexer = CarouselIndexer::new(multiplier)?;
    let (_, photos) = retrieve_photos(ctx).await?;
    indexer.update_photos(photos);
    let photo = indexer.item_at(virtual_index)?;
    Ok(PhotoDetail::new(photo.clone()))
}

/// Execute the show command.
///
/// Prints the detail view for the photo a tap on `virtual_index` would open.
pub async fn execute(ctx: &CliContext, virtual_index: usize, multiplier: usize) -> Result<()> {
    let detail = run(ctx, virtual_index, multiplier).await?;
    print_detail(&detail);
    Ok(())
}
