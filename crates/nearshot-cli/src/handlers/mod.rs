//! Command handlers that drive the retrieval orchestrator.
//!
//! Handlers follow the canonical pattern:
//! - `run(ctx, ...)` does the work and returns a report
//! - `execute(ctx, ...)` calls `run` and formats the report for the terminal
//!
//! Handlers should NOT contain retrieval or windowing logic; that belongs to
//! nearshot-core.

pub mod carousel;
pub mod locate;
pub mod photos;
pub mod show;

use nearshot_core::{Photo, RetrievalOutcome};
use tracing::debug;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Retrieve for the cached position (or trending) and return the stored list.
async fn retrieve_photos(ctx: &CliContext) -> Result<(RetrievalOutcome, Vec<Photo>), CliError> {
    let outcome = ctx.orchestrator().request_photos().await?;
    let photos = ctx.orchestrator().photos();
    debug!(?outcome, count = photos.len(), "Photos retrieved");
    Ok((outcome, photos))
}
