use crate::models::DiscussionItem;
use crate::tools::DiscussionSource;
use futures::future::join_all;
use tracing::{info, instrument, warn};

/// Queries every source concurrently and concatenates their items in source
/// order. A failing source contributes nothing.
#[instrument(skip_all)]
pub async fn gather_discussions(
    sources: &[Box<dyn DiscussionSource>],
    idea: &str,
) -> Vec<DiscussionItem> {
    let searches = sources.iter().map(|source| async move {
        match source.search(idea).await {
            Ok(items) => {
                info!(source = source.name(), count = items.len(), "Fetched discussions");
                items
            }
            Err(e) => {
                warn!(source = source.name(), "Discussion search failed: {:#}", e);
                Vec::new()
            }
        }
    });

    join_all(searches).await.into_iter().flatten().collect()
}
