//! Detail resolution for the visible window.

use futures::stream::{self, StreamExt, TryStreamExt};

use crate::catalog::{CatalogApi, CatalogError, CatalogItem, CatalogItemDetail};

/// Fetch the detail record of every item, at most `max_parallel` at a time,
/// and return them ascending by id.
///
/// Completion order does not matter. Any single failure fails the batch.
pub async fn resolve_details(
    api: &dyn CatalogApi,
    items: &[CatalogItem],
    max_parallel: usize,
) -> Result<Vec<CatalogItemDetail>, CatalogError> {
    // Build the futures up front so the stream holds no borrowing closure
    let fetches: Vec<_> = items
        .iter()
        .map(|item| api.fetch_detail(&item.detail_reference))
        .collect();

    let mut details: Vec<CatalogItemDetail> = stream::iter(fetches)
        .buffer_unordered(max_parallel.max(1))
        .try_collect()
        .await?;

    details.sort_by_key(|d| d.id);
    Ok(details)
}
