//! Multi-type filtering: Pokémon that have *every* selected type.

use std::collections::HashSet;

use futures::future::try_join_all;
use tracing::debug;

use crate::catalog::{CatalogApi, CatalogError, CatalogItem, Category};

/// Resolve the membership list of every selected category and intersect them.
///
/// Returns `None` when nothing is selected: filtering is off and the caller
/// must page through the unfiltered catalog instead. Membership lookups are
/// issued concurrently; if any of them fails the whole call fails.
pub async fn compute_intersection(
    api: &dyn CatalogApi,
    selected: &[Category],
) -> Result<Option<Vec<CatalogItem>>, CatalogError> {
    if selected.is_empty() {
        return Ok(None);
    }

    let lookups = selected.iter().map(|category| async move {
        let members = api.list_members_of_category(&category.name).await?;
        Ok::<_, CatalogError>(members.into_iter().map(|m| m.item).collect::<Vec<_>>())
    });
    let lists = try_join_all(lookups).await?;

    let result = intersect_members(lists);

    debug!(
        categories = selected.len(),
        matches = result.len(),
        "Computed type intersection"
    );

    Ok(Some(result))
}

/// Intersect membership lists by item name.
///
/// Order follows the first list. Later lists only decide membership.
pub fn intersect_members(lists: Vec<Vec<CatalogItem>>) -> Vec<CatalogItem> {
    let mut lists = lists.into_iter();
    let Some(mut result) = lists.next() else {
        return Vec::new();
    };

    for list in lists {
        let names: HashSet<&str> = list.iter().map(|item| item.name.as_str()).collect();
        result.retain(|item| names.contains(item.name.as_str()));
    }

    result
}
