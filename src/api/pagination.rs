// src/api/pagination.rs
//! Drains a paginated listing by following continuation references.

use super::responses::SearchResponse;
use crate::error::AppError;
use crate::types::ContinuationRef;

/// Everything collected from a drained listing.
#[derive(Debug, Clone)]
pub struct PaginationResult<T> {
    pub items: Vec<T>,
    pub pages_fetched: u32,
    /// Set when `max_pages` stopped the drain before the listing ended
    pub truncated_at: Option<ContinuationRef>,
}

/// Fetches pages until the listing states no continuation or `max_pages` is hit.
///
/// `fetch_fn` receives `None` for the first page and the previous page's
/// continuation afterwards.
pub async fn fetch_all_pages<T, F, Fut>(
    mut fetch_fn: F,
    max_pages: Option<u32>,
) -> Result<PaginationResult<T>, AppError>
where
    F: FnMut(Option<ContinuationRef>) -> Fut,
    Fut: std::future::Future<Output = Result<SearchResponse<T>, AppError>>,
{
    let mut all_items = Vec::new();
    let mut cursor = None;
    let mut pages_fetched = 0u32;

    loop {
        if let Some(max) = max_pages {
            if pages_fetched >= max {
                log::debug!("Reached maximum page limit: {}", max);
                break;
            }
        }

        let response = fetch_fn(cursor).await?;
        cursor = response.continuation();
        all_items.extend(response.results);
        pages_fetched += 1;

        if cursor.is_none() {
            break;
        }
    }

    Ok(PaginationResult {
        items: all_items,
        pages_fetched,
        truncated_at: cursor,
    })
}
