//! The "load more" listing: an initial page plus pages appended on request.

use super::normalize::normalize_page;
use super::state::PaginationState;
use crate::api::{ContentRepository, ListQuery};
use crate::error::AppError;
use std::sync::Arc;
use tokio::sync::Mutex;

/// What a call to [`ListingAccumulator::load_more`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A page was fetched and `count` summaries were appended.
    Appended { count: usize },
    /// There is no continuation; nothing was fetched.
    Exhausted,
    /// Another `load_more` is still running; nothing was fetched.
    InFlight,
}

/// Holds the accumulated listing and appends one page per `load_more`.
///
/// At most one `load_more` runs at a time. A call that overlaps a running one
/// returns [`LoadOutcome::InFlight`] instead of fetching the same page twice.
pub struct ListingAccumulator {
    repository: Arc<dyn ContentRepository>,
    state: Mutex<PaginationState>,
}

impl ListingAccumulator {
    /// Wraps an already resolved state.
    pub fn new(repository: Arc<dyn ContentRepository>, state: PaginationState) -> Self {
        Self {
            repository,
            state: Mutex::new(state),
        }
    }

    /// Runs the list query and seeds the accumulator with its first page.
    pub async fn load_initial(
        repository: Arc<dyn ContentRepository>,
        query: &ListQuery,
    ) -> Result<Self, AppError> {
        log::info!(
            "Loading first page of '{}' ({} per page)",
            query.document_type,
            query.page_size
        );
        let raw = repository.query_by_type(query).await?;
        let page = normalize_page(raw)?;
        log::debug!(
            "Initial page: {} posts, more: {}",
            page.results.len(),
            page.next_page.is_some()
        );

        Ok(Self::new(repository, PaginationState::from_initial(page)))
    }

    /// Fetches the page at the current continuation and appends it.
    ///
    /// With no continuation this is a no-op. Fetch and parse errors are
    /// returned as-is and leave the state untouched.
    pub async fn load_more(&self) -> Result<LoadOutcome, AppError> {
        let Ok(mut state) = self.state.try_lock() else {
            log::debug!("load_more skipped: a page is already being fetched");
            return Ok(LoadOutcome::InFlight);
        };

        let Some(next) = state.next_page.clone() else {
            return Ok(LoadOutcome::Exhausted);
        };

        log::debug!("Loading more posts from {}", next);
        let raw = self.repository.fetch_continuation(&next).await?;
        let page = normalize_page(raw)?;
        let count = page.results.len();

        let current = std::mem::take(&mut *state);
        *state = current.append_page(page);

        log::info!(
            "Appended {} posts ({} total, more: {})",
            count,
            state.len(),
            state.has_more()
        );
        Ok(LoadOutcome::Appended { count })
    }

    /// Calls `load_more` until the listing is exhausted or `max_pages` pages were appended.
    pub async fn load_pages(&self, max_pages: u32) -> Result<u32, AppError> {
        let mut loaded = 0;
        while loaded < max_pages {
            match self.load_more().await? {
                LoadOutcome::Appended { .. } => loaded += 1,
                LoadOutcome::Exhausted | LoadOutcome::InFlight => break,
            }
        }
        Ok(loaded)
    }

    /// Whether a continuation is currently held.
    pub async fn has_more(&self) -> bool {
        self.state.lock().await.has_more()
    }

    /// A copy of the current state.
    pub async fn snapshot(&self) -> PaginationState {
        self.state.lock().await.clone()
    }

    pub fn into_state(self) -> PaginationState {
        self.state.into_inner()
    }
}
