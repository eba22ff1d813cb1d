// src/api/mod.rs
//! Content API interaction — the ability to read documents from a repository.
//!
//! Business logic depends on [`ContentRepository`], never on HTTP details.

pub mod client;
pub mod pagination;
pub mod parser;
pub mod responses;

use crate::constants::{LATEST_FIRST_ORDERING, MAX_LISTING_PAGES};
use crate::error::AppError;
use crate::types::{ContinuationRef, DocumentType, PostUid};
use responses::{RawDocument, SearchPage};

/// A "list" query: one page of documents of a type.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub document_type: DocumentType,
    pub page_size: u32,
    pub page: u32,
    pub orderings: Option<String>,
}

impl ListQuery {
    /// First page of `document_type`, most recently published first.
    pub fn latest_first(document_type: DocumentType, page_size: u32) -> Self {
        Self {
            document_type,
            page_size,
            page: 1,
            orderings: Some(LATEST_FIRST_ORDERING.to_string()),
        }
    }
}

/// The ability to read documents from a content repository.
#[async_trait::async_trait]
pub trait ContentRepository: Send + Sync {
    /// Runs a list query and returns the requested page.
    async fn query_by_type(&self, query: &ListQuery) -> Result<SearchPage, AppError>;

    /// Fetches the page a previous page pointed to.
    async fn fetch_continuation(&self, next: &ContinuationRef) -> Result<SearchPage, AppError>;

    /// Looks a document up by uid. `Ok(None)` means no such document.
    async fn get_by_uid(
        &self,
        document_type: &DocumentType,
        uid: &PostUid,
    ) -> Result<Option<RawDocument>, AppError>;

    /// Every document matching `query`, following continuations to the end.
    async fn list_all(&self, query: &ListQuery) -> Result<Vec<RawDocument>, AppError> {
        let result = pagination::fetch_all_pages(
            move |cursor| async move {
                match cursor {
                    None => self.query_by_type(query).await,
                    Some(next) => self.fetch_continuation(&next).await,
                }
            },
            Some(MAX_LISTING_PAGES),
        )
        .await?;

        if let Some(next) = &result.truncated_at {
            log::warn!(
                "Stopped listing after {} pages; more documents remain at {}",
                result.pages_fetched,
                next
            );
        }

        Ok(result.items)
    }
}

pub use client::PrismicHttpClient;
