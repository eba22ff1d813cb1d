// src/api/responses.rs
//! Wire types of the content API, as returned before normalization.

use crate::types::ContinuationRef;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A document exactly as the search endpoint returns it.
///
/// `data` holds the custom type's fields untouched; normalization into
/// summaries or details picks the fields it needs and drops the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDocument {
    pub id: String,
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(rename = "type", default)]
    pub doc_type: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub first_publication_date: Option<String>,
    #[serde(default)]
    pub last_publication_date: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub data: Value,
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse<T> {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results_per_page: u32,
    #[serde(default)]
    pub results_size: u32,
    #[serde(default)]
    pub total_results_size: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub next_page: Option<String>,
    #[serde(default)]
    pub prev_page: Option<String>,
    pub results: Vec<T>,
}

impl<T> SearchResponse<T> {
    /// The page's stated continuation; empty strings count as absent.
    pub fn continuation(&self) -> Option<ContinuationRef> {
        ContinuationRef::from_optional(self.next_page.clone())
    }
}

/// A search page of raw documents.
pub type SearchPage = SearchResponse<RawDocument>;

/// The API root descriptor; only the refs matter here.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiDescriptor {
    #[serde(default)]
    pub refs: Vec<RefInfo>,
}

impl ApiDescriptor {
    pub fn master_ref(&self) -> Option<&RefInfo> {
        self.refs.iter().find(|r| r.is_master_ref)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefInfo {
    pub id: String,
    #[serde(rename = "ref")]
    pub reference: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "isMasterRef", default)]
    pub is_master_ref: bool,
}

/// Error body of the content API. Older endpoints use `error`, newer ones `type`.
#[derive(Debug, Clone, Deserialize)]
pub struct PrismicErrorBody {
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl PrismicErrorBody {
    pub fn code(&self) -> Option<&str> {
        self.error_type.as_deref().or(self.error.as_deref())
    }
}
