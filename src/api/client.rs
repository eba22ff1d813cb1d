// src/api/client.rs
//! HTTP client for the content API.
//!
//! Thin wrapper around reqwest: builds search URLs, resolves the master ref
//! once, and hands raw bodies to the parser. No retries, no caching.

use super::parser;
use super::responses::{RawDocument, SearchPage};
use super::{ContentRepository, ListQuery};
use crate::error::AppError;
use crate::types::{AccessToken, ApiEndpoint, ContinuationRef, DocumentType, PostUid};
use reqwest::{header, Client, Response};
use tokio::sync::OnceCell;
use url::Url;

const SEARCH_PATH: &str = "documents/search";

/// A thin wrapper around reqwest Client for content API requests.
pub struct PrismicHttpClient {
    client: Client,
    endpoint: ApiEndpoint,
    access_token: Option<AccessToken>,
    master_ref: OnceCell<String>,
}

impl PrismicHttpClient {
    pub fn new(endpoint: ApiEndpoint, access_token: Option<AccessToken>) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers())
            .user_agent(concat!("spacetraveling/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint,
            access_token,
            master_ref: OnceCell::new(),
        })
    }

    fn create_headers() -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers
    }

    /// Makes a GET request to a fully built URL.
    pub async fn get(&self, url: Url) -> Result<Response, AppError> {
        log::debug!("GET {}", redact_token(&url));
        let response = self.client.get(url).send().await?;
        log::debug!("  -> {}", response.status());
        Ok(response)
    }

    /// The repository's current master ref, fetched once per client.
    pub async fn master_ref(&self) -> Result<&str, AppError> {
        let reference = self
            .master_ref
            .get_or_try_init(|| async {
                let mut url = self.endpoint.as_url().clone();
                if let Some(token) = &self.access_token {
                    url.query_pairs_mut()
                        .append_pair("access_token", token.as_str());
                }
                let response = self.get(url).await?;
                let result = extract_response_text(response).await?;
                let reference = parser::parse_master_ref(result)?;
                log::info!("Using master ref {}", reference);
                Ok::<String, AppError>(reference)
            })
            .await?;
        Ok(reference.as_str())
    }

    /// Builds a search URL for a set of predicates.
    pub fn search_url(
        &self,
        master_ref: &str,
        predicate: &str,
        page_size: Option<u32>,
        page: Option<u32>,
        orderings: Option<&str>,
    ) -> Url {
        let mut url = self.endpoint.join(SEARCH_PATH);
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("ref", master_ref);
            pairs.append_pair("q", predicate);
            if let Some(size) = page_size {
                pairs.append_pair("pageSize", &size.to_string());
            }
            if let Some(page) = page {
                pairs.append_pair("page", &page.to_string());
            }
            if let Some(orderings) = orderings {
                pairs.append_pair("orderings", orderings);
            }
            if let Some(token) = &self.access_token {
                pairs.append_pair("access_token", token.as_str());
            }
        }
        url
    }

    async fn search(&self, url: Url) -> Result<SearchPage, AppError> {
        let response = self.get(url).await?;
        let result = extract_response_text(response).await?;
        parser::parse_search_page(result)
    }
}

#[async_trait::async_trait]
impl ContentRepository for PrismicHttpClient {
    async fn query_by_type(&self, query: &ListQuery) -> Result<SearchPage, AppError> {
        let master_ref = self.master_ref().await?;
        let url = self.search_url(
            master_ref,
            &query.document_type.type_predicate(),
            Some(query.page_size),
            Some(query.page),
            query.orderings.as_deref(),
        );
        self.search(url).await
    }

    async fn fetch_continuation(&self, next: &ContinuationRef) -> Result<SearchPage, AppError> {
        // Absolute continuations are used verbatim; relative ones resolve against the endpoint.
        let url = self.endpoint.as_url().join(next.as_str())?;
        self.search(url).await
    }

    async fn get_by_uid(
        &self,
        document_type: &DocumentType,
        uid: &PostUid,
    ) -> Result<Option<RawDocument>, AppError> {
        let master_ref = self.master_ref().await?;
        let url = self.search_url(
            master_ref,
            &document_type.uid_predicate(uid),
            Some(1),
            None,
            None,
        );
        let page = self.search(url).await?;
        Ok(page.results.into_iter().next())
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = redact_token(response.url());
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}

/// Renders a URL for logs and error messages without its access token.
fn redact_token(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| k == "access_token") {
        return url.to_string();
    }

    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let value = if k == "access_token" {
                "***".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), value)
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
