// tests/common/mod.rs
//! Shared fixtures and an in-memory content repository.

#![allow(dead_code)]

use spacetraveling::{
    AppError, ContentRepository, ContinuationRef, DocumentType, ListQuery, PostUid, RawDocument,
    SearchPage,
};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn load_fixture<T: serde::de::DeserializeOwned>(name: &str) -> T {
    let raw = std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("fixture {} unreadable: {}", name, e));
    serde_json::from_str(&raw).unwrap_or_else(|e| panic!("fixture {} invalid: {}", name, e))
}

/// A search page holding `uids`, each with a title derived from the uid.
pub fn page_of(uids: &[&str], next_page: Option<&str>) -> SearchPage {
    let results: Vec<serde_json::Value> = uids
        .iter()
        .map(|uid| {
            serde_json::json!({
                "id": format!("id-{}", uid),
                "uid": uid,
                "type": "publication",
                "first_publication_date": "2021-03-25T19:25:28+0000",
                "tags": ["extra"],
                "data": {
                    "title": format!("Title {}", uid),
                    "subtitle": format!("Subtitle {}", uid),
                    "author": "Autor",
                    "banner": { "url": "https://images.prismic.io/x.png" },
                    "content": []
                }
            })
        })
        .collect();

    serde_json::from_value(serde_json::json!({
        "page": 1,
        "results_per_page": uids.len(),
        "next_page": next_page,
        "results": results,
    }))
    .unwrap()
}

/// Blocks `fetch_continuation` until released, announcing when it started.
#[derive(Default)]
pub struct FetchGate {
    pub started: Notify,
    pub release: Notify,
}

/// In-memory repository. Continuation pages are keyed by their URL.
#[derive(Default)]
pub struct InMemoryRepository {
    pub initial: Option<SearchPage>,
    pub continuations: HashMap<String, SearchPage>,
    pub documents: HashMap<String, RawDocument>,
    pub gate: Option<Arc<FetchGate>>,
    pub fail_continuations: bool,
    pub list_queries: Mutex<Vec<ListQuery>>,
    pub continuation_fetches: AtomicUsize,
    pub uid_lookups: AtomicUsize,
}

impl InMemoryRepository {
    pub fn new(initial: SearchPage) -> Self {
        Self {
            initial: Some(initial),
            ..Default::default()
        }
    }

    pub fn with_continuation(mut self, url: &str, page: SearchPage) -> Self {
        self.continuations.insert(url.to_string(), page);
        self
    }

    pub fn with_document(mut self, document: RawDocument) -> Self {
        let uid = document.uid.clone().unwrap_or_default();
        self.documents.insert(uid, document);
        self
    }

    pub fn with_gate(mut self, gate: Arc<FetchGate>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn continuation_fetches(&self) -> usize {
        self.continuation_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ContentRepository for InMemoryRepository {
    async fn query_by_type(&self, query: &ListQuery) -> Result<SearchPage, AppError> {
        self.list_queries.lock().unwrap().push(query.clone());
        self.initial
            .clone()
            .ok_or_else(|| AppError::MalformedResponse("no initial page".to_string()))
    }

    async fn fetch_continuation(&self, next: &ContinuationRef) -> Result<SearchPage, AppError> {
        self.continuation_fetches.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            gate.started.notify_one();
            gate.release.notified().await;
        }

        if self.fail_continuations {
            return Err(AppError::MalformedResponse("connection reset".to_string()));
        }

        self.continuations
            .get(next.as_str())
            .cloned()
            .ok_or_else(|| AppError::MalformedResponse(format!("unknown page {}", next)))
    }

    async fn get_by_uid(
        &self,
        _document_type: &DocumentType,
        uid: &PostUid,
    ) -> Result<Option<RawDocument>, AppError> {
        self.uid_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.documents.get(uid.as_str()).cloned())
    }
}
