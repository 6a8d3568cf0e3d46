use async_trait::async_trait;
use release_notes_graph::prelude::*;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Mock DocumentFetcher serving JSON fixtures by URL
///
/// Unknown URLs are reported as absent, the way a 404 is. URLs registered
/// with `with_failure` fail with a 503 status fault.
pub struct MockDocumentFetcher {
    documents: HashMap<String, Value>,
    failures: HashSet<String>,
    call_count: AtomicUsize,
    requested: Mutex<Vec<String>>,
}

impl MockDocumentFetcher {
    pub fn new() -> Self {
        Self {
            documents: HashMap::new(),
            failures: HashSet::new(),
            call_count: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn with_document(mut self, url: impl Into<String>, body: Value) -> Self {
        self.documents.insert(url.into(), body);
        self
    }

    pub fn with_failure(mut self, url: impl Into<String>) -> Self {
        self.failures.insert(url.into());
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// URLs requested so far, in request order
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }

    pub fn was_requested(&self, url: &str) -> bool {
        self.requested.lock().unwrap().iter().any(|u| u == url)
    }

    pub fn request_count(&self, url: &str) -> usize {
        self.requested
            .lock()
            .unwrap()
            .iter()
            .filter(|u| *u == url)
            .count()
    }
}

impl Default for MockDocumentFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentFetcher for MockDocumentFetcher {
    async fn fetch(&self, url: &str, kind: DocumentKind) -> Result<Option<Document>> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(url.to_string());

        if self.failures.contains(url) {
            return Err(GraphError::Status {
                url: url.to_string(),
                status: 503,
            });
        }

        let Some(body) = self.documents.get(url) else {
            return Ok(None);
        };

        let bytes = serde_json::to_vec(body).unwrap();
        kind.decode(&bytes)
            .map(Some)
            .map_err(|source| GraphError::Decode {
                url: url.to_string(),
                kind,
                source,
            })
    }
}
