use async_trait::async_trait;
use pkg_history::prelude::*;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock DocumentSource serving in-memory JSON documents
///
/// Paths without a document fail with the configured HTTP status (404 by default).
#[derive(Default, Clone)]
pub struct MockDocumentSource {
    documents: HashMap<String, Value>,
    failures: HashMap<String, u16>,
    pub requested: Arc<Mutex<Vec<String>>>,
}

impl MockDocumentSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, path: &str, content: &str) -> Self {
        let value = serde_json::from_str(content).expect("mock document must be valid JSON");
        self.documents.insert(path.to_string(), value);
        self
    }

    pub fn with_failure(mut self, path: &str, status: u16) -> Self {
        self.failures.insert(path.to_string(), status);
        self
    }

    pub fn requested_paths(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentSource for MockDocumentSource {
    async fn fetch_document(&self, path: &str) -> std::result::Result<Value, HistoryError> {
        self.requested.lock().unwrap().push(path.to_string());

        if let Some(value) = self.documents.get(path) {
            return Ok(value.clone());
        }
        Err(HistoryError::Fetch {
            location: self.describe(path),
            status: self.failures.get(path).copied().unwrap_or(404),
        })
    }

    fn describe(&self, path: &str) -> String {
        format!("mock://{}", path)
    }
}
