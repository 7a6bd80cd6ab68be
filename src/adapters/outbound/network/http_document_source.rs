use crate::ports::outbound::DocumentSource;
use crate::shared::error::HistoryError;
use crate::shared::Result;
use async_trait::async_trait;
use serde_json::Value;

/// HttpDocumentSource adapter fetching documents from the published repository
///
/// Documents are requested relative to a base URL. There is no timeout and
/// no retry: a failed request is reported once and the page degrades.
pub struct HttpDocumentSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDocumentSource {
    /// Creates a source rooted at `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("pkg-history/{}", version);
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Joins the base URL and a document path with exactly one slash
    fn document_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Validates a document path before it becomes part of a URL
    fn validate_path(path: &str) -> std::result::Result<(), HistoryError> {
        // Security: Prevent URL injection attacks
        let unsafe_path = path.contains("..")
            || path.contains('\\')
            || path.contains('#')
            || path.contains('?')
            || path.contains('@');
        if path.trim().is_empty() || unsafe_path {
            return Err(HistoryError::Validation {
                message: format!("Security: document path '{}' is not allowed", path),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentSource for HttpDocumentSource {
    async fn fetch_document(&self, path: &str) -> std::result::Result<Value, HistoryError> {
        Self::validate_path(path)?;
        let url = self.document_url(path);
        tracing::debug!(%url, "fetching document");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| HistoryError::Network {
                location: url.clone(),
                details: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(HistoryError::Fetch {
                location: url,
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| HistoryError::Network {
            location: url.clone(),
            details: e.to_string(),
        })?;

        serde_json::from_str(&body).map_err(|e| HistoryError::Parse {
            location: url,
            details: e.to_string(),
        })
    }

    fn describe(&self, path: &str) -> String {
        self.document_url(path)
    }
}
