//! Remote content source abstraction.
//!
//! Provides the [`Fetch`] trait for retrieving raw document text by relative
//! path, with an HTTP implementation backed by `reqwest` and an in-memory
//! implementation for embedding and tests. All navigation-level code goes
//! through this seam so state transitions are testable without a network.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::config::SiteConfig;
use crate::error::ContentError;

/// Result type alias for fetch operations.
pub type Result<T> = std::result::Result<T, ContentError>;

/// Async source of raw document text.
///
/// Implementations resolve a relative path (e.g. `python/guide.md` or
/// `menu.json`) to UTF-8 text. Errors carry the path so the UI can name
/// the failed document inline.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Retrieves the raw text at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Transport`] when the request cannot be
    /// completed and [`ContentError::HttpStatus`] on a non-2xx answer.
    async fn fetch_text(&self, path: &str) -> Result<String>;
}

/// HTTP fetcher resolving paths against a fixed remote base URL.
///
/// No redirect surprises are expected from the content host; requests are
/// sequential and share one connection pool.
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFetcher {
    /// Creates a fetcher from the site configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.fetch_timeout_ms))
            .build()
            .map_err(|e| ContentError::Transport {
                path: String::new(),
                message: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String> {
        let url = self.url_for(path);
        debug!(url = %url, "fetching document");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ContentError::Transport {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::HttpStatus {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| ContentError::Transport {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

/// In-memory fetcher over a fixed path → text map.
///
/// Used for embedded content and for exercising the navigation layer
/// without a network. Unknown paths answer like a remote 404.
#[derive(Debug, Default, Clone)]
pub struct StaticFetcher {
    documents: HashMap<String, String>,
}

impl StaticFetcher {
    /// Creates an empty fetcher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document, replacing any previous text at the same path.
    #[must_use]
    pub fn with_document(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        self.documents.insert(path.into(), text.into());
        self
    }
}

#[async_trait]
impl Fetch for StaticFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| ContentError::HttpStatus {
                path: path.to_string(),
                status: 404,
            })
    }
}
