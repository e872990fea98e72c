//! Document fetching and rendering.
//!
//! [`ContentFetcher`] retrieves raw Markdown by relative path, normalizes
//! line endings, and converts it to HTML. This is the boundary where fetch
//! failures stop being errors: a failed request becomes a visible inline
//! fragment naming the path and the message, so the UI always receives a
//! string and never a panic or a propagated error.

use std::sync::Arc;

use tracing::warn;

use crate::error::ContentError;
use crate::fetch::Fetch;
use crate::render::{escape_html, render_or_escape};

/// A rendered document, or the inline fragment standing in for one.
#[derive(Debug, Clone)]
pub struct RenderedContent {
    /// HTML for the content container. Always present.
    pub html: String,
    /// The fetch error this fragment stands in for, if any.
    pub error: Option<ContentError>,
}

impl RenderedContent {
    /// Whether this content is an error fragment rather than a document.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Builds the inline fragment shown when a document fails to load.
#[must_use]
pub fn error_fragment(path: &str, message: &str) -> String {
    format!(
        "<div class=\"content-error\">Failed to load <b>{}</b><br>{}</div>",
        escape_html(path),
        escape_html(message)
    )
}

/// Fetches documents and renders them to HTML.
pub struct ContentFetcher {
    fetcher: Arc<dyn Fetch>,
}

impl ContentFetcher {
    /// Creates a fetcher over the given source.
    #[must_use]
    pub fn new(fetcher: Arc<dyn Fetch>) -> Self {
        Self { fetcher }
    }

    /// Retrieves and renders the document at `path`.
    ///
    /// Never fails: non-2xx answers and transport errors come back as an
    /// inline error fragment, and Markdown conversion failure degrades to
    /// escaped text inside a `<pre>` block.
    pub async fn fetch_rendered(&self, path: &str) -> RenderedContent {
        match self.fetcher.fetch_text(path).await {
            Ok(raw) => {
                let normalized = raw.replace("\r\n", "\n");
                RenderedContent {
                    html: render_or_escape(&normalized),
                    error: None,
                }
            }
            Err(err) => {
                warn!(path = %path, error = %err, "document fetch failed");
                let message = match &err {
                    ContentError::Transport { message, .. } => message.clone(),
                    ContentError::HttpStatus { status, .. } => format!("HTTP {status}"),
                };
                RenderedContent {
                    html: error_fragment(path, &message),
                    error: Some(err),
                }
            }
        }
    }
}
