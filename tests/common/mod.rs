//! Shared integration-test fixtures: an in-memory content source and a
//! loopback HTTP content server for exercising the real fetch path.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;

use docdeck::fetch::{Fetch, StaticFetcher};
use docdeck::nav::view::PageSurface;
use docdeck::nav::NavigationController;
use docdeck::theme::ThemeStore;

/// Manifest fixture shared across tests.
pub const MENU: &str = r#"{
    "python": [
        {"title": "Guide", "path": "python/guide.md"},
        {"title": "Basics", "path": "python/basics.md"}
    ],
    "sql": [
        {"title": "Topics", "path": "sql/topics.md"},
        {"title": "Advanced", "path": "sql/advanced.md"}
    ]
}"#;

/// In-memory source with the manifest and all fixture documents.
pub fn fixture_fetcher() -> Arc<StaticFetcher> {
    Arc::new(
        StaticFetcher::new()
            .with_document("menu.json", MENU)
            .with_document(
                "python/guide.md",
                "## Setup\n\nGuide body.\n\n### Install\n\nSteps.",
            )
            .with_document("python/basics.md", "## Basics\n\nBasics body.")
            .with_document("sql/topics.md", "## Topics\n\nSQL topics body.")
            .with_document("sql/advanced.md", "## Advanced\n\nSQL advanced body."),
    )
}

/// A theme store in a fresh temp dir. Keep the dir alive for the test.
pub fn temp_theme() -> (tempfile::TempDir, ThemeStore) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = ThemeStore::new(dir.path().join("theme.json"));
    (dir, store)
}

/// A desktop controller over the fixture content.
pub fn desktop_controller(
    fetcher: Arc<StaticFetcher>,
    theme: ThemeStore,
) -> NavigationController<PageSurface> {
    NavigationController::new(fetcher, theme, 1280, 900, PageSurface::new())
}

/// A mobile controller over the fixture content.
pub fn mobile_controller(
    fetcher: Arc<StaticFetcher>,
    theme: ThemeStore,
) -> NavigationController<PageSurface> {
    NavigationController::new(fetcher, theme, 640, 900, PageSurface::new())
}

async fn serve_fixture(Path(path): Path<String>) -> Result<String, StatusCode> {
    let fetcher = fixture_fetcher();
    fetcher
        .fetch_text(&path)
        .await
        .map_err(|_| StatusCode::NOT_FOUND)
}

/// Spawns a loopback HTTP server exposing the fixture documents and returns
/// its address. The server lives until the test process exits.
pub async fn spawn_content_server() -> SocketAddr {
    let app = Router::new().route("/{*path}", get(serve_fixture));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fixture server");
    });
    addr
}
