mod common;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use common::{desktop_controller, fixture_fetcher, temp_theme};
use docdeck::nav::NavAction;
use docdeck::search::SearchRecord;

/// A router over a started desktop session with the fixture content.
async fn fixture_router() -> (tempfile::TempDir, Router) {
    let (dir, theme) = temp_theme();
    let mut controller = desktop_controller(fixture_fetcher(), theme);
    controller.dispatch(NavAction::Startup).await;
    (dir, docdeck::server::router(controller))
}

async fn get_page(app: &Router, uri: &str) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    String::from_utf8(bytes.to_vec()).expect("utf-8 page")
}

#[tokio::test]
async fn index_serves_the_assembled_host_page() {
    let (_dir, app) = fixture_router().await;
    let page = get_page(&app, "/").await;

    for id in [
        "topicsMenu",
        "sidebarMenu",
        "content",
        "toc",
        "searchInput",
        "darkModeToggle",
        "sidebarToggle",
    ] {
        assert!(page.contains(&format!(r#"id="{id}""#)), "page carries {id}");
    }
    // Startup lands on the python guide
    assert!(page.contains("<h2 id=\"Setup\">Setup</h2>"));
    assert!(page.contains("topic-link active"));
}

#[tokio::test]
async fn section_route_switches_sidebar_and_content() {
    let (_dir, app) = fixture_router().await;
    let page = get_page(&app, "/t/sql").await;

    assert!(page.contains("SQL topics body."));
    assert!(page.contains(r#"data-path="sql/advanced.md""#));
    assert!(!page.contains("Guide body."));
}

#[tokio::test]
async fn entry_route_loads_the_requested_document() {
    let (_dir, app) = fixture_router().await;
    let page = get_page(&app, "/d/python/basics.md").await;

    assert!(page.contains("Basics body."));
    assert!(page.contains("sidebar-link active"));
}

#[tokio::test]
async fn unknown_entry_renders_an_inline_fragment() {
    let (_dir, app) = fixture_router().await;
    let page = get_page(&app, "/d/python/missing.md").await;

    assert!(page.contains("content-error"));
    assert!(page.contains("python/missing.md"));
}

#[tokio::test]
async fn search_endpoint_returns_capped_json() {
    let (_dir, app) = fixture_router().await;
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/search?q=guide")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    let hits: Vec<SearchRecord> = serde_json::from_slice(&bytes).expect("json hits");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Guide");
    assert!(hits.len() <= 8);
}

#[tokio::test]
async fn empty_search_query_returns_no_hits() {
    let (_dir, app) = fixture_router().await;
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/search")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    let hits: Vec<SearchRecord> = serde_json::from_slice(&bytes).expect("json hits");
    assert!(hits.is_empty());
}

#[tokio::test]
async fn theme_toggle_flips_the_served_page() {
    let (_dir, app) = fixture_router().await;
    assert!(!get_page(&app, "/").await.contains("dark-mode"));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/theme/toggle")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert!(get_page(&app, "/").await.contains("dark-mode"));
}
