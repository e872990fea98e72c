//! Local documentation host.
//!
//! Serves the assembled host page over HTTP so a browser can drive the
//! navigation controller: one route per navigation entry point, plus a JSON
//! search endpoint. The server holds a single session (it stands in for one
//! open page); every request dispatches an action and renders the surface.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, Json};
use axum::routing::{get, post};
use serde::Deserialize;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tracing::info;

use crate::config::SiteConfig;
use crate::error::DocdeckError;
use crate::fetch::HttpFetcher;
use crate::nav::view::PageSurface;
use crate::nav::{NavAction, NavigationController};
use crate::search::SearchRecord;
use crate::theme::ThemeStore;

/// Viewport width assumed for the served session. The browser host is a
/// desktop window; mobile flows are covered by the library API.
pub const SERVED_VIEWPORT_WIDTH: u32 = 1280;

/// Page title of the served host page.
const PAGE_TITLE: &str = "Documentation";

/// Shared state behind the axum handlers: one controller, one session.
pub struct AppState {
    controller: Mutex<NavigationController<PageSurface>>,
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

/// Builds the router over an already-started controller.
#[must_use]
pub fn router(controller: NavigationController<PageSurface>) -> Router {
    let state = Arc::new(AppState {
        controller: Mutex::new(controller),
    });
    Router::new()
        .route("/", get(index))
        .route("/t/{section}", get(select_section))
        .route("/d/{*path}", get(select_entry))
        .route("/search", get(search))
        .route("/theme/toggle", post(toggle_theme))
        .with_state(state)
}

/// Starts the local host on `bind_addr` and blocks until shutdown.
///
/// # Errors
///
/// Returns [`DocdeckError`] if the HTTP client cannot be built or the
/// address cannot be bound. Manifest and document failures are not errors
/// here; they render as inline fragments like any other session.
pub async fn serve(config: &SiteConfig, bind_addr: &str) -> Result<(), DocdeckError> {
    let fetcher = Arc::new(HttpFetcher::new(config)?);
    let theme = ThemeStore::new(config.theme_file_path());
    let mut controller = NavigationController::new(
        fetcher,
        theme,
        SERVED_VIEWPORT_WIDTH,
        config.mobile_breakpoint,
        PageSurface::new(),
    );
    controller.dispatch(NavAction::Startup).await;

    let app = router(controller);
    let listener = TcpListener::bind(bind_addr).await?;
    let addr = listener.local_addr()?;
    info!(addr = %addr, "serving documentation");

    axum::serve(listener, app)
        .await
        .map_err(|e| DocdeckError::Server(e.to_string()))
}

async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let controller = state.controller.lock().await;
    Html(controller.surface().to_page(PAGE_TITLE))
}

async fn select_section(
    State(state): State<Arc<AppState>>,
    Path(section): Path<String>,
) -> Html<String> {
    let mut controller = state.controller.lock().await;
    controller
        .dispatch(NavAction::SelectSection { section })
        .await;
    Html(controller.surface().to_page(PAGE_TITLE))
}

async fn select_entry(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
) -> Html<String> {
    let mut controller = state.controller.lock().await;
    // Sidebar links carry section-qualified paths like `python/guide.md`
    let section = path
        .split('/')
        .next()
        .unwrap_or_default()
        .to_string();
    controller
        .dispatch(NavAction::SelectEntry { section, path })
        .await;
    Html(controller.surface().to_page(PAGE_TITLE))
}

async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<SearchRecord>> {
    let controller = state.controller.lock().await;
    Json(controller.query(&params.q))
}

async fn toggle_theme(State(state): State<Arc<AppState>>) -> StatusCode {
    let mut controller = state.controller.lock().await;
    controller.dispatch(NavAction::ToggleDarkMode).await;
    StatusCode::NO_CONTENT
}
