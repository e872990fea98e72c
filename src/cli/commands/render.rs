//! One-shot page rendering.
//!
//! Runs the startup transition (plus optional section/topic selection) and
//! prints the assembled host page, or just the content region, to stdout.
//! Fetch failures render as inline fragments exactly as they would in a
//! browser session, so the command itself only fails on setup problems.

use std::sync::Arc;

use tracing::warn;

use crate::cli::args::RenderArgs;
use crate::cli::commands::site_config;
use crate::error::DocdeckError;
use crate::fetch::HttpFetcher;
use crate::nav::view::PageSurface;
use crate::nav::{NavAction, NavigationController};
use crate::theme::ThemeStore;

/// Page title used for one-shot renders.
const PAGE_TITLE: &str = "Documentation";

/// Render the page once and print it.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the HTTP client
/// cannot be built.
pub async fn run(args: &RenderArgs) -> Result<(), DocdeckError> {
    let config = site_config(&args.site)?;
    let fetcher = Arc::new(HttpFetcher::new(&config)?);
    let theme = ThemeStore::new(config.theme_file_path());

    let mut controller = NavigationController::new(
        fetcher,
        theme,
        args.viewport_width,
        config.mobile_breakpoint,
        PageSurface::new(),
    );
    controller.dispatch(NavAction::Startup).await;

    if controller.manifest().is_none() {
        warn!("manifest unavailable; the rendered page carries the error fragment");
    } else {
        if let Some(section) = &args.section {
            controller
                .dispatch(NavAction::SelectSection {
                    section: section.clone(),
                })
                .await;
        }
        if let Some(topic) = &args.topic {
            match controller.query(topic).into_iter().next() {
                Some(record) => controller.dispatch(NavAction::SearchPick { record }).await,
                None => warn!(topic = %topic, "no topic matches, keeping default selection"),
            }
        }
    }

    let surface = controller.into_surface();
    if args.content_only {
        println!("{}", surface.content());
    } else {
        print!("{}", surface.to_page(PAGE_TITLE));
    }
    Ok(())
}
