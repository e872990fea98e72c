//! Navigation controller.
//!
//! Drives manifest, search, content, and TOC in response to [`NavAction`]s
//! and writes the results to the host [`Surface`]. All session state lives
//! in one owned [`SessionState`]; nothing is ambient, so independent
//! controllers never interfere.
//!
//! Network failures never leave this layer: a failed manifest load replaces
//! the topic menu and sidebar with an inline fragment, and document failures
//! arrive from the content boundary already rendered as fragments.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::content::{ContentFetcher, RenderedContent};
use crate::fetch::Fetch;
use crate::manifest::{Manifest, ManifestLoader};
use crate::nav::action::NavAction;
use crate::nav::state::{RequestToken, SessionState, ViewportMode};
use crate::nav::view::{self, Surface};
use crate::search::{SearchIndex, SearchRecord};
use crate::theme::ThemeStore;
use crate::toc;

/// The navigation state machine.
pub struct NavigationController<S: Surface> {
    manifest_loader: ManifestLoader,
    content: ContentFetcher,
    theme: ThemeStore,
    mobile_breakpoint: u32,
    manifest: Option<Arc<Manifest>>,
    search: SearchIndex,
    state: SessionState,
    surface: S,
}

impl<S: Surface> NavigationController<S> {
    /// Creates a controller for one session.
    ///
    /// The viewport mode is decided here, once, from the given width; later
    /// resizes only affect the sidebar-open substate.
    #[must_use]
    pub fn new(
        fetcher: Arc<dyn Fetch>,
        theme: ThemeStore,
        viewport_width: u32,
        mobile_breakpoint: u32,
        surface: S,
    ) -> Self {
        let viewport = ViewportMode::from_width(viewport_width, mobile_breakpoint);
        Self {
            manifest_loader: ManifestLoader::new(Arc::clone(&fetcher)),
            content: ContentFetcher::new(fetcher),
            theme,
            mobile_breakpoint,
            manifest: None,
            search: SearchIndex::default(),
            state: SessionState::new(viewport),
            surface,
        }
    }

    /// Current session state.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The loaded manifest, `None` until startup succeeds.
    #[must_use]
    pub fn manifest(&self) -> Option<&Arc<Manifest>> {
        self.manifest.as_ref()
    }

    /// The host surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Consumes the controller, returning the surface.
    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Answers a search query from the session index.
    #[must_use]
    pub fn query(&self, text: &str) -> Vec<SearchRecord> {
        self.search.query(text).into_iter().cloned().collect()
    }

    /// Dispatches one navigation action.
    ///
    /// Infallible by contract: every failure becomes a surface update.
    pub async fn dispatch(&mut self, action: NavAction) {
        debug!(?action, "dispatching");
        match action {
            NavAction::Startup => self.startup().await,
            NavAction::SelectSection { section } => self.select_section(&section).await,
            NavAction::SelectEntry { section, path } => self.select_entry(&section, &path).await,
            NavAction::MobileNext => self.mobile_step(1).await,
            NavAction::MobilePrev => self.mobile_step(-1).await,
            NavAction::SearchPick { record } => self.search_pick(record).await,
            NavAction::ToggleDarkMode => self.toggle_dark_mode(),
            NavAction::ToggleSidebar => self.toggle_sidebar(),
            NavAction::Resize { width } => self.resize(width),
        }
    }

    async fn startup(&mut self) {
        let dark = self.theme.load();
        self.state.dark_mode = dark;
        self.surface.set_dark_mode(dark);

        let manifest = match self.manifest_loader.load().await {
            Ok(manifest) => manifest,
            Err(err) => {
                warn!(error = %err, "manifest load failed");
                let fragment = view::manifest_error_fragment(&err.to_string());
                self.surface.set_topic_menu(&fragment);
                self.surface.set_sidebar(&fragment);
                return;
            }
        };

        self.search = SearchIndex::build(&manifest);
        info!(
            sections = manifest.section_count(),
            records = self.search.len(),
            "session ready"
        );

        let first_section = manifest.first_section().map(str::to_string);
        self.surface
            .set_topic_menu(&view::topic_menu_html(&manifest, first_section.as_deref()));
        self.manifest = Some(manifest);

        if self.state.viewport.is_mobile() {
            self.state.mobile_topics = self.search.records().to_vec();
            self.state.mobile_cursor = 0;
            self.load_mobile_current().await;
        } else if let Some(section) = first_section {
            self.select_section(&section).await;
        }
    }

    async fn select_section(&mut self, section: &str) {
        let Some(manifest) = self.manifest.clone() else {
            return;
        };
        self.state.current_section = Some(section.to_string());
        self.surface.set_active_section(Some(section));

        if self.state.viewport.is_mobile() {
            self.state.mobile_topics = manifest
                .entries(section)
                .iter()
                .map(|entry| SearchRecord {
                    section: section.to_string(),
                    title: entry.title.clone(),
                    path: entry.path.clone(),
                })
                .collect();
            self.state.mobile_cursor = 0;
            self.load_mobile_current().await;
            return;
        }

        let default = manifest.default_entry(section).cloned();
        self.render_sidebar(&manifest, section, default.as_ref().map(|e| e.path.as_str()));
        if let Some(entry) = default {
            self.load_entry(&entry.path, false).await;
        }
    }

    async fn select_entry(&mut self, section: &str, path: &str) {
        self.state.current_section = Some(section.to_string());
        if let Some(manifest) = self.manifest.clone() {
            self.render_sidebar(&manifest, section, Some(path));
        }
        self.load_entry(path, false).await;
    }

    async fn mobile_step(&mut self, delta: i32) {
        // Disabled buttons cannot fire, so a boundary step is a no-op.
        if delta > 0 {
            if self.state.mobile_at_end() {
                return;
            }
            self.state.mobile_cursor += 1;
        } else {
            if self.state.mobile_at_start() {
                return;
            }
            self.state.mobile_cursor -= 1;
        }
        self.load_mobile_current().await;
    }

    async fn search_pick(&mut self, record: SearchRecord) {
        self.state.current_section = Some(record.section.clone());
        self.surface.set_active_section(Some(&record.section));
        if !self.state.viewport.is_mobile()
            && let Some(manifest) = self.manifest.clone()
        {
            self.render_sidebar(&manifest, &record.section, Some(&record.path));
        }
        self.load_entry(&record.path, false).await;
    }

    fn toggle_dark_mode(&mut self) {
        self.state.dark_mode = !self.state.dark_mode;
        self.surface.set_dark_mode(self.state.dark_mode);
        if let Err(err) = self.theme.save(self.state.dark_mode) {
            warn!(error = %err, "failed to persist theme preference");
        }
    }

    fn toggle_sidebar(&mut self) {
        self.state.sidebar_open = !self.state.sidebar_open;
        self.surface.set_sidebar_open(self.state.sidebar_open);
    }

    fn resize(&mut self, width: u32) {
        if width > self.mobile_breakpoint && self.state.sidebar_open {
            self.state.sidebar_open = false;
            self.surface.set_sidebar_open(false);
        }
    }

    fn render_sidebar(&mut self, manifest: &Manifest, section: &str, active: Option<&str>) {
        self.surface
            .set_sidebar(&view::sidebar_html(section, manifest.entries(section), active));
    }

    async fn load_mobile_current(&mut self) {
        let Some(record) = self.state.mobile_current().cloned() else {
            return;
        };
        self.state.current_section = Some(record.section.clone());
        self.load_entry(&record.path, true).await;
    }

    /// Shared fetch-and-render path for every entry selection.
    async fn load_entry(&mut self, path: &str, mobile_nav: bool) {
        let token = self.begin_load(path);
        let rendered = self.content.fetch_rendered(path).await;
        self.apply_loaded(token, path, &rendered, mobile_nav);
    }

    /// Starts a navigation: updates the highlight and issues the token that
    /// fences this fetch against later ones.
    fn begin_load(&mut self, path: &str) -> RequestToken {
        self.state.active_path = Some(path.to_string());
        self.surface.set_active_entry(Some(path));
        self.state.issue_token()
    }

    /// Applies a fetched document to the surface, unless a later navigation
    /// has superseded its token, in which case the result is dropped instead
    /// of clobbering the newer content.
    fn apply_loaded(
        &mut self,
        token: RequestToken,
        path: &str,
        rendered: &RenderedContent,
        mobile_nav: bool,
    ) {
        if !self.state.is_current(token) {
            debug!(path = %path, "discarding stale response");
            return;
        }

        let toc = toc::build(&rendered.html);
        let content_html = if mobile_nav && self.state.viewport.is_mobile() {
            let title = self
                .state
                .mobile_current()
                .map_or("", |record| record.title.as_str());
            view::with_mobile_strips(
                &toc.html,
                title,
                self.state.mobile_at_start(),
                self.state.mobile_at_end(),
            )
        } else {
            toc.html
        };

        self.surface.set_content(&content_html);
        self.surface.set_toc(&view::toc_html(&toc.entries));
    }
}
