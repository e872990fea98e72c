//! Navigation session state.
//!
//! One explicit state object per session, owned by the controller. Nothing
//! here is ambient or global, so independent controller instances cannot
//! observe each other and tests stay deterministic.

use crate::search::SearchRecord;

/// Viewport mode, chosen once at startup by the width threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportMode {
    /// Sidebar-driven layout.
    Desktop,
    /// Flat sequential topic list with prev/next strips.
    Mobile,
}

impl ViewportMode {
    /// Picks the mode for a viewport width against the breakpoint.
    #[must_use]
    pub const fn from_width(width: u32, breakpoint: u32) -> Self {
        if width <= breakpoint {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    /// Whether this is the mobile layout.
    #[must_use]
    pub const fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }
}

/// Token identifying one content fetch issued by a navigation action.
///
/// Tokens increase monotonically; a response is applied only when its token
/// still equals the newest issued one, so a slow fetch overtaken by a later
/// navigation is discarded instead of clobbering the content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Session-lifetime navigation state.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Viewport mode, fixed at startup.
    pub viewport: ViewportMode,
    /// Section currently driving the sidebar.
    pub current_section: Option<String>,
    /// Path of the active (highlighted) sidebar entry.
    pub active_path: Option<String>,
    /// Flat topic list backing mobile prev/next navigation.
    pub mobile_topics: Vec<SearchRecord>,
    /// Cursor into `mobile_topics`.
    pub mobile_cursor: usize,
    /// Whether the sidebar overlay is open.
    pub sidebar_open: bool,
    /// Dark-mode flag, mirrored to durable storage on toggle.
    pub dark_mode: bool,
    latest_token: u64,
}

impl SessionState {
    /// Creates a fresh session in the given viewport mode.
    #[must_use]
    pub const fn new(viewport: ViewportMode) -> Self {
        Self {
            viewport,
            current_section: None,
            active_path: None,
            mobile_topics: Vec::new(),
            mobile_cursor: 0,
            sidebar_open: false,
            dark_mode: false,
            latest_token: 0,
        }
    }

    /// Issues the next request token, superseding all earlier ones.
    pub const fn issue_token(&mut self) -> RequestToken {
        self.latest_token += 1;
        RequestToken(self.latest_token)
    }

    /// Whether a token is still the latest issued one.
    #[must_use]
    pub const fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest_token
    }

    /// The mobile topic currently under the cursor.
    #[must_use]
    pub fn mobile_current(&self) -> Option<&SearchRecord> {
        self.mobile_topics.get(self.mobile_cursor)
    }

    /// Whether the mobile cursor sits at the start of the list.
    #[must_use]
    pub const fn mobile_at_start(&self) -> bool {
        self.mobile_cursor == 0
    }

    /// Whether the mobile cursor sits at the end of the list.
    #[must_use]
    pub fn mobile_at_end(&self) -> bool {
        self.mobile_topics.is_empty() || self.mobile_cursor + 1 == self.mobile_topics.len()
    }
}
