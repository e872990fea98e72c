//! Navigation actions.
//!
//! Every user interaction reaches the controller as one of these variants,
//! so state transitions are testable without a rendered host page.

use crate::search::SearchRecord;

/// A navigation action dispatched to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    /// Initial load: fetch the manifest, build the search index, render the
    /// topic menu, and select the default section and entry.
    Startup,

    /// Topic-menu click. Desktop re-renders the sidebar for the section;
    /// mobile resets the flat topic list to that section at cursor 0.
    SelectSection {
        /// Section name from the topic menu.
        section: String,
    },

    /// Sidebar-entry click (desktop): fetch and render the document.
    SelectEntry {
        /// Section the entry belongs to.
        section: String,
        /// Document path relative to the base URL.
        path: String,
    },

    /// Mobile "Next" button: advance the flat cursor by one.
    MobileNext,

    /// Mobile "Previous" button: move the flat cursor back by one.
    MobilePrev,

    /// Search suggestion click: cross-update topic menu, sidebar, and
    /// content through the shared fetch-and-render path.
    SearchPick {
        /// The picked suggestion.
        record: SearchRecord,
    },

    /// Dark-mode toggle; the new value is persisted.
    ToggleDarkMode,

    /// Sidebar open/close toggle (mobile overlay, desktop hover substate).
    ToggleSidebar,

    /// Viewport resize. Only the sidebar-open substate reacts: growing past
    /// the breakpoint closes the overlay. Viewport mode itself is fixed at
    /// startup.
    Resize {
        /// New viewport width in CSS pixels.
        width: u32,
    },
}
