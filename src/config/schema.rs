//! Configuration schema
//!
//! Serde structs for the `docdeck` YAML configuration file. Every field has
//! a default so an empty file (or no file at all) yields a working config
//! pointed at the default content repository.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default remote content base URL.
///
/// The manifest lives at `<base>/menu.json` and document paths are resolved
/// relative to this base.
pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/sureshsiddana/techcontent/main";

/// Viewport width (CSS pixels) at or below which the mobile layout is used.
pub const DEFAULT_MOBILE_BREAKPOINT: u32 = 900;

/// Maximum number of search suggestions returned per query.
pub const SEARCH_SUGGESTION_LIMIT: usize = 8;

/// Default per-request fetch timeout in milliseconds.
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 30_000;

/// Site configuration for `docdeck`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Remote content base URL (no trailing slash).
    pub base_url: String,

    /// Viewport width threshold for the mobile layout.
    pub mobile_breakpoint: u32,

    /// Per-request fetch timeout in milliseconds.
    pub fetch_timeout_ms: u64,

    /// Where the persisted theme preference lives.
    ///
    /// Defaults to `$XDG_STATE_HOME/docdeck/theme.json` (or
    /// `~/.local/state/docdeck/theme.json`).
    pub theme_file: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
            theme_file: None,
        }
    }
}

impl SiteConfig {
    /// Path of the theme preference file, resolving the platform default
    /// when none is configured.
    #[must_use]
    pub fn theme_file_path(&self) -> PathBuf {
        if let Some(path) = &self.theme_file {
            return path.clone();
        }
        let state_dir = std::env::var_os("XDG_STATE_HOME")
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".local/state"))
            })
            .unwrap_or_else(|| PathBuf::from("."));
        state_dir.join("docdeck").join("theme.json")
    }
}
