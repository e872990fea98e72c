//! Persisted theme preference.
//!
//! A single durable key: the dark-mode boolean. Stored as a tiny JSON file
//! so it survives across sessions. A missing or corrupt file reads as
//! light mode; nothing here is ever fatal.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Default, Serialize, Deserialize)]
struct ThemeFile {
    dark_mode: bool,
}

/// File-backed store for the dark-mode flag.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    /// Creates a store at the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted flag. Missing or unreadable state is light mode.
    #[must_use]
    pub fn load(&self) -> bool {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => match serde_json::from_str::<ThemeFile>(&raw) {
                Ok(theme) => theme.dark_mode,
                Err(e) => {
                    warn!(path = %self.path.display(), error = %e, "corrupt theme file, using light mode");
                    false
                }
            },
            Err(_) => false,
        }
    }

    /// Persists the flag, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error; callers treat persistence failure
    /// as non-fatal.
    pub fn save(&self, dark_mode: bool) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(&ThemeFile { dark_mode })
            .expect("theme file serialization cannot fail");
        std::fs::write(&self.path, raw)
    }
}
