//! Configuration module
//!
//! Handles loading and validation of the `docdeck` site configuration:
//! remote content base URL, viewport breakpoint, and fetch limits.

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_file, validate};
pub use schema::SiteConfig;
