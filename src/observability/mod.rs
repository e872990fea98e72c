//! Observability module
//!
//! Logging infrastructure for `docdeck`. The rendered UI itself never logs;
//! tracing output goes to stderr so piped `render` output stays clean.

pub mod logging;

pub use logging::{LogFormat, init_logging};
