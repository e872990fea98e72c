//! Rendering module
//!
//! Markdown-to-HTML conversion and the escaped-text fallback. Syntax
//! highlighting itself is a host-page collaborator; code blocks only carry
//! `language-*` classes for it.

pub mod markdown;

pub use markdown::{escape_html, escaped_fallback, render_markdown, render_or_escape};
