//! `docdeck` - remote-manifest documentation viewer
//!
//! This library provides the components behind the `docdeck` CLI: manifest
//! loading, title search, Markdown rendering with an escaped fallback,
//! table-of-contents extraction, and the navigation state machine that
//! drives a host-page surface.

pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod fetch;
pub mod manifest;
pub mod nav;
pub mod observability;
pub mod render;
pub mod search;
pub mod server;
pub mod theme;
pub mod toc;
