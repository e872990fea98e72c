//! CLI module
//!
//! Argument definitions and command handlers for the `docdeck` binary.

pub mod args;
pub mod commands;
