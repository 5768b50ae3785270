//! ui
//!
//! Output formatting for the CLI.
//!
//! # Modules
//!
//! - [`output`] - Result rendering and diagnostics

pub mod output;
