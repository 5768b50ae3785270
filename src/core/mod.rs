//! core
//!
//! Configuration shared by the library and the CLI.
//!
//! # Modules
//!
//! - [`config`] - Configuration schema and loading

pub mod config;
