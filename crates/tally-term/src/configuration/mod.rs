//! Configuration for the terminal client.
//!
//! Values are layered: built-in defaults, then an optional TOML config
//! file, then command-line flags. The merged result is held in a
//! process-wide map the rest of the app reads by key.

mod config;

pub use config::*;
