//! Domain layer of the terminal client.
//!
//! Holds the models and services that drive the screen: the events the UI
//! loop consumes, the transient notices it shows, and the application state
//! wrapping the form engine. Nothing in here renders.

pub mod models;
pub mod services;
