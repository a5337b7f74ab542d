//! Application layer of the terminal client.
//!
//! Owns the command-line definition and the main UI loop: drawing the form,
//! pulling events from the events service, and feeding them to the
//! application state until the user quits.

pub mod cli;
pub mod ui;
