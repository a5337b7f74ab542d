//! Terminal user interface for the Tally grade calculator.
//!
//! This crate renders a single-screen grade form in the terminal: a list of
//! numbered course entries with live validation, a dual-mode calculate/reset
//! action on Enter, and a screen tint that follows the computed result. The
//! form logic itself lives in `tally-core`; this crate binds it to keyboard
//! events, rendering, configuration, and logging.

pub mod application;
pub mod configuration;
pub mod domain;
pub use application::ui::{destruct_terminal_for_panic, start_loop};
pub use configuration::{Config, ConfigKey};
pub use domain::models::{Event, Notice, NoticeKind};
pub use domain::services::{AppState, AppStateProps};
