//! Form engine for the Tally grade calculator.
//!
//! This crate holds everything about the grade form that is independent of a
//! screen: entry validation, the course row list with its add/remove
//! bookkeeping, the input/reset mode machine, and the average and tier
//! computation. The terminal client binds these to events and rendering; the
//! engine itself never touches a terminal and never panics on user input.

pub mod errors;
pub mod form;
pub mod summary;
pub mod validation;

pub use errors::FormError;
pub use form::{CourseForm, CourseRow, FormMode};
pub use summary::{GradeSummary, Tier};
pub use validation::{validate, Validation};
