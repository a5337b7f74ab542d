//! Error types for form operations.
//!
//! Every failure the form can produce comes from user input, so the display
//! messages are written for the status line: they name the offending course
//! by its 1-based number and say what to fix.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Course {index} needs a grade before the GPA can be calculated")]
    EmptyEntry { index: usize },
    #[error("Course {index} must be a whole number between 0 and 100")]
    OutOfRange { index: usize },
    #[error("Add at least one course before calculating")]
    NoCourses,
}

impl FormError {
    /// The 1-based number of the course the error refers to, when there is
    /// one. The client uses this to move focus onto the offending row.
    pub fn course_index(&self) -> Option<usize> {
        match self {
            FormError::EmptyEntry { index } | FormError::OutOfRange { index } => Some(*index),
            FormError::NoCourses => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_course() {
        let err = FormError::EmptyEntry { index: 3 };
        assert!(err.to_string().contains("Course 3"));

        let err = FormError::OutOfRange { index: 7 };
        assert!(err.to_string().contains("Course 7"));
    }

    #[test]
    fn test_course_index() {
        assert_eq!(FormError::EmptyEntry { index: 2 }.course_index(), Some(2));
        assert_eq!(FormError::OutOfRange { index: 4 }.course_index(), Some(4));
        assert_eq!(FormError::NoCourses.course_index(), None);
    }
}
