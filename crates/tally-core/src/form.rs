//! The course form: row list, edit operations, and the mode machine.

use crate::errors::FormError;
use crate::summary::GradeSummary;
use crate::validation::{validate, Validation};

/// Which of the two phases the form is in. `Reset` is only entered by a
/// successful calculation; any edit returns the form to `Input`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Input,
    Reset,
}

/// A single course entry. The displayed course number is not stored here:
/// it is always the row's position plus one, so numbering stays contiguous
/// through any add or remove.
#[derive(Debug, Clone, Default)]
pub struct CourseRow {
    entry: String,
    touched: bool,
}

impl CourseRow {
    pub fn entry(&self) -> &str {
        &self.entry
    }

    pub fn validation(&self) -> Validation {
        validate(&self.entry)
    }

    /// Whether the row should be highlighted as invalid. Untouched rows are
    /// never flagged, so a fresh form does not open covered in warnings.
    pub fn is_flagged(&self) -> bool {
        self.touched && !self.validation().is_valid()
    }
}

/// The form controller. Owns the rows, the current mode, and the summary of
/// the last successful calculation.
#[derive(Debug, Clone, Default)]
pub struct CourseForm {
    rows: Vec<CourseRow>,
    mode: FormMode,
    summary: Option<GradeSummary>,
}

impl CourseForm {
    /// Builds a form seeded with `count` untouched empty rows.
    pub fn new(count: usize) -> CourseForm {
        CourseForm {
            rows: vec![CourseRow::default(); count],
            mode: FormMode::Input,
            summary: None,
        }
    }

    pub fn rows(&self) -> &[CourseRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Summary of the last calculation, present only in `Reset` mode.
    pub fn summary(&self) -> Option<GradeSummary> {
        self.summary
    }

    /// Appends an untouched empty row and returns its position.
    pub fn add_row(&mut self) -> usize {
        self.enter_input();
        self.rows.push(CourseRow::default());
        self.rows.len() - 1
    }

    /// Removes the row at `position`. Remaining rows renumber by position,
    /// so the contiguous 1..N numbering needs no fixup. Returns false when
    /// the position does not exist.
    pub fn remove_row(&mut self, position: usize) -> bool {
        if position >= self.rows.len() {
            return false;
        }
        self.rows.remove(position);
        self.enter_input();
        true
    }

    /// Appends one typed character to a row's entry. Minus signs never
    /// make it into an entry; they are scrubbed at the edit boundary.
    pub fn push_char(&mut self, position: usize, ch: char) {
        if ch == '-' || ch.is_control() {
            return;
        }
        if let Some(row) = self.rows.get_mut(position) {
            row.entry.push(ch);
            row.touched = true;
            self.enter_input();
        }
    }

    /// Appends pasted text to a row's entry, scrubbing minus signs and
    /// control characters.
    pub fn insert_text(&mut self, position: usize, text: &str) {
        let scrubbed: String = text
            .chars()
            .filter(|ch| *ch != '-' && !ch.is_control())
            .collect();
        if scrubbed.is_empty() {
            return;
        }
        if let Some(row) = self.rows.get_mut(position) {
            row.entry.push_str(&scrubbed);
            row.touched = true;
            self.enter_input();
        }
    }

    /// Deletes the last character of a row's entry.
    pub fn backspace(&mut self, position: usize) {
        if let Some(row) = self.rows.get_mut(position) {
            if row.entry.pop().is_some() {
                row.touched = true;
                self.enter_input();
            }
        }
    }

    /// Marks a row as touched without editing it. Called when a row loses
    /// focus, so empty rows the user skipped over get flagged.
    pub fn mark_touched(&mut self, position: usize) {
        if let Some(row) = self.rows.get_mut(position) {
            row.touched = true;
        }
    }

    /// Validates every row in order and, if all pass, stores the summary and
    /// enters `Reset` mode. The first invalid row aborts with an error
    /// naming its 1-based number, after marking it touched so the screen
    /// flags it.
    pub fn calculate(&mut self) -> Result<GradeSummary, FormError> {
        if self.rows.is_empty() {
            return Err(FormError::NoCourses);
        }

        let mut total: u32 = 0;
        for (position, row) in self.rows.iter_mut().enumerate() {
            let index = position + 1;
            match row.validation() {
                Validation::Valid => {
                    // Valid guarantees the entry parses within 0..=100.
                    total += row.entry.parse::<u32>().unwrap_or_default();
                }
                Validation::Empty => {
                    row.touched = true;
                    return Err(FormError::EmptyEntry { index });
                }
                Validation::Under | Validation::Over => {
                    row.touched = true;
                    return Err(FormError::OutOfRange { index });
                }
            }
        }

        let summary = GradeSummary::new(self.rows.len(), total);
        self.summary = Some(summary);
        self.mode = FormMode::Reset;
        Ok(summary)
    }

    /// Clears every entry and touched flag, discards the summary, and
    /// returns to `Input` mode.
    pub fn reset(&mut self) {
        for row in &mut self.rows {
            row.entry.clear();
            row.touched = false;
        }
        self.enter_input();
    }

    fn enter_input(&mut self) {
        self.mode = FormMode::Input;
        self.summary = None;
    }
}
