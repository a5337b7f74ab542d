use ratatui::prelude::Rect;
use tally_core::CourseForm;
use tally_core::FormMode;

use crate::domain::models::Event;
use crate::domain::models::Notice;

#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

/// How many UI ticks a notice stays on the status line. Ticks arrive every
/// 500ms, so this is roughly the lifetime of a short toast.
const NOTICE_TICKS: usize = 6;

pub struct AppStateProps {
    pub initial_courses: usize,
}

pub struct AppState {
    pub form: CourseForm,
    pub focused: usize,
    pub scroll: usize,
    pub last_known_height: usize,
    pub last_known_width: usize,
    pub notice: Option<Notice>,
    notice_ticks: usize,
}

impl AppState {
    pub fn new(props: AppStateProps) -> AppState {
        return AppState {
            form: CourseForm::new(props.initial_courses),
            focused: 0,
            scroll: 0,
            last_known_height: 0,
            last_known_width: 0,
            notice: None,
            notice_ticks: 0,
        };
    }

    /// Applies one event to the screen state. Returns false when the loop
    /// should exit.
    pub fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::KeyboardCTRLC | Event::KeyboardEsc => return false,
            Event::KeyboardCharInput(ch) => {
                self.clear_notice();
                self.form.push_char(self.focused, ch);
            }
            Event::KeyboardPaste(text) => {
                self.clear_notice();
                self.form.insert_text(self.focused, &text);
            }
            Event::KeyboardBackspace => {
                self.clear_notice();
                self.form.backspace(self.focused);
            }
            Event::KeyboardEnter => self.submit(),
            Event::KeyboardCTRLN => self.add_course(),
            Event::KeyboardCTRLD => self.remove_course(),
            Event::UIFocusNext => self.focus_step(1),
            Event::UIFocusPrev => self.focus_step(-1),
            Event::UITick => self.expire_notice(),
        }

        return true;
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width.into();
        self.last_known_height = rect.height.into();
    }

    /// Keeps the focused row inside a viewport of `visible_rows` lines.
    /// The scroll offset is clamped even when the viewport has no height,
    /// so it can never point past the row list.
    pub fn sync_scroll(&mut self, visible_rows: usize) {
        let len = self.form.len();
        if visible_rows == 0 || len <= visible_rows {
            self.scroll = 0;
            return;
        }

        if self.scroll > len - visible_rows {
            self.scroll = len - visible_rows;
        }

        if self.focused < self.scroll {
            self.scroll = self.focused;
        } else if self.focused >= self.scroll + visible_rows {
            self.scroll = self.focused + 1 - visible_rows;
        }
    }

    fn submit(&mut self) {
        match self.form.mode() {
            FormMode::Reset => {
                self.form.reset();
                self.focused = 0;
                self.clear_notice();
                tracing::debug!("form reset");
            }
            FormMode::Input => match self.form.calculate() {
                Ok(summary) => {
                    self.clear_notice();
                    tracing::debug!(
                        courses = summary.courses,
                        average = summary.average,
                        "calculated gpa"
                    );
                }
                Err(err) => {
                    // Focus lands on the offending row.
                    if let Some(index) = err.course_index() {
                        self.set_focus(index - 1);
                    }
                    self.set_notice(Notice::error(&err.to_string()));
                }
            },
        }
    }

    fn add_course(&mut self) {
        let position = self.form.add_row();
        self.set_focus(position);
        self.clear_notice();
    }

    fn remove_course(&mut self) {
        if self.form.is_empty() {
            return;
        }

        self.form.remove_row(self.focused);
        if self.focused >= self.form.len() {
            self.focused = self.form.len().saturating_sub(1);
        }
        self.clear_notice();
    }

    fn focus_step(&mut self, delta: isize) {
        let len = self.form.len();
        if len < 2 {
            return;
        }

        let next = (self.focused as isize + delta).rem_euclid(len as isize) as usize;
        self.set_focus(next);
    }

    fn set_focus(&mut self, position: usize) {
        if position == self.focused {
            return;
        }

        // Leaving a row is its focus-loss validation pass.
        self.form.mark_touched(self.focused);
        self.focused = position;
    }

    fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.notice_ticks = NOTICE_TICKS;
    }

    fn clear_notice(&mut self) {
        self.notice = None;
        self.notice_ticks = 0;
    }

    fn expire_notice(&mut self) {
        if self.notice.is_none() {
            return;
        }

        self.notice_ticks = self.notice_ticks.saturating_sub(1);
        if self.notice_ticks == 0 {
            self.notice = None;
        }
    }
}
