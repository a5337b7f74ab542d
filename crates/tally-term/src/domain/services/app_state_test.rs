use super::*;
use crate::domain::models::NoticeKind;
use tally_core::Tier;

fn state_with(grades: &[&str]) -> AppState {
    let mut app_state = AppState::new(AppStateProps {
        initial_courses: grades.len(),
    });
    for (position, grade) in grades.iter().enumerate() {
        app_state.focused = position;
        for ch in grade.chars() {
            app_state.handle_event(Event::KeyboardCharInput(ch));
        }
    }
    app_state.focused = 0;
    app_state
}

#[test]
fn test_typing_edits_the_focused_row() {
    let mut app_state = AppState::new(AppStateProps { initial_courses: 2 });
    app_state.handle_event(Event::KeyboardCharInput('7'));
    app_state.handle_event(Event::KeyboardCharInput('5'));
    assert_eq!(app_state.form.rows()[0].entry(), "75");
    assert_eq!(app_state.form.rows()[1].entry(), "");

    app_state.handle_event(Event::KeyboardBackspace);
    assert_eq!(app_state.form.rows()[0].entry(), "7");
}

#[test]
fn test_enter_calculates_and_enters_reset_mode() {
    let mut app_state = state_with(&["80", "90", "70"]);
    assert!(app_state.handle_event(Event::KeyboardEnter));

    let summary = app_state.form.summary().unwrap();
    assert_eq!(summary.average, 80);
    assert_eq!(summary.tier, Tier::Honors);
    assert_eq!(app_state.form.mode(), FormMode::Reset);
    assert!(app_state.notice.is_none());
}

#[test]
fn test_enter_on_invalid_row_notifies_and_moves_focus() {
    let mut app_state = state_with(&["80", "", "90"]);
    app_state.handle_event(Event::KeyboardEnter);

    let notice = app_state.notice.clone().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert!(notice.text.contains("Course 2"));
    assert_eq!(app_state.focused, 1);
    assert!(app_state.form.summary().is_none());
}

#[test]
fn test_enter_in_reset_mode_resets_the_form() {
    let mut app_state = state_with(&["80"]);
    app_state.handle_event(Event::KeyboardEnter);
    assert_eq!(app_state.form.mode(), FormMode::Reset);

    app_state.handle_event(Event::KeyboardEnter);
    assert_eq!(app_state.form.mode(), FormMode::Input);
    assert!(app_state.form.summary().is_none());
    assert!(app_state.form.rows()[0].entry().is_empty());
    assert_eq!(app_state.focused, 0);
}

#[test]
fn test_typing_in_reset_mode_returns_to_input() {
    let mut app_state = state_with(&["80"]);
    app_state.handle_event(Event::KeyboardEnter);

    app_state.handle_event(Event::KeyboardCharInput('5'));
    assert_eq!(app_state.form.mode(), FormMode::Input);
    assert!(app_state.form.summary().is_none());
    assert_eq!(app_state.form.rows()[0].entry(), "805");
}

#[test]
fn test_enter_on_empty_form_reports_no_courses() {
    let mut app_state = AppState::new(AppStateProps { initial_courses: 0 });
    app_state.handle_event(Event::KeyboardEnter);

    let notice = app_state.notice.clone().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert!(notice.text.contains("at least one course"));
}

#[test]
fn test_focus_movement_marks_departed_rows_touched() {
    let mut app_state = AppState::new(AppStateProps { initial_courses: 2 });
    assert!(!app_state.form.rows()[0].is_flagged());

    app_state.handle_event(Event::UIFocusNext);
    assert_eq!(app_state.focused, 1);
    // The departed row is empty and now touched, so it gets flagged.
    assert!(app_state.form.rows()[0].is_flagged());
    assert!(!app_state.form.rows()[1].is_flagged());
}

#[test]
fn test_focus_wraps_both_ways() {
    let mut app_state = AppState::new(AppStateProps { initial_courses: 3 });
    app_state.handle_event(Event::UIFocusPrev);
    assert_eq!(app_state.focused, 2);
    app_state.handle_event(Event::UIFocusNext);
    assert_eq!(app_state.focused, 0);
}

#[test]
fn test_ctrl_n_adds_a_course_and_focuses_it() {
    let mut app_state = AppState::new(AppStateProps { initial_courses: 2 });
    app_state.handle_event(Event::KeyboardCTRLN);
    assert_eq!(app_state.form.len(), 3);
    assert_eq!(app_state.focused, 2);
}

#[test]
fn test_ctrl_d_removes_the_focused_course() {
    let mut app_state = state_with(&["10", "20", "30"]);
    app_state.focused = 2;
    app_state.handle_event(Event::KeyboardCTRLD);

    assert_eq!(app_state.form.len(), 2);
    // Focus clamps to the new last row.
    assert_eq!(app_state.focused, 1);

    let entries: Vec<&str> = app_state.form.rows().iter().map(|row| row.entry()).collect();
    assert_eq!(entries, vec!["10", "20"]);
}

#[test]
fn test_ctrl_d_on_an_empty_form_is_harmless() {
    let mut app_state = AppState::new(AppStateProps { initial_courses: 0 });
    assert!(app_state.handle_event(Event::KeyboardCTRLD));
    assert!(app_state.form.is_empty());
    assert_eq!(app_state.focused, 0);
}

#[test]
fn test_quit_events_stop_the_loop() {
    let mut app_state = AppState::new(AppStateProps { initial_courses: 1 });
    assert!(!app_state.handle_event(Event::KeyboardCTRLC));
    assert!(!app_state.handle_event(Event::KeyboardEsc));
    assert!(app_state.handle_event(Event::UITick));
}

#[test]
fn test_paste_is_scrubbed_of_minus_signs() {
    let mut app_state = AppState::new(AppStateProps { initial_courses: 1 });
    app_state.handle_event(Event::KeyboardPaste("8-0".to_string()));
    assert_eq!(app_state.form.rows()[0].entry(), "80");
}

#[test]
fn test_notices_expire_after_enough_ticks() {
    let mut app_state = AppState::new(AppStateProps { initial_courses: 0 });
    app_state.handle_event(Event::KeyboardEnter);
    assert!(app_state.notice.is_some());

    for _ in 0..NOTICE_TICKS {
        app_state.handle_event(Event::UITick);
    }
    assert!(app_state.notice.is_none());
}

#[test]
fn test_edits_clear_the_notice_immediately() {
    let mut app_state = state_with(&["", "80"]);
    app_state.handle_event(Event::KeyboardEnter);
    assert!(app_state.notice.is_some());

    app_state.handle_event(Event::KeyboardCharInput('9'));
    assert!(app_state.notice.is_none());
}

#[test]
fn test_sync_scroll_follows_focus() {
    let mut app_state = AppState::new(AppStateProps { initial_courses: 30 });
    app_state.focused = 25;
    app_state.sync_scroll(10);
    assert_eq!(app_state.scroll, 16);

    app_state.focused = 2;
    app_state.sync_scroll(10);
    assert_eq!(app_state.scroll, 2);
}

#[test]
fn test_sync_scroll_clamps_even_without_viewport_height() {
    let mut app_state = AppState::new(AppStateProps { initial_courses: 30 });
    app_state.focused = 29;
    app_state.sync_scroll(10);
    assert_eq!(app_state.scroll, 20);

    // Shrink the form below the synced offset, then sync against a
    // viewport squashed to nothing. The offset must still be clamped.
    while app_state.form.len() > 5 {
        app_state.handle_event(Event::KeyboardCTRLD);
    }
    app_state.sync_scroll(0);
    assert_eq!(app_state.scroll, 0);
}

#[test]
fn test_sync_scroll_clamps_after_removals() {
    let mut app_state = AppState::new(AppStateProps { initial_courses: 30 });
    app_state.focused = 29;
    app_state.sync_scroll(10);
    assert_eq!(app_state.scroll, 20);

    while app_state.form.len() > 5 {
        app_state.handle_event(Event::KeyboardCTRLD);
    }
    app_state.sync_scroll(10);
    assert_eq!(app_state.scroll, 0);
}
