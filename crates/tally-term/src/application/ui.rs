//! Main UI loop and rendering.
//!
//! One screen: a title bar, the numbered course entries, the computed
//! summary, and a status line that doubles as the calculate/reset button
//! label and the notice area. The whole frame is tinted by the result tier
//! once a calculation lands.

use std::io;

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use ratatui::Terminal;
use tally_core::FormMode;
use tally_core::Tier;

use crate::domain::models::NoticeKind;
use crate::domain::services::AppState;
use crate::domain::services::EventsService;

const BACKGROUND_DEFAULT: Color = Color::Rgb(255, 255, 255);
const BACKGROUND_FAILING: Color = Color::Rgb(255, 204, 204);
const BACKGROUND_PASSING: Color = Color::Rgb(255, 255, 204);
const BACKGROUND_HONORS: Color = Color::Rgb(204, 255, 204);
const TEXT: Color = Color::Rgb(24, 24, 24);
const MUTED: Color = Color::Rgb(110, 110, 110);
const INVALID: Color = Color::Rgb(190, 20, 20);

/// Tears raw mode and the alternate screen down without touching a
/// terminal handle. Used from the panic hook, where nothing can fail.
pub fn destruct_terminal_for_panic() {
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::event::DisableBracketedPaste
    );
    let _ = crossterm::execute!(io::stdout(), crossterm::cursor::Show);
}

pub async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState,
) -> Result<()> {
    let mut events_service = EventsService::new();

    loop {
        terminal.draw(|frame| draw(frame, &mut app_state))?;

        let event = events_service.next().await?;
        if !app_state.handle_event(event) {
            break;
        }
    }

    return Ok(());
}

fn background_color(app_state: &AppState) -> Color {
    match app_state.form.summary() {
        Some(summary) => match summary.tier {
            Tier::Failing => BACKGROUND_FAILING,
            Tier::Passing => BACKGROUND_PASSING,
            Tier::Honors => BACKGROUND_HONORS,
        },
        None => BACKGROUND_DEFAULT,
    }
}

fn draw(frame: &mut Frame, app_state: &mut AppState) {
    let area = frame.area();
    app_state.set_rect(area);

    let background =
        Block::default().style(Style::default().bg(background_color(app_state)).fg(TEXT));
    frame.render_widget(background, area);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(area);

    draw_title(frame, chunks[0]);
    draw_courses(frame, chunks[1], app_state);
    draw_summary(frame, chunks[2], app_state);
    draw_status(frame, chunks[3], app_state);
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = format!(" Tally {} - grade average calculator ", env!("CARGO_PKG_VERSION"));
    let para = Paragraph::new(Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .style(Style::default().bg(Color::Cyan));
    frame.render_widget(para, area);
}

fn draw_courses(frame: &mut Frame, area: Rect, app_state: &mut AppState) {
    if app_state.form.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "  No courses. Press Ctrl+N to add one.",
            Style::default().fg(MUTED),
        )));
        frame.render_widget(empty, area);
        return;
    }

    app_state.sync_scroll(area.height as usize);

    let label_width = format!("Course {}", app_state.form.len()).len();
    let end = (app_state.scroll + area.height as usize).min(app_state.form.len());

    let mut lines: Vec<Line> = Vec::with_capacity(end.saturating_sub(app_state.scroll));
    for position in app_state.scroll..end {
        let row = &app_state.form.rows()[position];
        let focused = position == app_state.focused;

        let marker = if focused { "\u{25b8} " } else { "  " };
        let label = format!(
            "{:<label_width$}  ",
            format!("Course {}", position + 1)
        );

        let label_style = if focused {
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT)
        };

        let entry_style = if row.is_flagged() {
            Style::default().fg(INVALID).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT)
        };

        let mut spans = vec![
            Span::styled(marker.to_string(), label_style),
            Span::styled(label, label_style),
            Span::styled(row.entry().to_string(), entry_style),
        ];
        if focused {
            spans.push(Span::styled(
                " ",
                Style::default().add_modifier(Modifier::REVERSED),
            ));
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_summary(frame: &mut Frame, area: Rect, app_state: &AppState) {
    if let Some(summary) = app_state.form.summary() {
        let text = format!(
            "  GPA of {} courses: {}",
            summary.courses, summary.average
        );
        let para = Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(para, area);
    }
}

fn draw_status(frame: &mut Frame, area: Rect, app_state: &AppState) {
    if let Some(notice) = app_state.notice.as_ref() {
        let style = match notice.kind {
            NoticeKind::Error => Style::default().fg(Color::White).bg(INVALID),
            NoticeKind::Normal => Style::default().fg(TEXT).bg(Color::Rgb(220, 220, 220)),
        };
        let para = Paragraph::new(format!(" {} ", notice.text)).style(style);
        frame.render_widget(para, area);
        return;
    }

    let action = match app_state.form.mode() {
        FormMode::Input if app_state.form.is_empty() => "Ctrl+N add a course",
        FormMode::Input => "Enter calculate GPA",
        FormMode::Reset => "Enter reset",
    };
    let hints = format!(" {action}  |  Ctrl+N add  |  Ctrl+D remove  |  Tab/arrows move  |  Esc quit");
    let para = Paragraph::new(hints)
        .style(Style::default().fg(Color::White).bg(Color::Rgb(60, 60, 60)));
    frame.render_widget(para, area);
}
