use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use futures::StreamExt;
use tokio::time;

use crate::domain::models::Event;

pub struct EventsService {
    crossterm_events: EventStream,
}

impl Default for EventsService {
    fn default() -> EventsService {
        return EventsService::new();
    }
}

impl EventsService {
    pub fn new() -> EventsService {
        return EventsService {
            crossterm_events: EventStream::new(),
        };
    }

    fn handle_crossterm(&self, event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Paste(text) => {
                return Some(Event::KeyboardPaste(text));
            }
            CrosstermEvent::Key(keyevent) => {
                // Windows terminals emit both press and release events.
                if keyevent.kind != KeyEventKind::Press {
                    return None;
                }

                let ctrl = keyevent.modifiers.contains(KeyModifiers::CONTROL);
                match keyevent.code {
                    KeyCode::Char('c') if ctrl => {
                        return Some(Event::KeyboardCTRLC);
                    }
                    KeyCode::Char('d') if ctrl => {
                        return Some(Event::KeyboardCTRLD);
                    }
                    KeyCode::Char('n') if ctrl => {
                        return Some(Event::KeyboardCTRLN);
                    }
                    KeyCode::Char(c) if !ctrl => {
                        return Some(Event::KeyboardCharInput(c));
                    }
                    KeyCode::Backspace => {
                        return Some(Event::KeyboardBackspace);
                    }
                    KeyCode::Enter => {
                        return Some(Event::KeyboardEnter);
                    }
                    KeyCode::Esc => {
                        return Some(Event::KeyboardEsc);
                    }
                    KeyCode::Tab | KeyCode::Down => {
                        return Some(Event::UIFocusNext);
                    }
                    KeyCode::BackTab | KeyCode::Up => {
                        return Some(Event::UIFocusPrev);
                    }
                    _ => return None,
                }
            }
            _ => return None,
        }
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.crossterm_events.next() => match event {
                    Some(Ok(input)) => self.handle_crossterm(input),
                    Some(Err(_)) => None,
                    None => None
                },
                _ = time::sleep(time::Duration::from_millis(500)) => Some(Event::UITick)
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}
