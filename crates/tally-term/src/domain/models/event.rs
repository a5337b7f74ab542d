/// Everything the events service can hand to the application loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    KeyboardCharInput(char),
    KeyboardBackspace,
    KeyboardEnter,
    KeyboardEsc,
    KeyboardCTRLC,
    KeyboardCTRLD,
    KeyboardCTRLN,
    KeyboardPaste(String),
    UIFocusNext,
    UIFocusPrev,
    UITick,
}
