/// Kind of a transient status-line notice.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum NoticeKind {
    #[default]
    Normal,
    Error,
}

/// A short-lived status-line message, the terminal stand-in for a toast.
/// Validation failures arrive here with the offending course named.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn new(text: &str) -> Notice {
        return Notice {
            text: text.to_string(),
            kind: NoticeKind::Normal,
        };
    }

    pub fn error(text: &str) -> Notice {
        return Notice {
            text: text.to_string(),
            kind: NoticeKind::Error,
        };
    }
}
