use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

impl NoticeKind {
    const fn lifetime(self) -> Duration {
        match self {
            Self::Error => Duration::from_secs(8),
            Self::Success => Duration::from_secs(4),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub expires_at: Instant,
}

/// The status line message. A new notice replaces the previous one.
#[derive(Debug, Clone, Default)]
pub struct MessageState {
    current: Option<Notice>,
}

impl MessageState {
    pub fn set_error_at(&mut self, msg: String, now: Instant) {
        self.show(NoticeKind::Error, msg, now);
    }

    pub fn set_success_at(&mut self, msg: String, now: Instant) {
        self.show(NoticeKind::Success, msg, now);
    }

    fn show(&mut self, kind: NoticeKind, text: String, now: Instant) {
        self.current = Some(Notice {
            kind,
            text,
            expires_at: now + kind.lifetime(),
        });
    }

    pub fn error(&self) -> Option<&str> {
        self.text_of(NoticeKind::Error)
    }

    pub fn success(&self) -> Option<&str> {
        self.text_of(NoticeKind::Success)
    }

    fn text_of(&self, kind: NoticeKind) -> Option<&str> {
        self.current
            .as_ref()
            .filter(|n| n.kind == kind)
            .map(|n| n.text.as_str())
    }

    pub fn expires_at(&self) -> Option<Instant> {
        self.current.as_ref().map(|n| n.expires_at)
    }

    /// Returns true when a message was removed.
    pub fn clear_expired_at(&mut self, now: Instant) -> bool {
        let expired = self.expires_at().is_some_and(|at| at <= now);
        if expired {
            self.dismiss();
        }
        expired
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}
