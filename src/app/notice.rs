use std::time::{Duration, Instant};

pub const SUCCESS_NOTICE: &str = "Form submitted successfully!";
pub const FAILURE_NOTICE: &str = "Submission failed.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub(crate) fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

/// Transient message shown next to the form after a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub expires_at: Instant,
}

/// Notices currently on screen. Each one expires on its own schedule;
/// posting a new notice never shortens or cancels an older one.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    ttl: Duration,
    notices: Vec<Notice>,
}

impl NoticeBoard {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            notices: Vec::new(),
        }
    }

    pub fn post(&mut self, kind: NoticeKind, message: impl Into<String>, now: Instant) {
        self.notices.push(Notice {
            kind,
            message: message.into(),
            expires_at: now + self.ttl,
        });
    }

    pub fn success(&mut self, now: Instant) {
        self.post(NoticeKind::Success, SUCCESS_NOTICE, now);
    }

    pub fn failure(&mut self, now: Instant) {
        self.post(NoticeKind::Error, FAILURE_NOTICE, now);
    }

    /// Drop expired notices, returning how many were removed.
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.notices.len();
        self.notices.retain(|notice| notice.expires_at > now);
        before - self.notices.len()
    }

    pub fn active(&self) -> &[Notice] {
        &self.notices
    }

    pub fn next_expiry(&self) -> Option<Instant> {
        self.notices.iter().map(|notice| notice.expires_at).min()
    }
}
