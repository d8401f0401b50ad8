//! Transient banners. Only one is visible at a time; each carries an id so a
//! timer armed for an older banner cannot dismiss a newer one.

use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub severity: Severity,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct Notifications {
    current: Option<Notification>,
    next_id: u64,
}

impl Notifications {
    /// Replaces whatever is showing and returns the new banner's id.
    pub fn show(&mut self, severity: Severity, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.current = Some(Notification {
            id,
            severity,
            text: text.into(),
        });
        id
    }

    /// Timer callback: dismisses only if `id` is still the visible banner.
    pub fn expire(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|current| current.id == id) {
            self.current = None;
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_timer_does_not_hide_newer_banner() {
        let mut notifications = Notifications::default();
        let first = notifications.show(Severity::Info, "first");
        let second = notifications.show(Severity::Error, "second");

        notifications.expire(first);
        assert_eq!(notifications.current().map(|n| n.text.as_str()), Some("second"));

        notifications.expire(second);
        assert!(notifications.current().is_none());
    }

    #[test]
    fn severity_labels() {
        let labels: Vec<_> = [Severity::Info, Severity::Success, Severity::Error]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(labels, vec!["info", "success", "error"]);
    }

    #[test]
    fn dismiss_clears_immediately() {
        let mut notifications = Notifications::default();
        notifications.show(Severity::Success, "done");
        notifications.dismiss();
        assert!(notifications.current().is_none());
    }
}
