//! User notifications
//!
//! Stands in for the host's message boxes. Every outcome of a comparison is
//! reported through a [`Notifier`] exactly once.

use std::sync::Mutex;

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Receives messages meant for the user
pub trait Notifier: Send + Sync {
    fn notify(&self, severity: Severity, title: &str, message: &str);

    fn info(&self, title: &str, message: &str) {
        self.notify(Severity::Info, title, message);
    }

    fn warning(&self, title: &str, message: &str) {
        self.notify(Severity::Warning, title, message);
    }

    fn error(&self, title: &str, message: &str) {
        self.notify(Severity::Error, title, message);
    }
}

/// Logs notifications and echoes them to stderr
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, severity: Severity, title: &str, message: &str) {
        match severity {
            Severity::Info => tracing::info!(title, "{message}"),
            Severity::Warning => tracing::warn!(title, "{message}"),
            Severity::Error => tracing::error!(title, "{message}"),
        }

        eprintln!("{title}: {message}");
    }
}

/// A single recorded notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

/// Keeps notifications in memory, for embedding hosts and tests
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything received so far
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }

    /// The most recent notification
    pub fn last(&self) -> Option<Notification> {
        self.notifications().pop()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, severity: Severity, title: &str, message: &str) {
        if let Ok(mut notifications) = self.notifications.lock() {
            notifications.push(Notification {
                severity,
                title: title.to_string(),
                message: message.to_string(),
            });
        }
    }
}
