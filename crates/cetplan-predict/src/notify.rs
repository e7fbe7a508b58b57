//! # Notification Boundary
//!
//! All user-visible feedback goes through one `notify(title, description,
//! severity)` surface — there is no other side channel. The API layer
//! collects notifications into responses; the CLI logs them.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

/// Notification severity, mapped by the UI to toast styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Routine feedback, e.g. search completion.
    Info,
    /// Something went wrong; the state is still consistent and retryable.
    Error,
}

/// One user-visible notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Error,
        }
    }
}

/// The single feedback surface available to the workflow.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Collects notifications so a request handler can drain them into its
/// response. Cloning shares the buffer.
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    inner: Arc<Mutex<Vec<Notification>>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take everything collected so far.
    pub fn drain(&self) -> Vec<Notification> {
        match self.inner.lock() {
            Ok(mut buffer) => std::mem::take(&mut *buffer),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl Notifier for NotificationLog {
    fn notify(&self, notification: Notification) {
        if let Ok(mut buffer) = self.inner.lock() {
            buffer.push(notification);
        }
    }
}

/// Emits notifications as tracing events; used by the CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Info => tracing::info!(
                title = %notification.title,
                "{}", notification.description
            ),
            Severity::Error => tracing::warn!(
                title = %notification.title,
                "{}", notification.description
            ),
        }
    }
}
