/// Severity of a user-facing notification (toast equivalent).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn info(title: &str, message: &str) -> Self {
        Self {
            severity: Severity::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn warning(title: &str, message: &str) -> Self {
        Self {
            severity: Severity::Warning,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Port for surfacing mutation outcomes to the UI layer. Every mutation
/// attempt ends in exactly one notification, success or failure alike.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Default sink: routes notifications to the log. Embedders with a real UI
/// provide their own implementation.
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Info => {
                tracing::info!(title = %notification.title, "{}", notification.message)
            }
            Severity::Warning => {
                tracing::warn!(title = %notification.title, "{}", notification.message)
            }
        }
    }
}
