use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error
}

/// Seam for surfacing transient, toast-style notifications to whatever
/// UI embeds the stores. The content store reports every failed action
/// through this.
pub trait Notifier: Send + Sync {
    fn notify(&self, level: NoticeLevel, message: &str);
}

/// Default notifier: structured log lines, nothing else.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Info => info!(%message, "notification"),
            NoticeLevel::Error => error!(%message, "notification")
        }
    }
}
