use crate::types::{Notification, Severity};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

/// Fire-and-forget sink for user-facing messages.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to stderr and the log
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Destructive => {
                warn!(title = %notification.title, "{}", notification.description)
            }
            Severity::Default => info!(title = %notification.title, "{}", notification.description),
        }
        eprintln!(
            "[{}] {}: {}",
            notification.severity, notification.title, notification.description
        );
    }
}

/// Keeps every notification in memory, cloned handles share the same list.
#[derive(Debug, Default, Clone)]
pub struct MemoryNotifier {
    seen: Arc<Mutex<Vec<Notification>>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        match self.seen.lock() {
            Ok(seen) => seen.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notification: Notification) {
        match self.seen.lock() {
            Ok(mut seen) => seen.push(notification),
            Err(poisoned) => poisoned.into_inner().push(notification),
        }
    }
}
