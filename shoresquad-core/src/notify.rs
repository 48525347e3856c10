//! User-facing notifications.
//!
//! `NotificationCenter` hands one-shot messages to a pluggable `NotifySink`
//! and schedules their dismissal. It owns no domain state; every component
//! may call it at any time.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::Serialize;

use crate::constants::{INLINE_ERROR_DURATION, INLINE_SUCCESS_DURATION, TOAST_DURATION};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Severity::Success => (0x2E, 0xCC, 0x71),
            Severity::Warning => (0xFF, 0xB8, 0x1C),
            Severity::Error => (0xE7, 0x4C, 0x3C),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Channel {
    Toast,
    InlineError,
    InlineSuccess,
    LoadingOverlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NotificationId(u64);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub id: NotificationId,
    pub channel: Channel,
    pub severity: Severity,
    pub message: String,
    /// None for the loading overlay, which is toggled explicitly
    pub dismiss_after: Option<Duration>,
    /// Only meaningful for the loading overlay
    pub active: bool,
}

/// Presentation-side receiver of notifications.
pub trait NotifySink: Send + Sync {
    fn show(&self, notification: &Notification);

    fn dismiss(&self, id: NotificationId);
}

pub struct NotificationCenter {
    sink: Arc<dyn NotifySink>,
    next_id: AtomicU64,
    overlay: Mutex<Option<NotificationId>>,
}

impl NotificationCenter {
    pub fn new(sink: Arc<dyn NotifySink>) -> Self {
        NotificationCenter {
            sink,
            next_id: AtomicU64::new(1),
            overlay: Mutex::new(None),
        }
    }

    pub fn toast(&self, message: impl Into<String>, severity: Severity) -> NotificationId {
        self.emit(Channel::Toast, severity, message.into(), TOAST_DURATION)
    }

    pub fn inline_error(
        &self,
        message: impl Into<String>,
        duration: Option<Duration>,
    ) -> NotificationId {
        self.emit(
            Channel::InlineError,
            Severity::Error,
            message.into(),
            duration.unwrap_or(INLINE_ERROR_DURATION),
        )
    }

    pub fn inline_success(
        &self,
        message: impl Into<String>,
        duration: Option<Duration>,
    ) -> NotificationId {
        self.emit(
            Channel::InlineSuccess,
            Severity::Success,
            message.into(),
            duration.unwrap_or(INLINE_SUCCESS_DURATION),
        )
    }

    /// Toggle the singleton loading overlay. The overlay keeps its id across
    /// calls.
    pub fn loading_overlay(&self, show: bool, message: Option<&str>) -> NotificationId {
        let id = {
            let mut overlay = self.overlay.lock().unwrap_or_else(|e| e.into_inner());
            *overlay.get_or_insert_with(|| self.allocate_id())
        };

        self.sink.show(&Notification {
            id,
            channel: Channel::LoadingOverlay,
            severity: Severity::Success,
            message: message.unwrap_or("Loading...").to_string(),
            dismiss_after: None,
            active: show,
        });

        id
    }

    fn emit(
        &self,
        channel: Channel,
        severity: Severity,
        message: String,
        dismiss_after: Duration,
    ) -> NotificationId {
        let id = self.allocate_id();
        tracing::debug!(?channel, ?severity, %message, "notification");

        self.sink.show(&Notification {
            id,
            channel,
            severity,
            message,
            dismiss_after: Some(dismiss_after),
            active: true,
        });
        self.schedule_dismiss(id, dismiss_after);

        id
    }

    fn allocate_id(&self) -> NotificationId {
        NotificationId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    // Without a runtime the sink keeps the message until it is replaced.
    fn schedule_dismiss(&self, id: NotificationId, after: Duration) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            return;
        };
        let sink = Arc::clone(&self.sink);
        handle.spawn(async move {
            tokio::time::sleep(after).await;
            sink.dismiss(id);
        });
    }
}

/// Sink that keeps every notification it receives, for headless runs and tests.
#[derive(Default)]
pub struct RecordingSink {
    shown: Mutex<Vec<Notification>>,
    dismissed: Mutex<Vec<NotificationId>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        RecordingSink::default()
    }

    pub fn shown(&self) -> Vec<Notification> {
        self.shown.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn dismissed(&self) -> Vec<NotificationId> {
        self.dismissed.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn with_severity(&self, severity: Severity) -> Vec<Notification> {
        self.shown()
            .into_iter()
            .filter(|n| n.severity == severity && n.channel != Channel::LoadingOverlay)
            .collect()
    }
}

impl NotifySink for RecordingSink {
    fn show(&self, notification: &Notification) {
        self.shown
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(notification.clone());
    }

    fn dismiss(&self, id: NotificationId) {
        self.dismissed
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(id);
    }
}
