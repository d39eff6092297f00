//! User-visible notices.
//!
//! Flows never surface provider failures as errors; they publish a
//! [`Notice`] instead. Front ends subscribe through a [`NoticeDispatcher`]
//! and render notices however they like (alert, toast, stderr line).

use core::fmt;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// Neutral information.
    Info,
    /// An action completed.
    Success,
    /// A feature degraded but the action continued.
    Warning,
    /// An action failed.
    Error,
}

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Severity.
    pub kind: NoticeKind,
    /// Short title.
    pub title: String,
    /// Body text.
    pub message: String,
}

impl Notice {
    /// Create a notice.
    pub fn new(kind: NoticeKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Camera permission refused; capture aborted.
    pub fn camera_permission_denied() -> Self {
        Self::new(
            NoticeKind::Error,
            "Permission Denied",
            "Permission to access the camera is required!",
        )
    }

    /// Location permission refused; capture continues untagged.
    pub fn location_permission_denied() -> Self {
        Self::new(
            NoticeKind::Warning,
            "Permission Denied",
            "Permission to access location was denied. Location will not be added to photos.",
        )
    }

    /// Position or geocode lookup failed.
    pub fn location_unavailable() -> Self {
        Self::new(
            NoticeKind::Warning,
            "Location Error",
            "Could not fetch location.",
        )
    }

    /// The camera reported an error.
    pub fn camera_failed() -> Self {
        Self::new(NoticeKind::Error, "Camera Error", "Could not open the camera.")
    }

    /// Photo captured and written to storage.
    pub fn photo_saved() -> Self {
        Self::new(
            NoticeKind::Success,
            "Success",
            "Image captured and saved! Tap on the photo to view it full screen.",
        )
    }

    /// Photo captured but the storage write failed.
    pub fn photo_save_failed() -> Self {
        Self::new(NoticeKind::Error, "Error", "Could not save the image.")
    }

    /// Media library permission refused.
    pub fn media_permission_denied() -> Self {
        Self::new(
            NoticeKind::Error,
            "Permission Denied",
            "Permission to access media library is required to download images.",
        )
    }

    /// Image copied to the gallery.
    pub fn download_saved() -> Self {
        Self::new(
            NoticeKind::Success,
            "Success",
            "Image downloaded successfully to your gallery!",
        )
    }

    /// Gallery save failed.
    pub fn download_failed() -> Self {
        Self::new(NoticeKind::Error, "Error", "Failed to download image.")
    }

    /// No application can open the live-streaming site.
    pub fn youtube_not_found() -> Self {
        Self::new(
            NoticeKind::Warning,
            "YouTube App Not Found",
            "To use this feature, please install the YouTube app.",
        )
    }

    /// Sharing a news story.
    pub fn share(title: &str) -> Self {
        Self::new(NoticeKind::Info, "Share", format!("Sharing: {}", title))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

/// Sender for notices.
pub type NoticeSender = broadcast::Sender<Notice>;

/// Receiver for notices.
pub type NoticeReceiver = broadcast::Receiver<Notice>;

/// Fan-out of notices to any number of subscribers.
#[derive(Debug, Clone)]
pub struct NoticeDispatcher {
    sender: NoticeSender,
}

impl NoticeDispatcher {
    /// Create a dispatcher buffering up to `capacity` notices per receiver.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to notices published from now on.
    pub fn subscribe(&self) -> NoticeReceiver {
        self.sender.subscribe()
    }

    /// Publish a notice.
    pub fn notify(&self, notice: Notice) {
        debug!("Notice: {}", notice);
        // Ignore error if no receivers
        let _ = self.sender.send(notice);
    }

    /// Get the number of active receivers.
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for NoticeDispatcher {
    fn default() -> Self {
        Self::new(64)
    }
}

/// Drain every notice currently buffered in `receiver`.
pub fn drain(receiver: &mut NoticeReceiver) -> Vec<Notice> {
    let mut notices = Vec::new();
    loop {
        match receiver.try_recv() {
            Ok(notice) => notices.push(notice),
            Err(broadcast::error::TryRecvError::Lagged(_)) => continue,
            Err(_) => break,
        }
    }
    notices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_without_receivers() {
        let dispatcher = NoticeDispatcher::default();
        assert_eq!(dispatcher.receiver_count(), 0);
        dispatcher.notify(Notice::photo_saved());
    }

    #[test]
    fn test_subscribers_receive_in_order() {
        let dispatcher = NoticeDispatcher::new(8);
        let mut rx = dispatcher.subscribe();

        dispatcher.notify(Notice::location_permission_denied());
        dispatcher.notify(Notice::photo_saved());

        let notices = drain(&mut rx);
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].kind, NoticeKind::Warning);
        assert!(notices[0].message.contains("Location will not be added"));
        assert_eq!(notices[1].kind, NoticeKind::Success);
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn test_share_notice() {
        let notice = Notice::share("Big News");
        assert_eq!(notice.to_string(), "Share: Sharing: Big News");
    }

    #[test]
    fn test_notice_serialization() {
        let json = serde_json::to_string(&Notice::download_failed()).unwrap();
        assert!(json.contains("\"kind\":\"error\""));
        assert!(json.contains("Failed to download image."));
    }
}
