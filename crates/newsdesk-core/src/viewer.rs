//! Full-screen photo viewer and tab state.

use serde::{Deserialize, Serialize};

use newsdesk_types::PhotoRecord;

/// Bottom navigation tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    /// News feed.
    #[default]
    Home,
    Search,
    Videos,
    Alerts,
}

/// State of the full-screen overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewer {
    selected: Option<PhotoRecord>,
    visible: bool,
}

impl Viewer {
    /// Show `record` full screen.
    pub fn open(&mut self, record: PhotoRecord) {
        self.selected = Some(record);
        self.visible = true;
    }

    /// Hide the overlay. The last selection is kept.
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Whether the overlay is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The record on screen, if the overlay is shown.
    pub fn selected(&self) -> Option<&PhotoRecord> {
        self.selected.as_ref().filter(|_| self.visible)
    }

    /// Whether the overlay is currently showing `uri`.
    pub fn is_showing(&self, uri: &str) -> bool {
        self.selected().is_some_and(|r| r.uri == uri)
    }
}
