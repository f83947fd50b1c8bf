//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.
//! Every inbox event maps onto exactly one core [`Intent`].

use mockmail_core::{Intent, MessageId, SnapshotRepository, StoredSnapshot};

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    // Startup
    /// Snapshot restored or seeded.
    InboxLoaded(LoadedInbox),

    // Inbox
    /// Search text changed.
    SearchChanged(String),
    /// "Unread only" chip toggled.
    UnreadOnlyToggled(bool),
    /// A list item was clicked.
    OpenMessage(MessageId),
    /// A list item's check toggle changed.
    SelectionToggled(MessageId, bool),
    /// "Mark as Read" clicked.
    MarkSelectedRead,

    // Persistence
    /// Snapshot write finished.
    SnapshotSaved(Result<(), String>),

    // Chrome
    /// Close the error banner.
    DismissError,
    /// Switch between light and dark mode.
    ToggleTheme,
}

impl Message {
    /// Returns the inbox intent this event stands for, if any.
    pub fn into_intent(self) -> Option<Intent> {
        match self {
            Self::SearchChanged(text) => Some(Intent::Search(text)),
            Self::UnreadOnlyToggled(on) => Some(Intent::UnreadOnly(on)),
            Self::OpenMessage(id) => Some(Intent::Open(id)),
            Self::SelectionToggled(id, included) => Some(Intent::Select(id, included)),
            Self::MarkSelectedRead => Some(Intent::MarkSelectedRead),
            Self::InboxLoaded(_)
            | Self::SnapshotSaved(_)
            | Self::DismissError
            | Self::ToggleTheme => None,
        }
    }
}

/// Result of the startup load.
#[derive(Debug, Clone)]
pub struct LoadedInbox {
    /// Key the snapshot lives under.
    pub storage_key: String,
    /// Open repository; `None` when running without persistence.
    pub repository: Option<SnapshotRepository>,
    /// Restored or freshly generated collection.
    pub snapshot: StoredSnapshot,
    /// Shown in the error banner when startup degraded.
    pub warning: Option<String>,
}
