//! Unidirectional store wrapping [`InboxState`].
//!
//! The front end turns every user action into an [`Intent`], hands it to
//! [`InboxStore::dispatch`] and inspects the returned [`Outcome`]. Snapshot
//! persistence hangs off `Outcome::MessagesChanged` in exactly one place.

use tracing::debug;

use super::state::InboxState;
use crate::message::{Message, MessageId};

/// A user action against the inbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Search text changed.
    Search(String),
    /// "Unread only" filter toggled.
    UnreadOnly(bool),
    /// A list item was clicked.
    Open(MessageId),
    /// A list item's checkbox was toggled.
    Select(MessageId, bool),
    /// "Mark as Read" was clicked.
    MarkSelectedRead,
}

/// What a dispatched intent changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing observable changed.
    Unchanged,
    /// Only view state changed (filter, selection, active message).
    ViewChanged,
    /// At least one message changed; the collection must be persisted.
    MessagesChanged,
}

impl Outcome {
    /// Returns true if the collection must be written back.
    #[must_use]
    pub const fn needs_persist(self) -> bool {
        matches!(self, Self::MessagesChanged)
    }
}

/// Inbox state plus a revision counter for snapshot ordering.
#[derive(Debug, Clone, Default)]
pub struct InboxStore {
    state: InboxState,
    revision: i64,
}

impl InboxStore {
    /// Creates a store over a restored or freshly generated collection.
    #[must_use]
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            state: InboxState::new(messages),
            revision: 0,
        }
    }

    /// Starts counting revisions from `revision` (the last persisted one).
    #[must_use]
    pub fn with_revision(mut self, revision: i64) -> Self {
        self.revision = revision;
        self
    }

    /// Read access to the underlying state.
    #[must_use]
    pub const fn state(&self) -> &InboxState {
        &self.state
    }

    /// Revision of the message collection. Bumped on every change.
    #[must_use]
    pub const fn revision(&self) -> i64 {
        self.revision
    }

    /// Applies an intent.
    pub fn dispatch(&mut self, intent: Intent) -> Outcome {
        debug!("Dispatching {:?}", intent);
        let outcome = match intent {
            Intent::Search(text) => {
                if self.state.filter().search == text {
                    Outcome::Unchanged
                } else {
                    self.state.set_search(text);
                    Outcome::ViewChanged
                }
            }
            Intent::UnreadOnly(flag) => {
                if self.state.filter().unread_only == flag {
                    Outcome::Unchanged
                } else {
                    self.state.set_unread_only(flag);
                    Outcome::ViewChanged
                }
            }
            Intent::Open(id) => {
                let was_active = self.state.active_id() == Some(&id);
                if self.state.activate(&id) {
                    Outcome::MessagesChanged
                } else if !was_active && self.state.active_id() == Some(&id) {
                    Outcome::ViewChanged
                } else {
                    Outcome::Unchanged
                }
            }
            Intent::Select(id, included) => {
                if self.state.toggle_select(&id, included) {
                    Outcome::ViewChanged
                } else {
                    Outcome::Unchanged
                }
            }
            Intent::MarkSelectedRead => {
                let had_selection = self.state.has_selection();
                if self.state.mark_selected_read() > 0 {
                    Outcome::MessagesChanged
                } else if had_selection {
                    Outcome::ViewChanged
                } else {
                    Outcome::Unchanged
                }
            }
        };

        if outcome.needs_persist() {
            self.revision += 1;
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> InboxStore {
        InboxStore::new(vec![
            Message::new("1", "a@x.com", "me", "s", "b"),
            Message::new("2", "b@y.com", "me", "s", "b").with_read(true),
        ])
    }

    #[test]
    fn test_filter_intents_only_change_view() {
        let mut store = store();
        assert_eq!(store.dispatch(Intent::Search("a@".into())), Outcome::ViewChanged);
        assert_eq!(store.dispatch(Intent::Search("a@".into())), Outcome::Unchanged);
        assert_eq!(store.dispatch(Intent::UnreadOnly(true)), Outcome::ViewChanged);
        assert_eq!(store.dispatch(Intent::UnreadOnly(true)), Outcome::Unchanged);
        assert_eq!(store.revision(), 0);
        assert_eq!(store.state().filtered_view().len(), 1);
    }

    #[test]
    fn test_open_unread_message_needs_persist() {
        let mut store = store();
        let outcome = store.dispatch(Intent::Open("1".into()));
        assert_eq!(outcome, Outcome::MessagesChanged);
        assert!(outcome.needs_persist());
        assert_eq!(store.revision(), 1);

        assert_eq!(store.dispatch(Intent::Open("1".into())), Outcome::Unchanged);
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_open_read_message_only_moves_pointer() {
        let mut store = store();
        assert_eq!(store.dispatch(Intent::Open("2".into())), Outcome::ViewChanged);
        assert_eq!(store.dispatch(Intent::Open("ghost".into())), Outcome::Unchanged);
        assert_eq!(store.state().active_id(), Some(&MessageId::from("2")));
    }

    #[test]
    fn test_mark_selected_read_outcomes() {
        let mut store = store();
        assert_eq!(store.dispatch(Intent::MarkSelectedRead), Outcome::Unchanged);

        // Only an already-read message selected: selection clears, nothing to persist.
        store.dispatch(Intent::Select("2".into(), true));
        assert_eq!(store.dispatch(Intent::MarkSelectedRead), Outcome::ViewChanged);
        assert!(!store.state().has_selection());

        store.dispatch(Intent::Select("1".into(), true));
        assert_eq!(store.dispatch(Intent::MarkSelectedRead), Outcome::MessagesChanged);
        assert_eq!(store.state().unread_count(), 0);
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_revision_continues_from_persisted_value() {
        let mut store = store().with_revision(41);
        store.dispatch(Intent::Open("1".into()));
        assert_eq!(store.revision(), 42);
    }
}
