//! Inbox state manager.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::filter::MessageFilter;
use crate::message::{Message, MessageId};

/// Result of pointing the detail pane at a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// No message with that ID exists; nothing changed.
    NotFound,
    /// The message is now active and was already read.
    AlreadyRead,
    /// The message is now active and still needs to be marked read.
    Unread,
}

/// Owns the message collection and everything the list view derives from it.
///
/// IDs referring to messages that do not exist are ignored by every
/// operation.
#[derive(Debug, Clone, Default)]
pub struct InboxState {
    /// All messages in storage order.
    messages: Vec<Message>,
    /// Message shown in the detail pane.
    active: Option<MessageId>,
    /// Messages checked for bulk operations.
    selected: HashSet<MessageId>,
    /// Current list filter.
    filter: MessageFilter,
}

impl InboxState {
    /// Creates a new state from a message collection.
    ///
    /// Duplicate IDs keep their first occurrence.
    #[must_use]
    pub fn new(messages: Vec<Message>) -> Self {
        let mut seen = HashSet::with_capacity(messages.len());
        let total = messages.len();
        let messages: Vec<Message> = messages
            .into_iter()
            .filter(|msg| seen.insert(msg.id.clone()))
            .collect();

        if messages.len() != total {
            warn!(
                "Dropped {} message(s) with duplicate IDs",
                total - messages.len()
            );
        }

        Self {
            messages,
            ..Self::default()
        }
    }

    /// All messages in storage order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Looks up a message by ID.
    #[must_use]
    pub fn get(&self, id: &MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| &m.id == id)
    }

    fn get_mut(&mut self, id: &MessageId) -> Option<&mut Message> {
        self.messages.iter_mut().find(|m| &m.id == id)
    }

    /// Returns true if a message with this ID exists.
    #[must_use]
    pub fn contains(&self, id: &MessageId) -> bool {
        self.get(id).is_some()
    }

    /// ID of the active message.
    #[must_use]
    pub const fn active_id(&self) -> Option<&MessageId> {
        self.active.as_ref()
    }

    /// The active message, as currently stored in the collection.
    #[must_use]
    pub fn active_message(&self) -> Option<&Message> {
        self.active.as_ref().and_then(|id| self.get(id))
    }

    /// Current filter.
    #[must_use]
    pub const fn filter(&self) -> &MessageFilter {
        &self.filter
    }

    /// Number of unread messages in the whole collection.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_unread()).count()
    }

    /// Returns true if the message is checked.
    #[must_use]
    pub fn is_selected(&self, id: &MessageId) -> bool {
        self.selected.contains(id)
    }

    /// Number of checked messages.
    #[must_use]
    pub fn selection_len(&self) -> usize {
        self.selected.len()
    }

    /// Returns true if at least one message is checked.
    #[must_use]
    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Makes `id` the active message.
    ///
    /// Only the pointer moves; read flags are left alone so callers can
    /// decide whether to follow up with [`Self::mark_read`].
    pub fn set_active(&mut self, id: &MessageId) -> Activation {
        let Some(msg) = self.get(id) else {
            debug!("Ignoring activation of unknown message {}", id);
            return Activation::NotFound;
        };
        let activation = if msg.is_unread() {
            Activation::Unread
        } else {
            Activation::AlreadyRead
        };
        self.active = Some(id.clone());
        activation
    }

    /// Marks a single message as read.
    ///
    /// Returns `true` if its read flag changed.
    pub fn mark_read(&mut self, id: &MessageId) -> bool {
        self.get_mut(id).is_some_and(Message::mark_read)
    }

    /// Opens a message: activates it and marks it read if it was unread.
    ///
    /// Returns `true` if the collection changed.
    pub fn activate(&mut self, id: &MessageId) -> bool {
        match self.set_active(id) {
            Activation::Unread => self.mark_read(id),
            Activation::AlreadyRead | Activation::NotFound => false,
        }
    }

    /// Replaces the search text.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.filter.search = text.into();
    }

    /// Replaces the unread-only flag.
    pub const fn set_unread_only(&mut self, unread_only: bool) {
        self.filter.unread_only = unread_only;
    }

    /// Checks or unchecks a message.
    ///
    /// Returns `true` if the selection changed.
    pub fn toggle_select(&mut self, id: &MessageId, included: bool) -> bool {
        if included {
            self.contains(id) && self.selected.insert(id.clone())
        } else {
            self.selected.remove(id)
        }
    }

    /// Marks every checked message as read and clears the selection.
    ///
    /// Returns how many messages went from unread to read.
    pub fn mark_selected_read(&mut self) -> usize {
        let selected = std::mem::take(&mut self.selected);
        self.messages
            .iter_mut()
            .filter(|m| selected.contains(&m.id))
            .map(Message::mark_read)
            .filter(|changed| *changed)
            .count()
    }

    /// Messages matching the current filter, in storage order.
    #[must_use]
    pub fn filtered_view(&self) -> Vec<&Message> {
        self.filter.apply(&self.messages)
    }
}
