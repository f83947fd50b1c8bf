//! Filter predicates for the message list.

use crate::message::Message;

/// The search and unread predicates applied to the message list.
///
/// Predicates compose with logical AND and never reorder messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageFilter {
    /// Raw search text as typed by the user.
    pub search: String,
    /// Only show messages that have not been read.
    pub unread_only: bool,
}

impl MessageFilter {
    /// Returns the lowercased, trimmed search needle, or `None` if blank.
    #[must_use]
    pub fn needle(&self) -> Option<String> {
        let trimmed = self.search.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }

    /// Returns true if neither predicate is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.unread_only && self.search.trim().is_empty()
    }

    /// Returns the subsequence of `messages` matching this filter.
    #[must_use]
    pub fn apply<'a>(&self, messages: &'a [Message]) -> Vec<&'a Message> {
        let needle = self.needle();
        messages
            .iter()
            .filter(|msg| needle.as_deref().is_none_or(|n| msg.sender_contains(n)))
            .filter(|msg| !self.unread_only || msg.is_unread())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Message> {
        vec![
            Message::new("1", "alice@example.com", "me@x.com", "Lunch", "..."),
            Message::new("2", "Bob@Example.org", "me@x.com", "Invoice", "...").with_read(true),
            Message::new("3", "carol@example.com", "me@x.com", "Alice said hi", "..."),
        ]
    }

    fn ids(view: &[&Message]) -> Vec<String> {
        view.iter().map(|m| m.id.to_string()).collect()
    }

    #[test]
    fn test_empty_filter_returns_everything_in_order() {
        let messages = sample();
        let filter = MessageFilter::default();
        assert!(filter.is_empty());
        assert_eq!(ids(&filter.apply(&messages)), ["1", "2", "3"]);
    }

    #[test]
    fn test_search_only_matches_sender() {
        let messages = sample();
        let filter = MessageFilter {
            search: "alice".into(),
            unread_only: false,
        };
        // Message 3 mentions Alice in the subject but is not from her.
        assert_eq!(ids(&filter.apply(&messages)), ["1"]);
    }

    #[test]
    fn test_search_is_trimmed_and_case_insensitive() {
        let messages = sample();
        let filter = MessageFilter {
            search: "  EXAMPLE.ORG ".into(),
            unread_only: false,
        };
        assert_eq!(filter.needle().as_deref(), Some("example.org"));
        assert_eq!(ids(&filter.apply(&messages)), ["2"]);
    }

    #[test]
    fn test_whitespace_search_is_ignored() {
        let messages = sample();
        let filter = MessageFilter {
            search: "   ".into(),
            unread_only: false,
        };
        assert_eq!(filter.needle(), None);
        assert_eq!(filter.apply(&messages).len(), 3);
    }

    #[test]
    fn test_filters_compose_with_and() {
        let messages = sample();
        let filter = MessageFilter {
            search: "example".into(),
            unread_only: true,
        };
        assert!(!filter.is_empty());
        assert_eq!(ids(&filter.apply(&messages)), ["1", "3"]);
    }
}
