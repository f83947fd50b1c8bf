//! Message model types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque, unique identifier for a message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub String);

impl MessageId {
    /// Create a new message ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MessageId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A single message in the inbox.
///
/// The only mutation a message ever sees is the one-way `read` transition,
/// see [`Message::mark_read`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier.
    pub id: MessageId,
    /// Sender address.
    pub from: String,
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Plain text body.
    pub body: String,
    /// When the message was sent, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    /// Whether the message has been read.
    pub read: bool,
}

impl Message {
    /// Creates a new unread message without a date.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: MessageId::new(id),
            from: from.into(),
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
            date: None,
            read: false,
        }
    }

    /// Sets the message date.
    #[must_use]
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Sets the read flag.
    #[must_use]
    pub fn with_read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }

    /// Returns true if the message has not been read yet.
    #[must_use]
    pub const fn is_unread(&self) -> bool {
        !self.read
    }

    /// Marks the message as read.
    ///
    /// Returns `true` if the flag actually changed.
    pub const fn mark_read(&mut self) -> bool {
        let changed = !self.read;
        self.read = true;
        changed
    }

    /// Returns true if the sender address contains `needle`.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn sender_contains(&self, needle: &str) -> bool {
        self.from.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_read_is_one_way() {
        let mut msg = Message::new("1", "a@x.com", "me@x.com", "Hi", "Body");
        assert!(msg.is_unread());
        assert!(msg.mark_read());
        assert!(!msg.is_unread());
        assert!(!msg.mark_read());
        assert!(msg.read);
    }

    #[test]
    fn test_sender_contains_ignores_case_of_address() {
        let msg = Message::new("1", "Kassandra.Haley@Erich.biz", "me@x.com", "Hi", "Body");
        assert!(msg.sender_contains("kassandra"));
        assert!(msg.sender_contains("@erich"));
        assert!(!msg.sender_contains("haley@x"));
    }

    #[test]
    fn test_message_id_serializes_as_plain_string() {
        let id = MessageId::new("abc-123");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc-123\"");
        assert_eq!(id.to_string(), "abc-123");
    }

    #[test]
    fn test_missing_date_deserializes_as_none() {
        let json = r#"{"id":"1","from":"a@x.com","to":"b@y.com","subject":"s","body":"b","read":true}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.date, None);
        assert!(msg.read);
        assert_eq!(msg.id, MessageId::from("1"));
    }
}
