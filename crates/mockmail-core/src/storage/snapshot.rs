//! JSON snapshot encoding for the message collection.

use crate::Result;
use crate::message::Message;

/// Key the message collection is stored under.
pub const MESSAGES_KEY: &str = "messages";

/// Serializes the full collection as a JSON array.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode(messages: &[Message]) -> Result<String> {
    Ok(serde_json::to_string(messages)?)
}

/// Parses a JSON array of messages.
///
/// # Errors
///
/// Returns [`crate::Error::Serde`] if the payload is not a valid snapshot.
pub fn decode(payload: &str) -> Result<Vec<Message>> {
    Ok(serde_json::from_str(payload)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_roundtrip_preserves_ids_and_fields() {
        let messages = crate::sample::generate(10, "me@x.com");
        let decoded = decode(&encode(&messages).unwrap()).unwrap();
        assert_eq!(decoded, messages);
    }

    #[test]
    fn test_field_order_is_irrelevant() {
        let payload = r#"[{"read":false,"body":"b","subject":"s","to":"me","from":"a@x.com","id":"1"}]"#;
        let decoded = decode(payload).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].from, "a@x.com");
    }

    #[test]
    fn test_malformed_payload_is_serde_error() {
        assert!(matches!(decode("{not json"), Err(Error::Serde(_))));
        assert!(matches!(decode(r#"{"id":"1"}"#), Err(Error::Serde(_))));
    }
}
