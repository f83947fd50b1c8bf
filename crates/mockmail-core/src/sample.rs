//! Fake message generator used to seed an empty inbox.

use chrono::{Duration, Utc};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::message::{Message, MessageId};

/// Number of messages generated on first run.
pub const DEFAULT_SAMPLE_SIZE: usize = 100;

/// Recipient address used when no configuration overrides it.
pub const DEFAULT_RECIPIENT: &str = "me@mockmail.local";

/// Generated dates fall within this many days before now.
const MAX_AGE_DAYS: i64 = 365;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Brendan", "Carmen", "Dennis", "Edsger", "Frances", "Grace", "Guido",
    "Hedy", "Ivan", "Joan", "Ken", "Linus", "Margaret", "Niklaus", "Radia", "Sophie", "Tim",
];

const LAST_NAMES: &[&str] = &[
    "Allen", "Backus", "Cerf", "Dijkstra", "Eich", "Floyd", "Goldberg", "Hopper", "Kay", "Knuth",
    "Lamport", "Liskov", "McCarthy", "Perlman", "Ritchie", "Stroustrup", "Thompson", "Wirth",
];

const DOMAINS: &[&str] = &[
    "example.com",
    "example.org",
    "example.net",
    "mail.test",
    "inbox.test",
    "corp.invalid",
];

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in", "reprehenderit",
    "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur", "excepteur", "sint",
    "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui", "officia", "deserunt",
    "mollit", "anim", "id", "est", "laborum",
];

/// Generates `count` unread messages addressed to `recipient`.
#[must_use]
pub fn generate(count: usize, recipient: &str) -> Vec<Message> {
    generate_with_rng(&mut rand::thread_rng(), count, recipient)
}

/// Generates `count` unread messages using the given random source.
///
/// Seeded generators produce identical batches, IDs included.
pub fn generate_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    recipient: &str,
) -> Vec<Message> {
    (0..count).map(|_| message(rng, recipient)).collect()
}

fn message<R: Rng + ?Sized>(rng: &mut R, recipient: &str) -> Message {
    let id = uuid::Builder::from_random_bytes(rng.r#gen()).into_uuid();
    let age = Duration::seconds(rng.gen_range(0..MAX_AGE_DAYS * 24 * 60 * 60));

    Message {
        id: MessageId(id.to_string()),
        from: email(rng),
        to: recipient.to_string(),
        subject: sentence(rng),
        body: paragraphs(rng, 3),
        date: Some(Utc::now() - age),
        read: false,
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, items: &'static [&'static str]) -> &'static str {
    items.choose(rng).copied().unwrap_or_default()
}

/// Random sender address such as `Grace.Hopper42@example.com`.
fn email<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = pick(rng, FIRST_NAMES);
    let last = pick(rng, LAST_NAMES);
    let domain = pick(rng, DOMAINS);
    match rng.gen_range(0..3) {
        0 => format!("{first}.{last}@{domain}"),
        1 => format!("{first}{}@{domain}", rng.gen_range(1..100)),
        _ => format!("{first}_{last}{}@{domain}", rng.gen_range(1..100)),
    }
}

/// Capitalized lorem sentence ending with a period.
fn sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = rng.gen_range(4..11);
    let words: Vec<&str> = (0..len).map(|_| pick(rng, WORDS)).collect();
    let joined = words.join(" ");

    let mut chars = joined.chars();
    chars.next().map_or_else(String::new, |first| {
        format!("{}{}.", first.to_uppercase(), chars.as_str())
    })
}

fn paragraph<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = rng.gen_range(3..7);
    (0..len)
        .map(|_| sentence(rng))
        .collect::<Vec<_>>()
        .join(" ")
}

fn paragraphs<R: Rng + ?Sized>(rng: &mut R, count: usize) -> String {
    (0..count)
        .map(|_| paragraph(rng))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_generates_requested_count_all_unread() {
        let messages = generate(DEFAULT_SAMPLE_SIZE, DEFAULT_RECIPIENT);
        assert_eq!(messages.len(), 100);
        assert!(messages.iter().all(Message::is_unread));
        assert!(messages.iter().all(|m| m.to == DEFAULT_RECIPIENT));
    }

    #[test]
    fn test_ids_are_unique_uuids() {
        let messages = generate(500, DEFAULT_RECIPIENT);
        let ids: HashSet<_> = messages.iter().map(|m| m.id.clone()).collect();
        assert_eq!(ids.len(), messages.len());
        assert!(
            messages
                .iter()
                .all(|m| uuid::Uuid::parse_str(m.id.as_str()).is_ok())
        );
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = generate_with_rng(&mut StdRng::seed_from_u64(7), 5, "x@y.z");
        let b = generate_with_rng(&mut StdRng::seed_from_u64(7), 5, "x@y.z");
        let ids_a: Vec<_> = a.iter().map(|m| &m.id).collect();
        let ids_b: Vec<_> = b.iter().map(|m| &m.id).collect();
        assert_eq!(ids_a, ids_b);
        assert_eq!(a[0].from, b[0].from);
        assert_eq!(a[0].body, b[0].body);
    }

    #[test]
    fn test_fields_look_like_mail() {
        let mut rng = StdRng::seed_from_u64(1);
        for msg in generate_with_rng(&mut rng, 50, DEFAULT_RECIPIENT) {
            assert!(msg.from.contains('@'));
            assert!(msg.subject.ends_with('.'));
            assert!(msg.subject.chars().next().is_some_and(char::is_uppercase));
            assert_eq!(msg.body.lines().count(), 3);
            let date = msg.date.unwrap_or_default();
            assert!(date <= Utc::now());
            assert!(date > Utc::now() - Duration::days(MAX_AGE_DAYS + 1));
        }
    }

    #[test]
    fn test_zero_count_is_empty() {
        assert!(generate(0, DEFAULT_RECIPIENT).is_empty());
    }
}
