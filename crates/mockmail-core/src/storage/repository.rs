//! Snapshot storage repository.

use chrono::Utc;
use sqlx::Row;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::{info, warn};

use super::snapshot::{decode, encode};
use crate::message::Message;
use crate::{Error, Result};

/// A message collection as last written, with its revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSnapshot {
    /// Revision the snapshot was written at.
    pub revision: i64,
    /// The full message collection.
    pub messages: Vec<Message>,
}

/// Repository holding whole-collection snapshots under string keys.
#[derive(Debug, Clone)]
pub struct SnapshotRepository {
    pool: SqlitePool,
}

impl SnapshotRepository {
    /// Create a new repository with the given database path.
    ///
    /// Creates the database and tables if they don't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails or schema creation fails.
    pub async fn new(database_path: &str) -> Result<Self> {
        let url = format!("sqlite:{database_path}?mode=rwc");
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await?;

        let repo = Self { pool };
        repo.initialize().await?;
        Ok(repo)
    }

    /// Create an in-memory repository for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails or schema creation fails.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        let repo = Self { pool };
        repo.initialize().await?;
        Ok(repo)
    }

    /// Initialize database schema.
    async fn initialize(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS snapshots (
                key TEXT PRIMARY KEY NOT NULL,
                revision INTEGER NOT NULL DEFAULT 0,
                payload TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Reads the raw payload stored under `key`.
    async fn load_raw(&self, key: &str) -> Result<Option<(i64, String)>> {
        let row = sqlx::query(
            r"
            SELECT revision, payload
            FROM snapshots
            WHERE key = ?
            ",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| (row.get::<i64, _>("revision"), row.get::<String, _>("payload"))))
    }

    /// Load the snapshot stored under `key`.
    ///
    /// Returns `None` if nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored payload is malformed.
    pub async fn load(&self, key: &str) -> Result<Option<StoredSnapshot>> {
        let Some((revision, payload)) = self.load_raw(key).await? else {
            return Ok(None);
        };

        Ok(Some(StoredSnapshot {
            revision,
            messages: decode(&payload)?,
        }))
    }

    /// Write the full collection under `key`.
    ///
    /// Writes older than the stored revision are discarded, so snapshots
    /// that complete out of order never roll the collection back. Returns
    /// `true` if the snapshot was written.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the database query fails.
    pub async fn save(&self, key: &str, revision: i64, messages: &[Message]) -> Result<bool> {
        let payload = encode(messages)?;

        let result = sqlx::query(
            r"
            INSERT INTO snapshots (key, revision, payload, updated_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                revision = excluded.revision,
                payload = excluded.payload,
                updated_at = excluded.updated_at
            WHERE excluded.revision >= snapshots.revision
            ",
        )
        .bind(key)
        .bind(revision)
        .bind(&payload)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        let written = result.rows_affected() > 0;
        if !written {
            warn!("Discarded stale snapshot for {} at revision {}", key, revision);
        }
        Ok(written)
    }

    /// Delete the snapshot stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn clear(&self, key: &str) -> Result<()> {
        sqlx::query("DELETE FROM snapshots WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Load the snapshot under `key`, seeding it if absent or unreadable.
    ///
    /// The seed is written back immediately so later launches restore it.
    ///
    /// # Errors
    ///
    /// Returns an error if the database itself fails. A malformed payload is
    /// not an error; it is replaced by the seed.
    pub async fn load_or_seed<F>(&self, key: &str, seed: F) -> Result<StoredSnapshot>
    where
        F: FnOnce() -> Vec<Message>,
    {
        let revision = match self.load(key).await {
            Ok(Some(snapshot)) => {
                info!(
                    "Restored {} messages from snapshot {} (revision {})",
                    snapshot.messages.len(),
                    key,
                    snapshot.revision
                );
                return Ok(snapshot);
            }
            Ok(None) => 0,
            Err(Error::Serde(e)) => {
                warn!("Snapshot {} is malformed, reseeding: {}", key, e);
                self.load_raw(key).await?.map_or(0, |(revision, _)| revision)
            }
            Err(e) => return Err(e),
        };

        let messages = seed();
        self.save(key, revision, &messages).await?;
        info!("Seeded snapshot {} with {} messages", key, messages.len());

        Ok(StoredSnapshot { revision, messages })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MESSAGES_KEY;

    fn messages() -> Vec<Message> {
        vec![
            Message::new("1", "a@x.com", "me", "First", "one"),
            Message::new("2", "b@y.com", "me", "Second", "two").with_read(true),
        ]
    }

    #[tokio::test]
    async fn test_load_missing_key() {
        let repo = SnapshotRepository::in_memory().await.unwrap();
        assert!(repo.load(MESSAGES_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let repo = SnapshotRepository::in_memory().await.unwrap();
        assert!(repo.save(MESSAGES_KEY, 1, &messages()).await.unwrap());

        let snapshot = repo.load(MESSAGES_KEY).await.unwrap().unwrap();
        assert_eq!(snapshot.revision, 1);
        assert_eq!(snapshot.messages, messages());
    }

    #[tokio::test]
    async fn test_stale_revision_is_ignored() {
        let repo = SnapshotRepository::in_memory().await.unwrap();
        let mut newer = messages();
        newer[0].read = true;

        assert!(repo.save(MESSAGES_KEY, 4, &newer).await.unwrap());
        assert!(!repo.save(MESSAGES_KEY, 3, &messages()).await.unwrap());

        let snapshot = repo.load(MESSAGES_KEY).await.unwrap().unwrap();
        assert_eq!(snapshot.revision, 4);
        assert!(snapshot.messages[0].read);
    }

    #[tokio::test]
    async fn test_load_or_seed_seeds_once() {
        let repo = SnapshotRepository::in_memory().await.unwrap();

        let first = repo.load_or_seed(MESSAGES_KEY, messages).await.unwrap();
        assert_eq!(first.messages, messages());

        let second = repo
            .load_or_seed(MESSAGES_KEY, || -> Vec<Message> { panic!("seed must not run twice") })
            .await
            .unwrap();
        assert_eq!(second.messages, messages());
    }

    #[tokio::test]
    async fn test_load_or_seed_replaces_malformed_payload() {
        let repo = SnapshotRepository::in_memory().await.unwrap();
        sqlx::query(
            "INSERT INTO snapshots (key, revision, payload, updated_at) VALUES (?, 7, '{oops', '')",
        )
        .bind(MESSAGES_KEY)
        .execute(&repo.pool)
        .await
        .unwrap();

        assert!(matches!(
            repo.load(MESSAGES_KEY).await,
            Err(Error::Serde(_))
        ));

        let snapshot = repo.load_or_seed(MESSAGES_KEY, messages).await.unwrap();
        assert_eq!(snapshot.revision, 7);
        assert_eq!(snapshot.messages, messages());

        // The seed replaced the broken payload.
        let reloaded = repo.load(MESSAGES_KEY).await.unwrap().unwrap();
        assert_eq!(reloaded.messages, messages());
    }

    #[tokio::test]
    async fn test_clear() {
        let repo = SnapshotRepository::in_memory().await.unwrap();
        repo.save(MESSAGES_KEY, 1, &messages()).await.unwrap();
        repo.clear(MESSAGES_KEY).await.unwrap();
        assert!(repo.load(MESSAGES_KEY).await.unwrap().is_none());
    }
}
