//! Application configuration.
//!
//! Read from `<config_dir>/mockmail/config.json`. The file is optional and
//! every field has a default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::sample::{DEFAULT_RECIPIENT, DEFAULT_SAMPLE_SIZE};
use crate::storage::MESSAGES_KEY;
use crate::{Error, Result};

const APP_DIR: &str = "mockmail";

/// Storage and sample data settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InboxConfig {
    /// SQLite database file. Defaults to `<data_dir>/mockmail/mockmail.db`.
    pub database_path: Option<PathBuf>,
    /// Key the message snapshot is stored under.
    pub storage_key: String,
    /// Number of messages generated for an empty inbox.
    pub sample_size: usize,
    /// Recipient address of generated messages.
    pub recipient: String,
}

impl Default for InboxConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            storage_key: MESSAGES_KEY.to_string(),
            sample_size: DEFAULT_SAMPLE_SIZE,
            recipient: DEFAULT_RECIPIENT.to_string(),
        }
    }
}

impl InboxConfig {
    /// Default location of the config file.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("config.json")
    }

    /// Loads the config from `path`, falling back to defaults if the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if it contains invalid values.
    pub async fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = tokio::fs::read_to_string(path).await?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        info!("Config loaded from {:?}", path);
        Ok(config)
    }

    /// Checks values that serde cannot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(Error::Config("storage_key must not be empty".to_string()));
        }
        if !self.recipient.contains('@') {
            return Err(Error::Config(format!(
                "recipient is not an email address: {}",
                self.recipient
            )));
        }
        Ok(())
    }

    /// Resolved database path.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.database_path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
                .join("mockmail.db")
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = InboxConfig::default();
        assert_eq!(config.storage_key, "messages");
        assert_eq!(config.sample_size, 100);
        assert!(config.validate().is_ok());
        assert!(config.database_path().ends_with("mockmail/mockmail.db"));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: InboxConfig = serde_json::from_str(r#"{"sample_size": 5}"#).unwrap();
        assert_eq!(config.sample_size, 5);
        assert_eq!(config.recipient, DEFAULT_RECIPIENT);
    }

    #[test]
    fn test_explicit_database_path_wins() {
        let config = InboxConfig {
            database_path: Some(PathBuf::from("/tmp/inbox.db")),
            ..InboxConfig::default()
        };
        assert_eq!(config.database_path(), PathBuf::from("/tmp/inbox.db"));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let blank_key = InboxConfig {
            storage_key: "  ".into(),
            ..InboxConfig::default()
        };
        assert!(matches!(blank_key.validate(), Err(Error::Config(_))));

        let bad_recipient = InboxConfig {
            recipient: "nobody".into(),
            ..InboxConfig::default()
        };
        assert!(matches!(bad_recipient.validate(), Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_load_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("mockmail-test-does-not-exist.json");
        let config = InboxConfig::load(&path).await.unwrap();
        assert_eq!(config, InboxConfig::default());
    }

    #[tokio::test]
    async fn test_load_reads_file() {
        let path = std::env::temp_dir().join(format!("mockmail-config-{}.json", std::process::id()));
        tokio::fs::write(&path, r#"{"recipient": "tester@example.com", "sample_size": 3}"#)
            .await
            .unwrap();

        let config = InboxConfig::load(&path).await.unwrap();
        assert_eq!(config.recipient, "tester@example.com");
        assert_eq!(config.sample_size, 3);

        tokio::fs::remove_file(&path).await.unwrap();
    }
}
