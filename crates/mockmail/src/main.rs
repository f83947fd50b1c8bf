//! `Mockmail` - Desktop inbox demo
//!
//! Built with Rust and the iced GUI framework over fake, locally persisted
//! messages.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod message;
mod style;
mod view;

use iced::widget::{column, row};
use iced::{Element, Length, Task};
use mockmail_core::{InboxConfig, InboxStore, Intent, SnapshotRepository, StoredSnapshot, sample};
use mockmail_core::{MESSAGES_KEY, Message as Mail};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use message::{LoadedInbox, Message};
use style::widgets::ThemeMode;

fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mockmail=debug,mockmail_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Mockmail");

    iced::application(Mockmail::new, Mockmail::update, Mockmail::view)
        .title("Mockmail")
        .run()
}

/// Main application state.
struct Mockmail {
    /// Inbox state and its revision counter.
    inbox: InboxStore,
    /// Snapshot storage; `None` when persistence is unavailable.
    repository: Option<SnapshotRepository>,
    /// Key the collection is stored under.
    storage_key: String,
    /// Whether the snapshot is still loading.
    is_loading: bool,
    /// Error message to display.
    error_message: Option<String>,
    /// Current theme mode (light/dark).
    theme_mode: ThemeMode,
}

impl Default for Mockmail {
    fn default() -> Self {
        Self {
            inbox: InboxStore::default(),
            repository: None,
            storage_key: MESSAGES_KEY.to_string(),
            is_loading: true,
            error_message: None,
            theme_mode: ThemeMode::Dark,
        }
    }
}

impl Mockmail {
    /// Create new application instance.
    fn new() -> (Self, Task<Message>) {
        let app = Self::default();
        app.apply_theme();
        (app, Task::perform(load_inbox(), Message::InboxLoaded))
    }

    /// Applies the current theme mode to the global palette.
    fn apply_theme(&self) {
        style::widgets::palette::set_theme(self.theme_mode);
    }

    /// Update state based on message.
    #[allow(clippy::needless_pass_by_value)]
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::InboxLoaded(loaded) => {
                info!(
                    "Inbox ready: {} messages at revision {}",
                    loaded.snapshot.messages.len(),
                    loaded.snapshot.revision
                );
                self.inbox = InboxStore::new(loaded.snapshot.messages)
                    .with_revision(loaded.snapshot.revision);
                self.repository = loaded.repository;
                self.storage_key = loaded.storage_key;
                self.is_loading = false;
                if loaded.warning.is_some() {
                    self.error_message = loaded.warning;
                }
            }
            Message::SnapshotSaved(result) => {
                if let Err(e) = result {
                    warn!("Failed to save snapshot: {}", e);
                    self.error_message = Some(format!("Failed to save inbox: {e}"));
                }
            }
            Message::DismissError => {
                self.error_message = None;
            }
            Message::ToggleTheme => {
                self.theme_mode = self.theme_mode.toggled();
                self.apply_theme();
            }
            inbox_event => {
                if self.is_loading {
                    debug!("Ignoring {:?} while loading", inbox_event);
                    return Task::none();
                }
                if let Some(intent) = inbox_event.into_intent() {
                    return self.dispatch(intent);
                }
            }
        }
        Task::none()
    }

    /// Runs an intent through the store and persists the collection if it changed.
    fn dispatch(&mut self, intent: Intent) -> Task<Message> {
        let outcome = self.inbox.dispatch(intent);
        if !outcome.needs_persist() {
            return Task::none();
        }

        let Some(repository) = self.repository.clone() else {
            debug!("No repository, snapshot kept in memory only");
            return Task::none();
        };

        Task::perform(
            save_snapshot(
                repository,
                self.storage_key.clone(),
                self.inbox.revision(),
                self.inbox.state().messages().to_vec(),
            ),
            Message::SnapshotSaved,
        )
    }

    /// Render current state as UI.
    fn view(&self) -> Element<'_, Message> {
        let state = self.inbox.state();
        let filter = state.filter();

        let header = view::view_header(
            &filter.search,
            filter.unread_only,
            state.selection_len(),
            state.unread_count(),
            self.theme_mode,
        );

        let mut layout = column![header];
        if let Some(error) = &self.error_message {
            layout = layout.push(view::view_error_banner(error));
        }

        let main_content = row![
            view::view_message_list(state, self.is_loading),
            view::view_message_content(state.active_message()),
        ]
        .height(Length::Fill);

        layout
            .push(main_content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Load configuration, open storage and restore or seed the collection.
///
/// Never fails: without usable storage the inbox runs in memory and the
/// returned warning explains why.
async fn load_inbox() -> LoadedInbox {
    let config = match InboxConfig::load(&InboxConfig::default_path()).await {
        Ok(config) => config,
        Err(e) => {
            warn!("Config unusable, using defaults: {}", e);
            InboxConfig::default()
        }
    };

    match open_snapshot(&config).await {
        Ok((repository, snapshot)) => LoadedInbox {
            storage_key: config.storage_key,
            repository: Some(repository),
            snapshot,
            warning: None,
        },
        Err(e) => {
            warn!("Persistence unavailable, running in memory: {}", e);
            LoadedInbox {
                snapshot: StoredSnapshot {
                    revision: 0,
                    messages: seed(&config),
                },
                storage_key: config.storage_key,
                repository: None,
                warning: Some(format!("Changes will not be saved: {e}")),
            }
        }
    }
}

async fn open_snapshot(
    config: &InboxConfig,
) -> mockmail_core::Result<(SnapshotRepository, StoredSnapshot)> {
    let db_path = config.database_path();
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let repository = SnapshotRepository::new(db_path.to_str().unwrap_or("mockmail.db")).await?;
    let snapshot = repository
        .load_or_seed(&config.storage_key, || seed(config))
        .await?;

    Ok((repository, snapshot))
}

fn seed(config: &InboxConfig) -> Vec<Mail> {
    sample::generate(config.sample_size, &config.recipient)
}

/// Write the collection at `revision`; stale revisions are skipped, not errors.
async fn save_snapshot(
    repository: SnapshotRepository,
    key: String,
    revision: i64,
    messages: Vec<Mail>,
) -> Result<(), String> {
    match repository.save(&key, revision, &messages).await {
        Ok(true) => Ok(()),
        Ok(false) => {
            debug!("Skipped stale snapshot revision {}", revision);
            Ok(())
        }
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use mockmail_core::MessageId;

    use super::*;

    fn loaded_app() -> Mockmail {
        let mut app = Mockmail::default();
        let _ = app.update(Message::InboxLoaded(LoadedInbox {
            storage_key: MESSAGES_KEY.to_string(),
            repository: None,
            snapshot: StoredSnapshot {
                revision: 3,
                messages: vec![
                    Mail::new("1", "alice@example.com", "me", "Hello", "Hi"),
                    Mail::new("2", "bob@example.com", "me", "Lunch", "Noon?"),
                ],
            },
            warning: None,
        }));
        app
    }

    #[test]
    fn test_loaded_inbox_replaces_store() {
        let app = loaded_app();
        assert!(!app.is_loading);
        assert_eq!(app.inbox.revision(), 3);
        assert_eq!(app.inbox.state().unread_count(), 2);
    }

    #[test]
    fn test_events_ignored_while_loading() {
        let mut app = Mockmail::default();
        let _ = app.update(Message::SearchChanged("bob".into()));
        assert!(app.inbox.state().filter().is_empty());
    }

    #[test]
    fn test_open_marks_read_and_bumps_revision() {
        let mut app = loaded_app();
        let _ = app.update(Message::OpenMessage(MessageId::new("1")));

        let state = app.inbox.state();
        assert_eq!(state.active_id(), Some(&MessageId::new("1")));
        assert_eq!(state.unread_count(), 1);
        assert_eq!(app.inbox.revision(), 4);
    }

    #[test]
    fn test_mark_selected_read_clears_selection() {
        let mut app = loaded_app();
        let _ = app.update(Message::SelectionToggled(MessageId::new("2"), true));
        assert_eq!(app.inbox.state().selection_len(), 1);

        let _ = app.update(Message::MarkSelectedRead);
        assert_eq!(app.inbox.state().selection_len(), 0);
        assert_eq!(app.inbox.state().unread_count(), 1);
    }

    #[test]
    fn test_load_warning_shows_and_dismisses() {
        let mut app = Mockmail::default();
        let _ = app.update(Message::InboxLoaded(LoadedInbox {
            storage_key: MESSAGES_KEY.to_string(),
            repository: None,
            snapshot: StoredSnapshot {
                revision: 0,
                messages: Vec::new(),
            },
            warning: Some("Changes will not be saved".into()),
        }));
        assert!(app.error_message.is_some());

        let _ = app.update(Message::DismissError);
        assert!(app.error_message.is_none());
    }

    #[test]
    fn test_failed_save_surfaces_error() {
        let mut app = loaded_app();
        let _ = app.update(Message::SnapshotSaved(Err("disk full".into())));
        assert_eq!(
            app.error_message.as_deref(),
            Some("Failed to save inbox: disk full")
        );
    }

    #[test]
    fn test_toggle_theme() {
        let mut app = Mockmail::default();
        let _ = app.update(Message::ToggleTheme);
        assert_eq!(app.theme_mode, ThemeMode::Light);
    }
}
