//! # mockmail-core
//!
//! Core logic for the `Mockmail` inbox demo.
//!
//! This crate provides:
//! - Message domain model
//! - **Inbox State Manager** - filtering, selection and read tracking
//! - **Inbox Store** - intent dispatch with change reporting
//! - Sample data generation
//! - Snapshot persistence (`SQLite`)
//! - Configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod config;
mod error;
pub mod inbox;
pub mod message;
pub mod sample;
pub mod storage;

pub use config::InboxConfig;
pub use error::{Error, Result};
pub use inbox::{Activation, InboxState, InboxStore, Intent, MessageFilter, Outcome};
pub use message::{Message, MessageId};
pub use storage::{MESSAGES_KEY, SnapshotRepository, StoredSnapshot};
