//! Inbox state management.
//!
//! [`InboxState`] holds the collection, the active message, the selection
//! and the filter. [`InboxStore`] drives it with typed intents and reports
//! when the collection needs persisting.

mod filter;
mod state;
mod store;

pub use filter::MessageFilter;
pub use state::{Activation, InboxState};
pub use store::{InboxStore, Intent, Outcome};
