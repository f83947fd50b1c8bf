//! Message domain types.

mod model;

pub use model::{Message, MessageId};
