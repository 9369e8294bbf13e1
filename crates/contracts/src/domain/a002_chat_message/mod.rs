pub mod aggregate;

pub use aggregate::{ChatMessage, ConversationLog, MessageId, Sender};
