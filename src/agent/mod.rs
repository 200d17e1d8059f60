//! Agent: the conversational turn protocol over the stock ledger.

pub mod agent;
pub mod conversation;

pub use agent::{OrderAgent, DEFAULT_SYSTEM_PROMPT, PLACEHOLDER_REPLY};
pub use conversation::Conversation;
