//! Shared message and tool-call types.

pub mod message;

pub use message::{ChatMessage, ContentPart, Role, ToolCall, ToolResult};
