//! Chat endpoint trait and implementations.

pub mod http;
pub mod openai;

use async_trait::async_trait;

use crate::error::StockhandError;
use crate::types::{ChatMessage, ToolCall};

/// A request sent to a chat endpoint: the full message history plus the
/// operation declarations the endpoint may invoke.
#[derive(Debug, Clone)]
pub struct EndpointRequest {
    pub messages: Vec<ChatMessage>,
    pub tools: Vec<ToolDefinition>,
}

/// Operation declaration sent to the endpoint API.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

/// Response from a chat endpoint: free text, or one or more requested tool
/// invocations, or both.
#[derive(Debug, Clone, Default)]
pub struct EndpointResponse {
    pub text: String,
    pub tool_calls: Vec<ToolCall>,
}

/// Core trait implemented by chat endpoints.
///
/// One blocking call per round: the caller owns retries, timeouts, and any
/// cancellation policy.
#[async_trait]
pub trait ChatEndpoint: Send + Sync {
    async fn complete(&self, request: &EndpointRequest)
        -> Result<EndpointResponse, StockhandError>;
}
