//! OpenAI Chat Completions endpoint.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::StockhandConfig;
use crate::error::StockhandError;
use crate::types::{ChatMessage, ContentPart, Role, ToolCall};

use super::http::{bearer_headers, shared_client};
use super::{ChatEndpoint, EndpointRequest, EndpointResponse};

/// Model used when no override is configured.
pub const DEFAULT_MODEL: &str = "gpt-4o";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

pub struct OpenAiEndpoint {
    model: String,
    api_key: String,
    base_url: String,
}

impl OpenAiEndpoint {
    pub fn new(model: impl Into<String>, api_key: impl Into<String>, base_url: Option<String>) -> Self {
        Self {
            model: model.into(),
            api_key: api_key.into(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Build an endpoint from configuration, or `None` without a credential.
    pub fn from_config(config: &StockhandConfig) -> Option<Self> {
        config
            .api_key
            .as_ref()
            .map(|key| Self::new(config.model.clone(), key.clone(), config.base_url.clone()))
    }

    fn build_request_body(&self, request: &EndpointRequest) -> serde_json::Value {
        let messages = request
            .messages
            .iter()
            .map(message_to_openai)
            .collect::<Vec<_>>();

        let mut body = serde_json::json!({
            "model": self.model,
            "messages": messages,
        });

        if !request.tools.is_empty() {
            let tool_defs: Vec<serde_json::Value> = request
                .tools
                .iter()
                .map(|t| {
                    serde_json::json!({
                        "type": "function",
                        "function": {
                            "name": t.name,
                            "description": t.description,
                            "parameters": t.parameters,
                        }
                    })
                })
                .collect();
            let obj = body.as_object_mut().unwrap();
            obj.insert("tools".into(), tool_defs.into());
            // The endpoint decides when to invoke operations.
            obj.insert("tool_choice".into(), "auto".into());
        }

        body
    }
}

#[async_trait]
impl ChatEndpoint for OpenAiEndpoint {
    async fn complete(
        &self,
        request: &EndpointRequest,
    ) -> Result<EndpointResponse, StockhandError> {
        let body = self.build_request_body(request);
        let url = format!("{}/chat/completions", self.base_url);

        debug!(model = %self.model, messages = request.messages.len(), "chat completion request");

        let resp = shared_client()
            .post(&url)
            .headers(bearer_headers(&self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(super::http::status_to_error(status, &body_text));
        }

        let data: ChatResponse = resp.json().await?;
        let choice = data
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| StockhandError::api(200, "No choices in response"))?;

        let tool_calls = choice
            .message
            .tool_calls
            .unwrap_or_default()
            .into_iter()
            .map(|tc| ToolCall {
                id: tc.id,
                name: tc.function.name,
                arguments: serde_json::from_str(&tc.function.arguments)
                    .unwrap_or(serde_json::Value::String(tc.function.arguments)),
            })
            .collect();

        Ok(EndpointResponse {
            text: choice.message.content.unwrap_or_default(),
            tool_calls,
        })
    }
}

fn message_to_openai(msg: &ChatMessage) -> serde_json::Value {
    let role = match msg.role {
        Role::System => "system",
        Role::User => "user",
        Role::Assistant => "assistant",
        Role::Tool => "tool",
    };

    // Simple single-part message
    if msg.content.len() == 1 {
        if let ContentPart::Text { ref text } = msg.content[0] {
            return serde_json::json!({ "role": role, "content": text });
        }
        if let ContentPart::ToolResult(ref tr) = msg.content[0] {
            return serde_json::json!({
                "role": "tool",
                "tool_call_id": tr.tool_call_id,
                "content": tr.content,
            });
        }
    }

    // Assistant message carrying tool calls
    let tool_calls: Vec<&ToolCall> = msg.tool_calls();
    if !tool_calls.is_empty() {
        let tc_json: Vec<serde_json::Value> = tool_calls
            .iter()
            .map(|tc| {
                serde_json::json!({
                    "id": tc.id,
                    "type": "function",
                    "function": {
                        "name": tc.name,
                        "arguments": tc.arguments.to_string(),
                    }
                })
            })
            .collect();
        let text = msg.text();
        return serde_json::json!({
            "role": role,
            "content": if text.is_empty() { serde_json::Value::Null } else { serde_json::Value::String(text) },
            "tool_calls": tc_json,
        });
    }

    serde_json::json!({ "role": role, "content": msg.text() })
}

// OpenAI API response types (internal)

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
    tool_calls: Option<Vec<ResponseToolCall>>,
}

#[derive(Deserialize)]
struct ResponseToolCall {
    id: String,
    function: ResponseFunction,
}

#[derive(Deserialize)]
struct ResponseFunction {
    name: String,
    arguments: String,
}
