//! The order agent: turn protocol over the stock ledger.

use tracing::{debug, warn};

use crate::config::StockhandConfig;
use crate::error::Result;
use crate::ledger::StockLedger;
use crate::provider::openai::OpenAiEndpoint;
use crate::provider::{ChatEndpoint, EndpointRequest};
use crate::tools::registry::{definitions, Operation};
use crate::types::ChatMessage;

use super::conversation::Conversation;

/// Upper bound on tool rounds within one turn.
const MAX_TOOL_ROUNDS: usize = 8;

/// Reply used when no endpoint credential is configured.
pub const PLACEHOLDER_REPLY: &str = "(OpenAI API key not set in agent)";

/// System persona prepended to every request.
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful counter agent for a small shop. Use the provided tools \
     to manage orders and stock.";

/// An agent that maintains one session's conversation and exclusively owns
/// the stock ledger it mutates.
pub struct OrderAgent {
    endpoint: Option<Box<dyn ChatEndpoint>>,
    ledger: StockLedger,
    conversation: Conversation,
    system_prompt: String,
}

impl OrderAgent {
    /// Create an agent from configuration.
    ///
    /// Without a configured credential the agent still works: every turn
    /// returns [`PLACEHOLDER_REPLY`] and leaves the ledger untouched.
    pub fn new(config: &StockhandConfig, ledger: StockLedger) -> Self {
        let endpoint = OpenAiEndpoint::from_config(config)
            .map(|e| Box::new(e) as Box<dyn ChatEndpoint>);
        Self::build(endpoint, ledger)
    }

    /// Create an agent over an explicit endpoint.
    pub fn with_endpoint(endpoint: Box<dyn ChatEndpoint>, ledger: StockLedger) -> Self {
        Self::build(Some(endpoint), ledger)
    }

    fn build(endpoint: Option<Box<dyn ChatEndpoint>>, ledger: StockLedger) -> Self {
        Self {
            endpoint,
            ledger,
            conversation: Conversation::new(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }

    /// Replace the system persona.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Execute one turn: user text in, final assistant text out.
    ///
    /// Tool rounds run until the endpoint answers in free text. A call
    /// naming an unknown operation or carrying arguments that do not decode
    /// is reported back into the conversation as a failed tool result; it
    /// never aborts the turn. Endpoint failures propagate as `Err`.
    pub async fn send(&mut self, text: impl Into<String>) -> Result<String> {
        self.conversation.push(ChatMessage::user(text));

        let Some(endpoint) = self.endpoint.as_deref() else {
            debug!("no endpoint configured, returning placeholder reply");
            self.conversation.push(ChatMessage::assistant(PLACEHOLDER_REPLY));
            return Ok(PLACEHOLDER_REPLY.to_string());
        };

        let tools = definitions();
        let mut last_text = String::new();

        for round in 0..MAX_TOOL_ROUNDS {
            let mut messages = Vec::with_capacity(self.conversation.len() + 1);
            messages.push(ChatMessage::system(self.system_prompt.as_str()));
            messages.extend(self.conversation.messages().iter().cloned());

            debug!(round, "sending conversation to endpoint");
            let response = endpoint
                .complete(&EndpointRequest {
                    messages,
                    tools: tools.clone(),
                })
                .await?;

            if response.tool_calls.is_empty() {
                self.conversation.push(ChatMessage::assistant(response.text.as_str()));
                return Ok(response.text);
            }

            last_text = response.text.clone();
            self.conversation.push(ChatMessage::assistant_with_calls(
                response.text,
                response.tool_calls.clone(),
            ));

            // Execute in the order the endpoint returned the calls.
            for call in &response.tool_calls {
                let message = match Operation::from_call(call) {
                    Ok(op) => {
                        let result = op.apply(&mut self.ledger);
                        debug!(tool = %call.name, %result, "tool call executed");
                        ChatMessage::tool_result(call.id.clone(), result, false)
                    }
                    Err(err) => {
                        warn!(tool = %call.name, error = %err, "tool call failed");
                        ChatMessage::tool_result(call.id.clone(), err.to_string(), true)
                    }
                };
                self.conversation.push(message);
            }
        }

        warn!("tool loop exceeded {MAX_TOOL_ROUNDS} rounds, returning last assistant text");
        self.conversation.push(ChatMessage::assistant(last_text.as_str()));
        Ok(last_text)
    }

    /// Items that need reordering, independent of the conversation loop.
    pub fn auto_reorder(&self) -> Vec<String> {
        self.ledger
            .check_reorder()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Out-of-band stock seeding for the surrounding process.
    pub fn set_stock(&mut self, item: &str, qty: u32, threshold: u32) {
        self.ledger.set_stock(item, qty, threshold);
    }

    /// Current stock level for an item.
    pub fn get_stock(&self, item: &str) -> u32 {
        self.ledger.get_stock(item)
    }

    /// The ledger owned by this agent.
    pub fn ledger(&self) -> &StockLedger {
        &self.ledger
    }

    /// The conversation history accumulated so far.
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Clear conversation history (the ledger is untouched).
    pub fn clear_history(&mut self) {
        self.conversation.clear();
    }
}
