//! Stockhand — conversational stock agent for a small retail counter.
//!
//! Pairs an in-memory stock ledger with an agent that maps free-text user
//! turns to structured tool calls against a chat-completion endpoint,
//! folding tool results back into the conversation until the endpoint
//! answers in free text.
//!
//! # Quick Start
//!
//! ```no_run
//! use stockhand::agent::OrderAgent;
//! use stockhand::config::StockhandConfig;
//! use stockhand::ledger::StockLedger;
//!
//! # async fn example() -> stockhand::error::Result<()> {
//! let config = StockhandConfig::from_env();
//! let mut agent = OrderAgent::new(&config, StockLedger::new());
//! agent.set_stock("milk", 15, 5);
//! let reply = agent.send("How much milk do we have left?").await?;
//! println!("{reply}");
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod config;
pub mod error;
pub mod ledger;
pub mod provider;
pub mod tools;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;
