//! CLI argument parsing for the stockhand binary.

use clap::Parser;

/// Interactive stock counter chat.
#[derive(Parser, Debug)]
#[command(name = "stockhand", version, about = "stockhand — conversational stock counter")]
pub struct Cli {
    /// Model to use (e.g. gpt-4o)
    #[arg(short, long)]
    pub model: Option<String>,

    /// System prompt override
    #[arg(short, long)]
    pub system: Option<String>,

    /// Start with an empty ledger instead of the demo stock
    #[arg(long)]
    pub no_seed: bool,
}
