//! stockhand CLI binary entry point.

use std::io::{self, BufRead, Write};

use clap::Parser;
use stockhand::agent::OrderAgent;
use stockhand::cli::Cli;
use stockhand::config::StockhandConfig;
use stockhand::ledger::StockLedger;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> stockhand::error::Result<()> {
    let mut config = StockhandConfig::from_env();
    if let Some(model) = cli.model {
        config.model = model;
    }

    let mut ledger = StockLedger::new();
    if !cli.no_seed {
        // Example initial stock
        ledger.set_stock("coffee beans", 20, 5);
        ledger.set_stock("milk", 15, 5);
    }

    let mut agent = OrderAgent::new(&config, ledger);
    if let Some(system) = cli.system {
        agent = agent.with_system_prompt(system);
    }

    println!("Type 'exit' to stop chatting.");
    let stdin = io::stdin();
    loop {
        print!("User: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") {
            break;
        }

        let reply = agent.send(input).await?;
        println!("Agent: {reply}");
    }

    let low = agent.auto_reorder();
    if !low.is_empty() {
        println!("Items to reorder: {}", low.join(", "));
    }

    Ok(())
}
