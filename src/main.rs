//! Interactive shell for the websearch agent
//!
//! Reads credentials from the environment, then loops reading questions
//! from standard input and printing answer bundles. One query runs to
//! completion before the next is read.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;
use websearch_agent::{Agent, Credentials, DEFAULT_RESULT_LIMIT};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            eprintln!("Failed to initialize agent: {e}");
            eprintln!(
                "Set GEMINI_API_KEY, and optionally GOOGLE_SEARCH_API_KEY and \
                 GOOGLE_SEARCH_ENGINE_ID for Google Custom Search."
            );
            std::process::exit(1);
        }
    };

    let agent = Agent::new(&credentials)?;
    info!(
        google_search = credentials.has_google_search(),
        "agent initialized"
    );

    println!("{}", "=".repeat(50));
    println!("Web Search Agent v{} ready.", websearch_agent::VERSION);
    println!("Type your questions, or 'quit' to exit.");
    println!("{}\n", "=".repeat(50));

    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        print!("Ask me anything: ");
        std::io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            break;
        }

        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if matches!(query.to_lowercase().as_str(), "quit" | "exit" | "q") {
            println!("Goodbye!");
            break;
        }

        let bundle = agent.answer(query, DEFAULT_RESULT_LIMIT).await;

        println!("\nAnswer:");
        println!("{}", "-".repeat(30));
        println!("{}", bundle.answer);

        println!("\nSearch results used:");
        println!("{}", "-".repeat(30));
        for (i, result) in bundle.results.iter().enumerate() {
            println!("{}. {}", i + 1, result.title);
            println!("   {}", result.link);
        }
        println!("\n{}\n", "=".repeat(50));
    }

    Ok(())
}
