//! Interactive command-line front-end. Same preamble and adapter as the
//! HTTP service, with an empty history per question.

use std::io::{BufRead, Write};

use anyhow::Result;

use saudi95_backend::config::Config;
use saudi95_backend::llm::{CompletionClient, GeminiClient};
use saudi95_backend::models::{Message, Role};
use saudi95_backend::prompt::build_prompt;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "saudi95_backend=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;
    let client = GeminiClient::new(&config);

    println!("Saudi National Day Assistant (type 'exit' to quit).");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        print!("\nQuestion: ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!("\nExited.");
            break;
        }

        let question = line.trim();
        if question.eq_ignore_ascii_case("exit") {
            println!("Goodbye.");
            break;
        }
        if question.is_empty() {
            println!("Please enter a question or type 'exit'.");
            continue;
        }

        let new_message = Message {
            role: Role::User,
            content: question.to_string(),
            timestamp: None,
        };
        let parts = build_prompt(&new_message, &[]);

        match client.generate(&parts).await {
            Ok(answer) => println!("\nAnswer: {}", answer),
            Err(err) => eprintln!("Gemini API error: {}", err),
        }
    }

    Ok(())
}
