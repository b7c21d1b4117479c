//! Log in as a test user, force an AI feedback regeneration and report how
//! much text came back per section.
//!
//! Run with: cargo run -p competency-tools --bin probe-ai-feedback

use anyhow::{bail, Context, Result};
use clap::Parser;
use competency_tools::{init_tracing, login, BackendArgs, FeedbackResponse};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Regenerate AI feedback and print section sizes")]
struct Cli {
    #[command(flatten)]
    backend: BackendArgs,

    #[arg(long, env = "PROBE_USERNAME", default_value = "testuser2@example.com")]
    username: String,

    #[arg(long, env = "PROBE_PASSWORD", default_value = "password123")]
    password: String,
}

fn or_empty(text: &str) -> &str {
    if text.is_empty() {
        "EMPTY"
    } else {
        text
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let token = login(&client, &cli.backend, &cli.username, &cli.password).await?;
    info!(user = %cli.username, "logged in");

    info!("requesting AI feedback regeneration");
    let response = client
        .get(cli.backend.api_url("/competencies/feedback"))
        .query(&[("force_regenerate", "true")])
        .bearer_auth(&token)
        .send()
        .await
        .context("feedback request failed")?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        bail!("feedback request failed with {}: {}", status, body);
    }

    let body: FeedbackResponse = response.json().await.context("unexpected feedback payload")?;
    if let Some(error) = body.error {
        bail!("backend reported: {}", error);
    }
    let feedback = body.feedback.context("response carried no feedback")?;

    println!("AI feedback generated (from cache: {})", body.from_cache);
    println!("Feedback sections:");
    for (section, length) in feedback.lengths() {
        println!("- {}: {} chars", section, length);
    }

    println!("\n=== Actual Content ===");
    println!("Strengths: {}", or_empty(&feedback.strengths));
    println!("Improvements: {}", or_empty(&feedback.improvements));
    Ok(())
}
