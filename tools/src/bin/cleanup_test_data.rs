//! Delete the users the end-to-end suite signs up, so the next run starts
//! from a clean backend.
//!
//! Run with: cargo run -p competency-tools --bin cleanup-test-data

use anyhow::Result;
use clap::Parser;
use competency_tools::{init_tracing, BackendArgs, DeleteOutcome, E2E_TEST_USERS};
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about = "Remove e2e test users from the backend")]
struct Cli {
    #[command(flatten)]
    backend: BackendArgs,

    /// Shared secret the backend requires for test-only deletions
    #[arg(long, env = "TEST_SECRET", default_value = "your-secret-testing-key")]
    test_secret: String,

    /// Override the seeded user list
    #[arg(long = "email")]
    emails: Vec<String>,
}

async fn delete_user(client: &reqwest::Client, cli: &Cli, email: &str) -> DeleteOutcome {
    let url = cli.backend.api_url(&format!("/users/by-email/{}", email));
    let response = match client
        .delete(&url)
        .header("X-TEST-SECRET", &cli.test_secret)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            error!(%email, error = %e, "request failed");
            return DeleteOutcome::Unreachable;
        }
    };

    let outcome = DeleteOutcome::from_status(response.status());
    match outcome {
        DeleteOutcome::Deleted => info!(%email, "deleted"),
        DeleteOutcome::AlreadyGone => info!(%email, "not found (already deleted)"),
        DeleteOutcome::Failed(status) => {
            let body = response.text().await.unwrap_or_default();
            error!(%email, %status, %body, "delete failed");
        }
        DeleteOutcome::Unreachable => {}
    }
    outcome
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let emails: Vec<String> = if cli.emails.is_empty() {
        E2E_TEST_USERS.iter().map(|e| e.to_string()).collect()
    } else {
        cli.emails.clone()
    };

    info!(backend = %cli.backend.backend_url, users = emails.len(), "starting test data cleanup");

    let client = reqwest::Client::new();
    let mut succeeded = 0;
    let mut failed = 0;
    for email in &emails {
        if delete_user(&client, &cli, email).await.is_success() {
            succeeded += 1;
        } else {
            failed += 1;
        }
    }

    println!("Cleanup completed: {} successful, {} failed", succeeded, failed);

    if failed > 0 {
        warn!("some users could not be deleted; check the backend logs");
        std::process::exit(1);
    }
    Ok(())
}
