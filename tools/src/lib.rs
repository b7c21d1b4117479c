//! Shared plumbing for the developer binaries that talk to the competency
//! backend: logging setup, the backend URL flag, login and the handful of
//! response shapes they read.

use anyhow::{bail, Context, Result};
use clap::Args;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const API_PREFIX: &str = "/api/v1";

/// Users created by the end-to-end suite.
pub const E2E_TEST_USERS: [&str; 5] = [
    "testuser1@example.com",
    "testuser2@example.com",
    "testuser3@example.com",
    "testuser4@example.com",
    "testuser5@example.com",
];

/// Structured logging to stderr, `RUST_LOG` overrides the default level.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[derive(Args, Debug, Clone)]
pub struct BackendArgs {
    /// Backend base URL, without the `/api/v1` prefix
    #[arg(long, env = "BACKEND_URL", default_value = "http://localhost:8002")]
    pub backend_url: String,
}

impl BackendArgs {
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}{}", self.backend_url.trim_end_matches('/'), API_PREFIX, path)
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Password login; the backend expects OAuth2 form fields.
pub async fn login(
    client: &reqwest::Client,
    backend: &BackendArgs,
    username: &str,
    password: &str,
) -> Result<String> {
    let response = client
        .post(backend.api_url("/auth/login"))
        .form(&[("username", username), ("password", password)])
        .send()
        .await
        .context("login request failed")?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        bail!("login failed with {}: {}", status, body);
    }

    let token: TokenResponse = response.json().await.context("login response is not a token")?;
    Ok(token.access_token)
}

/// Result of deleting one seeded user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// 404: nothing left to clean up
    AlreadyGone,
    Failed(StatusCode),
    /// The request never got a response
    Unreachable,
}

impl DeleteOutcome {
    pub fn from_status(status: StatusCode) -> Self {
        if status.is_success() {
            DeleteOutcome::Deleted
        } else if status == StatusCode::NOT_FOUND {
            DeleteOutcome::AlreadyGone
        } else {
            DeleteOutcome::Failed(status)
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, DeleteOutcome::Deleted | DeleteOutcome::AlreadyGone)
    }
}

/// The six narrative sections of an AI feedback bundle.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FeedbackSections {
    pub strengths: String,
    pub improvements: String,
    pub action_plan: String,
    pub learning_resources: String,
    pub reality_check: String,
    pub overall: String,
}

impl FeedbackSections {
    /// Character count per section, in display order.
    pub fn lengths(&self) -> [(&'static str, usize); 6] {
        [
            ("Strengths", self.strengths.chars().count()),
            ("Improvements", self.improvements.chars().count()),
            ("Action Plan", self.action_plan.chars().count()),
            ("Learning Resources", self.learning_resources.chars().count()),
            ("Reality Check", self.reality_check.chars().count()),
            ("Overall", self.overall.chars().count()),
        ]
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FeedbackResponse {
    pub feedback: Option<FeedbackSections>,
    pub error: Option<String>,
    pub from_cache: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_prefix_once() {
        let backend = BackendArgs { backend_url: "http://localhost:8002/".into() };
        assert_eq!(
            backend.api_url("/users/by-email/a@example.com"),
            "http://localhost:8002/api/v1/users/by-email/a@example.com"
        );
    }

    #[test]
    fn not_found_counts_as_cleaned_up() {
        assert_eq!(DeleteOutcome::from_status(StatusCode::NO_CONTENT), DeleteOutcome::Deleted);
        assert_eq!(DeleteOutcome::from_status(StatusCode::NOT_FOUND), DeleteOutcome::AlreadyGone);
        assert!(DeleteOutcome::from_status(StatusCode::NOT_FOUND).is_success());

        let forbidden = DeleteOutcome::from_status(StatusCode::FORBIDDEN);
        assert_eq!(forbidden, DeleteOutcome::Failed(StatusCode::FORBIDDEN));
        assert!(!forbidden.is_success());
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let sections = FeedbackSections {
            strengths: "リーダー".into(),
            overall: "ok".into(),
            ..Default::default()
        };
        let lengths = sections.lengths();
        assert_eq!(lengths[0], ("Strengths", 4));
        assert_eq!(lengths[1], ("Improvements", 0));
        assert_eq!(lengths[5], ("Overall", 2));
    }

    #[test]
    fn partial_feedback_deserializes() {
        let response: FeedbackResponse = serde_json::from_str(
            r#"{"feedback": {"strengths": "Calm"}, "career_suggestions": null, "from_cache": false}"#,
        )
        .unwrap();
        let feedback = response.feedback.unwrap();
        assert_eq!(feedback.strengths, "Calm");
        assert!(feedback.overall.is_empty());
        assert!(response.error.is_none());
    }
}
