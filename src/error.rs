use reqwest::StatusCode;
use thiserror::Error;

/// Failures of the completion provider call. Every variant surfaces to the
/// user as the same generic apology; the split exists for logs and tests.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("completion provider error ({status}): {detail}")]
    Provider { status: StatusCode, detail: String },
    #[error("completion response unusable: {0}")]
    Malformed(String),
}

/// Fatal startup-only configuration errors. Reported once and abort before
/// the dispatcher is built.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} not set in environment")]
    MissingVar { name: &'static str },
    #[error("invalid entry '{entry}' in {name}: expected a numeric user id")]
    InvalidAllowListEntry { name: &'static str, entry: String },
}
