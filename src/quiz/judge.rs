use std::future::Future;
use std::pin::Pin;

use anyhow::Result;

use crate::llm::{CompletionGateway, CompletionRequest};
use crate::prompt;

/// Strategy deciding whether a submitted correction matches the reference.
/// The matching rule is deliberately pluggable; the default asks the
/// completion provider and prefix-matches an affirmative token.
pub trait EquivalenceJudge: Send + Sync {
    fn judge<'a>(
        &'a self,
        reference: &'a str,
        candidate: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<bool>> + Send + 'a>>;
}

pub struct CompletionJudge<'a> {
    gateway: &'a dyn CompletionGateway,
    affirmative_tokens: &'a [String],
}

impl<'a> CompletionJudge<'a> {
    pub fn new(gateway: &'a dyn CompletionGateway, affirmative_tokens: &'a [String]) -> Self {
        Self {
            gateway,
            affirmative_tokens,
        }
    }
}

impl EquivalenceJudge for CompletionJudge<'_> {
    fn judge<'a>(
        &'a self,
        reference: &'a str,
        candidate: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<bool>> + Send + 'a>> {
        Box::pin(async move {
            // An exact match after normalization needs no provider round trip.
            if normalize_sentence(candidate) == normalize_sentence(reference) {
                return Ok(true);
            }
            let system = prompt::quiz_judge_instruction()?;
            let user = format!("Reference: {reference}\nCandidate: {candidate}");
            let verdict = self
                .gateway
                .complete(CompletionRequest {
                    system: &system,
                    user: &user,
                    temperature: 0.0,
                    max_tokens: 8,
                })
                .await?;
            Ok(is_affirmative(&verdict, self.affirmative_tokens))
        })
    }
}

pub fn normalize_sentence(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn is_affirmative(verdict: &str, tokens: &[String]) -> bool {
    let normalized = verdict.trim().to_lowercase();
    tokens.iter().any(|token| normalized.starts_with(token.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yes() -> Vec<String> {
        vec!["yes".to_string()]
    }

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(
            normalize_sentence("  She  Goes to school. "),
            "she goes to school."
        );
    }

    #[test]
    fn affirmative_prefix_decides_verdict() {
        assert!(is_affirmative("Yes", &yes()));
        assert!(is_affirmative("yes.", &yes()));
        assert!(is_affirmative("YES, it does", &yes()));
        assert!(!is_affirmative("no", &yes()));
        assert!(!is_affirmative("Not quite", &yes()));
    }

    #[test]
    fn alternate_affirmative_tokens_are_honored() {
        let tokens = vec!["так".to_string(), "yes".to_string()];
        assert!(is_affirmative("Так, все вірно", &tokens));
        assert!(!is_affirmative("ні", &tokens));
    }
}
