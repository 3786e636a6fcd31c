mod difficulty;
mod judge;
#[cfg(test)]
mod tests;

use anyhow::Result;

use crate::llm::{CompletionGateway, CompletionRequest};
use crate::prompt;
use crate::session::OpenRound;

pub use difficulty::Difficulty;
pub use judge::{CompletionJudge, EquivalenceJudge, normalize_sentence};

const SENTENCE_TEMPERATURE: f32 = 0.9;
const SENTENCE_MAX_TOKENS: u32 = 120;
const CORRUPT_TEMPERATURE: f32 = 0.7;
const CORRUPT_MAX_TOKENS: u32 = 160;

pub struct QuizEngine<'a> {
    gateway: &'a dyn CompletionGateway,
    judge: &'a dyn EquivalenceJudge,
}

impl<'a> QuizEngine<'a> {
    pub fn new(gateway: &'a dyn CompletionGateway, judge: &'a dyn EquivalenceJudge) -> Self {
        Self { gateway, judge }
    }

    /// Generates a fresh round: a correct reference sentence, then a flawed
    /// copy with a difficulty-determined error count. Either call failing
    /// fails the whole round; callers return the session to idle.
    pub async fn begin_round(&self, difficulty: Difficulty) -> Result<OpenRound> {
        let system = prompt::quiz_system_instruction()?;

        let sentence_prompt = prompt::quiz_sentence_prompt(difficulty)?;
        let reference = self
            .gateway
            .complete(CompletionRequest {
                system: &system,
                user: &sentence_prompt,
                temperature: SENTENCE_TEMPERATURE,
                max_tokens: SENTENCE_MAX_TOKENS,
            })
            .await?;

        let corrupt_prompt = prompt::quiz_corrupt_prompt(difficulty, &reference)?;
        let flawed = self
            .gateway
            .complete(CompletionRequest {
                system: &system,
                user: &corrupt_prompt,
                temperature: CORRUPT_TEMPERATURE,
                max_tokens: CORRUPT_MAX_TOKENS,
            })
            .await?;

        Ok(OpenRound {
            difficulty,
            reference,
            flawed,
        })
    }

    pub async fn grade(&self, reference: &str, candidate: &str) -> Result<bool> {
        self.judge.judge(reference, candidate).await
    }
}
