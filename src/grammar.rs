use anyhow::Result;

use crate::llm::{CompletionGateway, CompletionRequest};
use crate::modes::GrammarMode;
use crate::prompt;

const CORRECTION_TEMPERATURE: f32 = 0.3;
const CORRECTION_MAX_TOKENS: u32 = 1000;

pub async fn correct_text(
    gateway: &dyn CompletionGateway,
    mode: GrammarMode,
    text: &str,
) -> Result<String> {
    let instruction = prompt::grammar_instruction(mode)?;
    let corrected = gateway
        .complete(CompletionRequest {
            system: &instruction,
            user: text,
            temperature: CORRECTION_TEMPERATURE,
            max_tokens: CORRECTION_MAX_TOKENS,
        })
        .await?;
    Ok(corrected)
}
