use anyhow::{Context, Result};
use tera::{Context as TeraContext, Tera};

use crate::modes::GrammarMode;
use crate::quiz::Difficulty;

const GRAMMAR_SYSTEM_TEMPLATE: &str = include_str!("prompts/grammar_system.tera");
const QUIZ_SYSTEM_TEMPLATE: &str = include_str!("prompts/quiz_system.tera");
const QUIZ_SENTENCE_TEMPLATE: &str = include_str!("prompts/quiz_sentence.tera");
const QUIZ_CORRUPT_TEMPLATE: &str = include_str!("prompts/quiz_corrupt.tera");
const QUIZ_JUDGE_TEMPLATE: &str = include_str!("prompts/quiz_judge.tera");

pub fn grammar_instruction(mode: GrammarMode) -> Result<String> {
    let mut context = TeraContext::new();
    context.insert("explain_surface", &mode.explains_surface());
    context.insert("explain_deep", &mode.explains_deep());
    Tera::one_off(GRAMMAR_SYSTEM_TEMPLATE, &context, false)
        .with_context(|| "failed to render grammar instruction")
}

pub fn quiz_system_instruction() -> Result<String> {
    Tera::one_off(QUIZ_SYSTEM_TEMPLATE, &TeraContext::new(), false)
        .with_context(|| "failed to render quiz system instruction")
}

pub fn quiz_sentence_prompt(difficulty: Difficulty) -> Result<String> {
    let mut context = TeraContext::new();
    context.insert("length_guidance", difficulty.length_guidance());
    context.insert("topic_guidance", difficulty.topic_guidance());
    Tera::one_off(QUIZ_SENTENCE_TEMPLATE, &context, false)
        .with_context(|| "failed to render quiz sentence prompt")
}

pub fn quiz_corrupt_prompt(difficulty: Difficulty, sentence: &str) -> Result<String> {
    let (min_errors, max_errors) = difficulty.error_range();
    let mut context = TeraContext::new();
    context.insert("min_errors", &min_errors);
    context.insert("max_errors", &max_errors);
    context.insert("sentence", sentence);
    Tera::one_off(QUIZ_CORRUPT_TEMPLATE, &context, false)
        .with_context(|| "failed to render quiz corruption prompt")
}

pub fn quiz_judge_instruction() -> Result<String> {
    Tera::one_off(QUIZ_JUDGE_TEMPLATE, &TeraContext::new(), false)
        .with_context(|| "failed to render quiz judge instruction")
}
