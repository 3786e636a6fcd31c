use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

use teloxide::types::UserId;

use super::*;
use crate::error::CompletionError;
use crate::llm::{CompletionGateway, CompletionRequest};
use crate::session::{QuizState, SessionStore};

struct ScriptedGateway {
    responses: Mutex<VecDeque<Result<String, CompletionError>>>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedGateway {
    fn new(responses: Vec<Result<String, CompletionError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn user_prompts(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl CompletionGateway for ScriptedGateway {
    fn model_name(&self) -> &str {
        "scripted"
    }

    fn complete<'a>(
        &'a self,
        request: CompletionRequest<'a>,
    ) -> Pin<Box<dyn Future<Output = Result<String, CompletionError>> + Send + 'a>> {
        self.requests.lock().unwrap().push(request.user.to_string());
        let next = self.responses.lock().unwrap().pop_front();
        Box::pin(async move {
            next.unwrap_or_else(|| Err(CompletionError::Malformed("script exhausted".to_string())))
        })
    }
}

fn unavailable() -> CompletionError {
    CompletionError::Malformed("scripted failure".to_string())
}

fn yes_tokens() -> Vec<String> {
    vec!["yes".to_string()]
}

#[tokio::test]
async fn begin_round_generates_then_corrupts() {
    let gateway = ScriptedGateway::new(vec![
        Ok("The committee deliberated for hours.".to_string()),
        Ok("The committee deliberate for hour.".to_string()),
    ]);
    let tokens = yes_tokens();
    let judge = CompletionJudge::new(&gateway, &tokens);
    let engine = QuizEngine::new(&gateway, &judge);

    let round = engine.begin_round(Difficulty::Hard).await.unwrap();
    assert_eq!(round.reference, "The committee deliberated for hours.");
    assert_eq!(round.flawed, "The committee deliberate for hour.");

    let prompts = gateway.user_prompts();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[1].contains("between 7 and 8"));
    assert!(prompts[1].contains("The committee deliberated for hours."));
}

#[tokio::test]
async fn failed_generation_fails_the_round() {
    let gateway = ScriptedGateway::new(vec![Err(unavailable())]);
    let tokens = yes_tokens();
    let judge = CompletionJudge::new(&gateway, &tokens);
    let engine = QuizEngine::new(&gateway, &judge);

    assert!(engine.begin_round(Difficulty::Easy).await.is_err());
}

#[tokio::test]
async fn failed_corruption_fails_the_round() {
    let gateway = ScriptedGateway::new(vec![
        Ok("It rains every morning.".to_string()),
        Err(unavailable()),
    ]);
    let tokens = yes_tokens();
    let judge = CompletionJudge::new(&gateway, &tokens);
    let engine = QuizEngine::new(&gateway, &judge);

    assert!(engine.begin_round(Difficulty::Easy).await.is_err());
}

#[tokio::test]
async fn failed_generation_leaves_no_stale_reference() {
    let store = SessionStore::new();
    let user = UserId(1);
    store.set_quiz(
        user,
        QuizState::AwaitingAnswer(crate::session::OpenRound {
            difficulty: Difficulty::Easy,
            reference: "An old round.".to_string(),
            flawed: "An old rounds.".to_string(),
        }),
    );
    store.open_quiz(user);

    let gateway = ScriptedGateway::new(vec![Err(unavailable())]);
    let tokens = yes_tokens();
    let judge = CompletionJudge::new(&gateway, &tokens);
    let engine = QuizEngine::new(&gateway, &judge);
    assert!(engine.begin_round(Difficulty::Easy).await.is_err());
    store.clear_quiz(user);

    assert_eq!(store.take_pending_answer(user), None);
}

#[tokio::test]
async fn identical_answer_needs_no_provider_call() {
    let gateway = ScriptedGateway::new(Vec::new());
    let tokens = yes_tokens();
    let judge = CompletionJudge::new(&gateway, &tokens);
    let engine = QuizEngine::new(&gateway, &judge);

    let correct = engine
        .grade("She goes to school every day.", "  she GOES to school every day. ")
        .await
        .unwrap();
    assert!(correct);
    assert!(gateway.user_prompts().is_empty());
}

#[tokio::test]
async fn provider_verdict_decides_grading() {
    let gateway = ScriptedGateway::new(vec![Ok("Yes.".to_string()), Ok("no".to_string())]);
    let tokens = yes_tokens();
    let judge = CompletionJudge::new(&gateway, &tokens);
    let engine = QuizEngine::new(&gateway, &judge);

    assert!(engine
        .grade("She goes to school.", "She attends school.")
        .await
        .unwrap());
    assert!(!engine
        .grade("She goes to school.", "She go to school.")
        .await
        .unwrap());
}

#[tokio::test]
async fn grading_failure_propagates() {
    let gateway = ScriptedGateway::new(vec![Err(unavailable())]);
    let tokens = yes_tokens();
    let judge = CompletionJudge::new(&gateway, &tokens);
    let engine = QuizEngine::new(&gateway, &judge);

    assert!(engine
        .grade("She goes to school.", "Something else entirely.")
        .await
        .is_err());
}

#[tokio::test]
async fn round_resolves_after_single_submission_even_on_failure() {
    let store = SessionStore::new();
    let user = UserId(9);
    store.set_quiz(
        user,
        QuizState::AwaitingAnswer(crate::session::OpenRound {
            difficulty: Difficulty::Normal,
            reference: "He has two brothers.".to_string(),
            flawed: "He have two brother.".to_string(),
        }),
    );

    let round = store.take_pending_answer(user).expect("round open");

    let gateway = ScriptedGateway::new(vec![Err(unavailable())]);
    let tokens = yes_tokens();
    let judge = CompletionJudge::new(&gateway, &tokens);
    let engine = QuizEngine::new(&gateway, &judge);
    assert!(engine.grade(&round.reference, "He has two brothers?").await.is_err());

    // the round left the store before grading; the session is idle again
    assert_eq!(store.take_pending_answer(user), None);
}
