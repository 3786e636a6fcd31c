use std::collections::HashMap;
use std::sync::Mutex;

use teloxide::types::UserId;

use crate::modes::GrammarMode;

use super::record::{OpenRound, QuizState, Session};

/// In-memory session store keyed by user id. Passed into handlers by
/// reference; the lock is never held across an await point.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<UserId, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_session<T>(&self, user_id: UserId, apply: impl FnOnce(&mut Session) -> T) -> T {
        let mut sessions = match self.sessions.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        apply(sessions.entry(user_id).or_default())
    }

    pub fn mode(&self, user_id: UserId) -> GrammarMode {
        self.with_session(user_id, |session| session.mode)
    }

    /// Selecting a mode also cancels any open quiz round.
    pub fn set_mode(&self, user_id: UserId, mode: GrammarMode) {
        self.with_session(user_id, |session| {
            session.mode = mode;
            session.quiz = None;
        });
    }

    /// Opens quiz selection, discarding any previous round (no stacking).
    pub fn open_quiz(&self, user_id: UserId) {
        self.with_session(user_id, |session| {
            session.quiz = Some(QuizState::AwaitingDifficulty);
        });
    }

    pub fn set_quiz(&self, user_id: UserId, state: QuizState) {
        self.with_session(user_id, |session| {
            session.quiz = Some(state);
        });
    }

    pub fn clear_quiz(&self, user_id: UserId) {
        self.with_session(user_id, |session| {
            session.quiz = None;
        });
    }

    /// Takes the open round out of the session iff an answer is pending.
    /// The round leaves the store before grading, so a failed judgment can
    /// never leave the session stuck mid-quiz.
    pub fn take_pending_answer(&self, user_id: UserId) -> Option<OpenRound> {
        self.with_session(user_id, |session| match session.quiz.take() {
            Some(QuizState::AwaitingAnswer(round)) => Some(round),
            other => {
                session.quiz = other;
                None
            }
        })
    }
}
