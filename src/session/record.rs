use crate::modes::GrammarMode;
use crate::quiz::Difficulty;

/// Per-user state, created lazily and held in process memory only.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub mode: GrammarMode,
    pub quiz: Option<QuizState>,
}

/// `None` on the session is the idle state; at most one round is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizState {
    AwaitingDifficulty,
    AwaitingAnswer(OpenRound),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenRound {
    pub difficulty: Difficulty,
    pub reference: String,
    pub flawed: String,
}
