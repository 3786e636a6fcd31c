use crate::modes::GrammarMode;
use crate::quiz::Difficulty;

pub const QUIZ_START_TAG: &str = "quiz_start";

/// Button payloads decoded once at the transport boundary; everything past
/// this point dispatches on the enum, not on strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    SelectMode(GrammarMode),
    OpenQuiz,
    SelectDifficulty(Difficulty),
}

impl CallbackAction {
    pub fn decode(payload: &str) -> Option<Self> {
        if payload == QUIZ_START_TAG {
            return Some(CallbackAction::OpenQuiz);
        }
        if let Some(mode) = GrammarMode::from_tag(payload) {
            return Some(CallbackAction::SelectMode(mode));
        }
        if let Some(difficulty) = Difficulty::from_tag(payload) {
            return Some(CallbackAction::SelectDifficulty(difficulty));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_documented_payloads() {
        assert_eq!(
            CallbackAction::decode("mode_simple"),
            Some(CallbackAction::SelectMode(GrammarMode::Simple))
        );
        assert_eq!(
            CallbackAction::decode("mode_basic"),
            Some(CallbackAction::SelectMode(GrammarMode::BasicExplain))
        );
        assert_eq!(
            CallbackAction::decode("mode_full"),
            Some(CallbackAction::SelectMode(GrammarMode::FullExplain))
        );
        assert_eq!(
            CallbackAction::decode("quiz_start"),
            Some(CallbackAction::OpenQuiz)
        );
        assert_eq!(
            CallbackAction::decode("difficulty_hard"),
            Some(CallbackAction::SelectDifficulty(Difficulty::Hard))
        );
    }

    #[test]
    fn unknown_payload_decodes_to_none() {
        assert_eq!(CallbackAction::decode("mode_extreme"), None);
        assert_eq!(CallbackAction::decode(""), None);
    }
}
