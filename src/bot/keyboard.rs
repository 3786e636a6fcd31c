use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::modes::GrammarMode;
use crate::quiz::Difficulty;

use super::callback::QUIZ_START_TAG;

pub fn start_keyboard() -> InlineKeyboardMarkup {
    let mode_row = |mode: GrammarMode| {
        vec![InlineKeyboardButton::callback(mode.label(), mode.as_tag())]
    };
    InlineKeyboardMarkup::new([
        mode_row(GrammarMode::Simple),
        mode_row(GrammarMode::BasicExplain),
        mode_row(GrammarMode::FullExplain),
        vec![InlineKeyboardButton::callback("Grammar quiz", QUIZ_START_TAG)],
    ])
}

pub fn difficulty_keyboard() -> InlineKeyboardMarkup {
    let button = |difficulty: Difficulty| {
        InlineKeyboardButton::callback(difficulty.label(), difficulty.as_tag())
    };
    InlineKeyboardMarkup::new([vec![
        button(Difficulty::Easy),
        button(Difficulty::Normal),
        button(Difficulty::Hard),
    ]])
}
