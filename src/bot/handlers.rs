use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::{ChatAction, ChatId, UserId};
use tracing::{debug, error, info, warn};

use crate::auth;
use crate::grammar;
use crate::quiz::{CompletionJudge, Difficulty, QuizEngine};
use crate::session::{OpenRound, QuizState};

use super::callback::CallbackAction;
use super::commands::Command;
use super::keyboard;
use super::{BotContext, HandlerResult};

const WELCOME: &str = "Hi! Send me any text and I will correct its grammar.\n\n\
Pick how detailed my replies should be, or start the grammar quiz:";
const ACCESS_DENIED: &str =
    "Access denied. Ask the bot owner to add your user id to the allow-list (use /id to see it).";
const APOLOGY: &str =
    "Sorry, something went wrong while checking the grammar. Please try again later.";

pub async fn handle_command(
    bot: Bot,
    message: Message,
    command: Command,
    context: Arc<BotContext>,
) -> HandlerResult {
    let Some(user) = message.from() else {
        return Ok(());
    };

    match command {
        // identity lookup stays open so locked-out users can learn their id
        Command::Id => {
            info!(user_id = user.id.0, "id command");
            let username = user.username.as_deref().unwrap_or("not set");
            bot.send_message(
                message.chat.id,
                format!(
                    "Your Telegram user id: {}\nUsername: {}\n\n\
                     Add this id to ALLOWED_USER_IDS to restrict the bot to yourself.",
                    user.id.0, username
                ),
            )
            .await?;
        }
        Command::Start => {
            if !auth::is_authorized(user.id, &context.config.allowed_user_ids) {
                warn!(user_id = user.id.0, "unauthorized start command");
                bot.send_message(message.chat.id, ACCESS_DENIED).await?;
                return Ok(());
            }
            info!(user_id = user.id.0, "start command");
            bot.send_message(message.chat.id, WELCOME)
                .reply_markup(keyboard::start_keyboard())
                .await?;
        }
    }
    Ok(())
}

pub async fn handle_callback(
    bot: Bot,
    query: CallbackQuery,
    context: Arc<BotContext>,
) -> HandlerResult {
    bot.answer_callback_query(query.id.clone()).await?;
    let Some(message) = query.message.as_ref() else {
        return Ok(());
    };
    let chat_id = message.chat.id;
    let user = &query.from;

    if !auth::is_authorized(user.id, &context.config.allowed_user_ids) {
        warn!(user_id = user.id.0, "unauthorized callback");
        bot.send_message(chat_id, ACCESS_DENIED).await?;
        return Ok(());
    }

    let Some(action) = query.data.as_deref().and_then(CallbackAction::decode) else {
        warn!(user_id = user.id.0, data = ?query.data, "unrecognized callback payload");
        return Ok(());
    };

    match action {
        CallbackAction::SelectMode(mode) => {
            context.store.set_mode(user.id, mode);
            info!(user_id = user.id.0, mode = mode.as_tag(), "grammar mode selected");
            bot.send_message(
                chat_id,
                format!(
                    "Mode set: {}. Send me any text and I will correct it.",
                    mode.label()
                ),
            )
            .await?;
        }
        CallbackAction::OpenQuiz => {
            context.store.open_quiz(user.id);
            info!(user_id = user.id.0, "quiz opened");
            bot.send_message(chat_id, "Pick a difficulty:")
                .reply_markup(keyboard::difficulty_keyboard())
                .await?;
        }
        CallbackAction::SelectDifficulty(difficulty) => {
            start_round(&bot, chat_id, user.id, difficulty, &context).await?;
        }
    }
    Ok(())
}

pub async fn handle_message(bot: Bot, message: Message, context: Arc<BotContext>) -> HandlerResult {
    let Some(user) = message.from() else {
        return Ok(());
    };
    let Some(text) = message.text() else {
        return Ok(());
    };
    if text.starts_with('/') {
        return Ok(());
    }

    if !auth::is_authorized(user.id, &context.config.allowed_user_ids) {
        warn!(user_id = user.id.0, "unauthorized message");
        bot.send_message(message.chat.id, ACCESS_DENIED).await?;
        return Ok(());
    }

    match context.store.take_pending_answer(user.id) {
        Some(round) => grade_answer(&bot, &message, round, text, &context).await,
        None => correct_message(&bot, &message, text, &context).await,
    }
}

async fn start_round(
    bot: &Bot,
    chat_id: ChatId,
    user_id: UserId,
    difficulty: Difficulty,
    context: &BotContext,
) -> HandlerResult {
    bot.send_chat_action(chat_id, ChatAction::Typing).await?;

    let judge = CompletionJudge::new(&context.client, &context.config.affirmative_tokens);
    let engine = QuizEngine::new(&context.client, &judge);
    match engine.begin_round(difficulty).await {
        Ok(round) => {
            info!(
                user_id = user_id.0,
                difficulty = difficulty.as_tag(),
                "quiz round opened"
            );
            let exercise = format!("Correct this sentence:\n\n{}", round.flawed);
            context
                .store
                .set_quiz(user_id, QuizState::AwaitingAnswer(round));
            bot.send_message(chat_id, exercise).await?;
        }
        Err(err) => {
            error!(user_id = user_id.0, error = %err, "quiz generation failed");
            context.store.clear_quiz(user_id);
            bot.send_message(chat_id, APOLOGY).await?;
        }
    }
    Ok(())
}

async fn grade_answer(
    bot: &Bot,
    message: &Message,
    round: OpenRound,
    candidate: &str,
    context: &BotContext,
) -> HandlerResult {
    let Some(user) = message.from() else {
        return Ok(());
    };
    bot.send_chat_action(message.chat.id, ChatAction::Typing)
        .await?;
    debug!(
        user_id = user.id.0,
        flawed = %round.flawed,
        "grading quiz answer"
    );

    let judge = CompletionJudge::new(&context.client, &context.config.affirmative_tokens);
    let engine = QuizEngine::new(&context.client, &judge);
    match engine.grade(&round.reference, candidate).await {
        Ok(true) => {
            info!(user_id = user.id.0, "quiz answer correct");
            bot.send_message(message.chat.id, "Correct! Well done.")
                .await?;
        }
        Ok(false) => {
            info!(user_id = user.id.0, "quiz answer incorrect");
            bot.send_message(
                message.chat.id,
                format!("Not quite. The correct sentence was:\n\n{}", round.reference),
            )
            .await?;
        }
        Err(err) => {
            error!(user_id = user.id.0, error = %err, "quiz grading failed");
            bot.send_message(message.chat.id, APOLOGY).await?;
        }
    }
    Ok(())
}

async fn correct_message(
    bot: &Bot,
    message: &Message,
    text: &str,
    context: &BotContext,
) -> HandlerResult {
    let Some(user) = message.from() else {
        return Ok(());
    };
    info!(user_id = user.id.0, chars = text.chars().count(), "correcting text");
    bot.send_chat_action(message.chat.id, ChatAction::Typing)
        .await?;

    let mode = context.store.mode(user.id);
    match grammar::correct_text(&context.client, mode, text).await {
        Ok(corrected) => {
            bot.send_message(message.chat.id, corrected).await?;
        }
        Err(err) => {
            error!(user_id = user.id.0, error = %err, "grammar correction failed");
            bot.send_message(message.chat.id, APOLOGY).await?;
        }
    }
    Ok(())
}
