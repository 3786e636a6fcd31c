mod callback;
mod commands;
mod handlers;
mod keyboard;

use std::sync::Arc;

use teloxide::prelude::*;

use crate::config::Config;
use crate::llm::CompletionClient;
use crate::session::SessionStore;

pub use callback::CallbackAction;
pub use commands::Command;

pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>;

pub struct BotContext {
    pub config: Config,
    pub client: CompletionClient,
    pub store: SessionStore,
}

pub async fn run(config: Config, client: CompletionClient) -> anyhow::Result<()> {
    let bot = Bot::new(config.telegram_token.clone());
    let context = Arc::new(BotContext {
        config,
        client,
        store: SessionStore::new(),
    });

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(handlers::handle_command),
        )
        .branch(Update::filter_callback_query().endpoint(handlers::handle_callback))
        .branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![context])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
    Ok(())
}
