use teloxide::utils::command::BotCommands;

#[derive(Debug, Clone, BotCommands)]
#[command(rename_rule = "lowercase", description = "Supported commands:")]
pub enum Command {
    #[command(description = "start the bot and pick a mode")]
    Start,
    #[command(description = "show your Telegram user id")]
    Id,
}
