use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "grammar-trainer",
    version,
    about = "LLM-powered Telegram grammar trainer bot"
)]
pub struct Cli {
    /// Completion model name (overrides OPENAI_MODEL)
    #[arg(short = 'm', long = "model")]
    pub model: Option<String>,

    /// OpenAI API key (overrides environment variable)
    #[arg(short = 'k', long = "key")]
    pub key: Option<String>,

    /// Per-request bound on completion calls, in seconds
    #[arg(long = "timeout-seconds", default_value_t = 30)]
    pub timeout_seconds: u64,
}
