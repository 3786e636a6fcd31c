use crate::cli::Cli;
use crate::error::ConfigError;

pub const DEFAULT_MODEL: &str = "gpt-4.1-nano";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_AFFIRMATIVE: &str = "yes";

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_token: String,
    pub openai_key: String,
    pub model: String,
    pub base_url: String,
    pub allowed_user_ids: Vec<u64>,
    pub affirmative_tokens: Vec<String>,
    pub timeout_seconds: u64,
}

impl Config {
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let telegram_token = require_env("TELEGRAM_BOT_TOKEN")?;
        let openai_key = match trimmed(cli.key.as_deref()) {
            Some(key) => key,
            None => require_env("OPENAI_API_KEY")?,
        };
        let model = trimmed(cli.model.as_deref())
            .or_else(|| get_env("OPENAI_MODEL"))
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url =
            get_env("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let allowed_user_ids = parse_allow_list(
            "ALLOWED_USER_IDS",
            get_env("ALLOWED_USER_IDS").as_deref().unwrap_or(""),
        )?;
        let affirmative_tokens =
            parse_affirmative_tokens(get_env("AFFIRMATIVE_TOKENS").as_deref().unwrap_or(""));

        Ok(Self {
            telegram_token,
            openai_key,
            model,
            base_url,
            allowed_user_ids,
            affirmative_tokens,
            timeout_seconds: cli.timeout_seconds,
        })
    }
}

fn get_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn require_env(name: &'static str) -> Result<String, ConfigError> {
    get_env(name).ok_or(ConfigError::MissingVar { name })
}

fn trimmed(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

pub(crate) fn parse_allow_list(name: &'static str, raw: &str) -> Result<Vec<u64>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidAllowListEntry {
                    name,
                    entry: entry.to_string(),
                })
        })
        .collect()
}

fn parse_affirmative_tokens(raw: &str) -> Vec<String> {
    let tokens = raw
        .split(',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>();
    if tokens.is_empty() {
        vec![DEFAULT_AFFIRMATIVE.to_string()]
    } else {
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_allow_list() {
        let parsed = parse_allow_list("ALLOWED_USER_IDS", "42, 7").unwrap();
        assert_eq!(parsed, vec![42, 7]);
    }

    #[test]
    fn empty_allow_list_means_open_access() {
        let parsed = parse_allow_list("ALLOWED_USER_IDS", "").unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn rejects_non_numeric_allow_list_entry() {
        let err = parse_allow_list("ALLOWED_USER_IDS", "42,abc").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidAllowListEntry { entry, .. } if entry == "abc"
        ));
    }

    #[test]
    fn skips_blank_allow_list_entries() {
        let parsed = parse_allow_list("ALLOWED_USER_IDS", "42,,7,").unwrap();
        assert_eq!(parsed, vec![42, 7]);
    }

    #[test]
    fn affirmative_tokens_default_to_yes() {
        assert_eq!(parse_affirmative_tokens(""), vec!["yes"]);
        assert_eq!(parse_affirmative_tokens("Так, Yes"), vec!["так", "yes"]);
    }
}
